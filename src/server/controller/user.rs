use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::CreateUserParams,
        service::user::UserService,
        state::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// List every staff account, active or not.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/vigilantes",
    tag = USER_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Staff accounts", body = Vec<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db, &state.auth).get_all().await?;

    Ok(Json(
        users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Register a guard or admin account.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new account
/// - `400 Bad Request` - Blank username, name or password
/// - `409 Conflict` - Username already taken
#[utoipa::path(
    post,
    path = "/api/admin/vigilantes",
    tag = USER_TAG,
    security(("bearerAuth" = [])),
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid account data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db, &state.auth);
    let user = service
        .create(admin.id, CreateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Deactivate a staff account. Its tokens stop working immediately.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The deactivated account
/// - `400 Bad Request` - Admin tried to deactivate their own account
/// - `404 Not Found` - No such account
#[utoipa::path(
    delete,
    path = "/api/admin/vigilantes/{id}",
    tag = USER_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Account deactivated", body = UserDto),
        (status = 400, description = "Cannot deactivate yourself", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deactivate_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db, &state.auth);

    match service.deactivate(admin.id, id).await? {
        Some(user) => Ok(Json(user.into_dto())),
        None => Err(AppError::NotFound(format!("User {} not found", id))),
    }
}

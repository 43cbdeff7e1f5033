use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, LoginResponseDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::auth::LoginParams,
        service::auth::AuthService,
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Exchange username, password and role for a bearer token.
///
/// The role is the one the user picked on the login screen and must match the stored
/// role. A successful login writes a `LOGIN` audit entry.
///
/// # Returns
/// - `200 OK` - Token, expiry and the authenticated user
/// - `400 Bad Request` - Username, password or role missing or blank
/// - `401 Unauthorized` - Unknown user, inactive user or wrong password
/// - `403 Forbidden` - Correct credentials but a different or unknown role
/// - `429 Too Many Requests` - Login rate limit exceeded
/// - `500 Internal Server Error` - Database or hashing failure
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login succeeded", body = LoginResponseDto),
        (status = 400, description = "Missing credentials", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "Role unknown or does not match the account", body = ErrorDto),
        (status = 429, description = "Too many login attempts"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.auth);

    let session = service.login(LoginParams::from_dto(payload)).await?;

    Ok(Json(session.into_dto()))
}

/// Get the user the bearer token belongs to.
///
/// # Returns
/// - `200 OK` - Current user
/// - `401 Unauthorized` - Missing, invalid or stale token
#[utoipa::path(
    get,
    path = "/api/usuario",
    tag = AUTH_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    Ok(Json(user.into_dto()))
}

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        person::{PersonDto, PersonFormDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::person::{CreatePersonParams, UpdatePersonParams},
        service::person::PersonService,
        state::AppState,
    },
};

pub static PERSON_TAG: &str = "person";

/// List active persons ordered by name.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/personas",
    tag = PERSON_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Active persons", body = Vec<PersonDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_persons(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let persons = PersonService::new(&state.db).get_active().await?;

    Ok(Json(
        persons.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Get a person by id, including deactivated ones.
#[utoipa::path(
    get,
    path = "/api/personas/{id}",
    tag = PERSON_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Person id")),
    responses(
        (status = 200, description = "Person", body = PersonDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    match PersonService::new(&state.db).get_by_id(id).await? {
        Some(person) => Ok(Json(person.into_dto())),
        None => Err(AppError::NotFound(format!("Person {} not found", id))),
    }
}

/// Register a person.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new person
/// - `400 Bad Request` - Document id or name blank
/// - `409 Conflict` - Document id already registered
#[utoipa::path(
    post,
    path = "/api/personas",
    tag = PERSON_TAG,
    security(("bearerAuth" = [])),
    request_body = PersonFormDto,
    responses(
        (status = 201, description = "Person created", body = PersonDto),
        (status = 400, description = "Invalid person data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Document id already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PersonFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let person = PersonService::new(&state.db)
        .create(admin.id, CreatePersonParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(person.into_dto())))
}

/// Replace a person's record.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/personas/{id}",
    tag = PERSON_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Person id")),
    request_body = PersonFormDto,
    responses(
        (status = 200, description = "Person updated", body = PersonDto),
        (status = 400, description = "Invalid person data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 409, description = "Document id held by another person", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_person(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<PersonFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = PersonService::new(&state.db);

    match service
        .update(admin.id, UpdatePersonParams::from_dto(id, payload))
        .await?
    {
        Some(person) => Ok(Json(person.into_dto())),
        None => Err(AppError::NotFound(format!("Person {} not found", id))),
    }
}

/// Deactivate a person. Their vehicles drop out of the vehicle list and get
/// denied at the gate.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/personas/{id}",
    tag = PERSON_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Person id")),
    responses(
        (status = 200, description = "Person deactivated", body = PersonDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_person(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    match PersonService::new(&state.db).delete(admin.id, id).await? {
        Some(person) => Ok(Json(person.into_dto())),
        None => Err(AppError::NotFound(format!("Person {} not found", id))),
    }
}

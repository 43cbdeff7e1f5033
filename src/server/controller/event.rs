use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        event::{EventDto, EventFormDto, VerifyEventDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::event::EventParams,
        service::event::EventService,
        state::AppState,
    },
};

pub static EVENT_TAG: &str = "event";

/// List calendar events, latest start first.
#[utoipa::path(
    get,
    path = "/api/eventos",
    tag = EVENT_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Events", body = Vec<EventDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let events = EventService::new(&state.db).get_all().await?;

    Ok(Json(
        events.into_iter().map(|e| e.into_dto()).collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/eventos/{id}",
    tag = EVENT_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event", body = EventDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    match EventService::new(&state.db).get_by_id(id).await? {
        Some(event) => Ok(Json(event.into_dto())),
        None => Err(AppError::NotFound(format!("Event {} not found", id))),
    }
}

/// Schedule an event.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new event
/// - `400 Bad Request` - Blank title, unparsable date or end before start
#[utoipa::path(
    post,
    path = "/api/eventos",
    tag = EVENT_TAG,
    security(("bearerAuth" = [])),
    request_body = EventFormDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<EventFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let params = EventParams::from_dto(payload)?;
    let event = EventService::new(&state.db).create(admin.id, params).await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/eventos/{id}",
    tag = EVENT_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Event id")),
    request_body = EventFormDto,
    responses(
        (status = 200, description = "Event updated", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<EventFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let params = EventParams::from_dto(payload)?;

    match EventService::new(&state.db)
        .update(admin.id, id, params)
        .await?
    {
        Some(event) => Ok(Json(event.into_dto())),
        None => Err(AppError::NotFound(format!("Event {} not found", id))),
    }
}

/// Mark an event as checked by the guard on duty.
#[utoipa::path(
    put,
    path = "/api/eventos/{id}/verificar",
    tag = EVENT_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Event id")),
    request_body = VerifyEventDto,
    responses(
        (status = 200, description = "Event updated", body = EventDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<VerifyEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    match EventService::new(&state.db)
        .set_verified(user.id, id, payload.verified)
        .await?
    {
        Some(event) => Ok(Json(event.into_dto())),
        None => Err(AppError::NotFound(format!("Event {} not found", id))),
    }
}

/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/eventos/{id}",
    tag = EVENT_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    if !EventService::new(&state.db).delete(admin.id, id).await? {
        return Err(AppError::NotFound(format!("Event {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

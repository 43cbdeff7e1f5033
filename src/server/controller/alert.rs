use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        alert::{AlertDto, ReportIncidentDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::alert::NewAlert,
        service::alert::AlertService,
        state::AppState,
    },
};

pub static ALERT_TAG: &str = "alert";

/// Report an incident from the gate, optionally linked to an access.
///
/// # Returns
/// - `201 Created` - The recorded alert
/// - `400 Bad Request` - Blank category or detail, or unknown access id
#[utoipa::path(
    post,
    path = "/api/vigilante/reportar",
    tag = ALERT_TAG,
    security(("bearerAuth" = [])),
    request_body = ReportIncidentDto,
    responses(
        (status = 201, description = "Incident recorded", body = AlertDto),
        (status = 400, description = "Invalid report", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn report_incident(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ReportIncidentDto>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let alert = NewAlert::from_report(payload, guard.id)?;
    let alert = AlertService::new(&state.db).report(alert).await?;

    Ok((StatusCode::CREATED, Json(alert.into_dto())))
}

/// Alerts raised by or reported by the calling guard, newest first.
#[utoipa::path(
    get,
    path = "/api/vigilante/reportes",
    tag = ALERT_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Caller's alerts", body = Vec<AlertDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_reports(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let alerts = AlertService::new(&state.db)
        .get_reported_by(guard.id)
        .await?;

    Ok(Json(
        alerts.into_iter().map(|a| a.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Every open alert, newest first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/alertas",
    tag = ALERT_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Open alerts", body = Vec<AlertDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alerts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let alerts = AlertService::new(&state.db).get_all().await?;

    Ok(Json(
        alerts.into_iter().map(|a| a.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Resolve an alert, removing it from the open list.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/admin/alertas/{id}",
    tag = ALERT_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Alert id")),
    responses(
        (status = 204, description = "Alert resolved"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Alert not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resolve_alert(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    if !AlertService::new(&state.db).resolve(admin.id, id).await? {
        return Err(AppError::NotFound(format!("Alert {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

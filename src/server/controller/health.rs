use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{model::api::HealthDto, server::state::AppState};

pub static HEALTH_TAG: &str = "health";

/// Report whether the service can reach its database.
///
/// # Returns
/// - `200 OK` - Database reachable
/// - `503 Service Unavailable` - Database ping failed
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service healthy", body = HealthDto),
        (status = 503, description = "Database unreachable", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthDto {
                status: "ok".to_string(),
                database: "connected".to_string(),
            }),
        ),
        Err(e) => {
            tracing::error!("Database ping failed: {}", e);

            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthDto {
                    status: "error".to_string(),
                    database: "unreachable".to_string(),
                }),
            )
        }
    }
}

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        access::{
            AccessFilterParams, AccessOutcomeDto, PaginatedAccessesDto, RecentAccessDto,
            ValidateAccessDto,
        },
        api::ErrorDto,
        vehicle::VehicleInsideDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::access::{AccessFilter, ValidateAccessParams},
        service::access::AccessService,
        state::AppState,
    },
};

pub static ACCESS_TAG: &str = "access";

const MAX_RECENT: u64 = 100;

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecentParams {
    /// Number of rows, at most 100
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    10
}

/// Search the access history, newest first.
///
/// # Returns
/// - `200 OK` - Requested page of accesses
/// - `400 Bad Request` - Malformed date, inverted range, unknown vehicle kind or zero page size
#[utoipa::path(
    get,
    path = "/api/accesos",
    tag = ACCESS_TAG,
    security(("bearerAuth" = [])),
    params(AccessFilterParams),
    responses(
        (status = 200, description = "Access history page", body = PaginatedAccessesDto),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_accesses(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<AccessFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let filter = AccessFilter::from_params(params)?;
    let page = AccessService::new(&state.db).get_history(filter).await?;

    Ok(Json(page.into_dto()))
}

/// Latest accesses for the guard's live feed.
#[utoipa::path(
    get,
    path = "/api/accesos/recientes",
    tag = ACCESS_TAG,
    security(("bearerAuth" = [])),
    params(RecentParams),
    responses(
        (status = 200, description = "Latest accesses", body = Vec<RecentAccessDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recent_accesses(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<RecentParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let accesses = AccessService::new(&state.db)
        .get_recent(params.limit.clamp(1, MAX_RECENT))
        .await?;

    Ok(Json(
        accesses
            .into_iter()
            .map(|a| a.into_recent_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Read the plate in a camera frame and decide whether the vehicle may pass.
///
/// Every scan is recorded, including unreadable frames, so a `200 OK` is returned for
/// authorized, denied and failed outcomes alike. Denials of unregistered vehicles or
/// inactive owners also raise an alert.
///
/// # Access Control
/// - Any authenticated user; the caller is recorded as the guard on duty
///
/// # Returns
/// - `200 OK` - Recorded outcome
/// - `400 Bad Request` - Missing image or unknown control point
#[utoipa::path(
    post,
    path = "/api/accesos/validar",
    tag = ACCESS_TAG,
    security(("bearerAuth" = [])),
    request_body = ValidateAccessDto,
    responses(
        (status = 200, description = "Recorded access outcome", body = AccessOutcomeDto),
        (status = 400, description = "Missing image or unknown control point", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn validate_access(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ValidateAccessDto>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let params = ValidateAccessParams::from_dto(payload, guard.id);
    let outcome = AccessService::new(&state.db)
        .validate(state.recognizer.as_ref(), params)
        .await?;

    Ok(Json(outcome.into_dto()))
}

/// Vehicles currently inside, with the time they came in.
#[utoipa::path(
    get,
    path = "/api/vigilante/vehiculos-en-patio",
    tag = ACCESS_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Vehicles inside", body = Vec<VehicleInsideDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles_inside(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let inside = AccessService::new(&state.db).get_vehicles_inside().await?;

    Ok(Json(
        inside.into_iter().map(|v| v.into_dto()).collect::<Vec<_>>(),
    ))
}

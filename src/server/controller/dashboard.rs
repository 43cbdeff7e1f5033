use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        dashboard::{AccessReportRowDto, AdminSummaryDto, GuardDashboardDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::dashboard::DashboardService,
        state::AppState,
    },
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Registry and activity totals.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/resumen",
    tag = DASHBOARD_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Admin totals", body = AdminSummaryDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let summary = DashboardService::new(&state.db).admin_summary().await?;

    Ok(Json(summary.into_dto()))
}

/// Latest accesses plus alert and vehicle counts for the gate screen.
#[utoipa::path(
    get,
    path = "/api/dashboard/vigilante",
    tag = DASHBOARD_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Guard dashboard", body = GuardDashboardDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guard_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let dashboard = DashboardService::new(&state.db).guard_dashboard().await?;

    Ok(Json(dashboard.into_dto()))
}

/// Access report joined with vehicle and owner details, newest first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/accesos",
    tag = DASHBOARD_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Access report rows", body = Vec<AccessReportRowDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_access_report(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let rows = DashboardService::new(&state.db).access_report().await?;

    Ok(Json(
        rows.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>(),
    ))
}

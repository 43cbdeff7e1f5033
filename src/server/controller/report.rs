use axum::{
    extract::State,
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
        HeaderMap,
    },
    response::IntoResponse,
};

use crate::{
    model::api::ErrorDto,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{dashboard::DashboardService, report},
        state::AppState,
    },
};

pub static REPORT_TAG: &str = "report";

const PDF_CONTENT_TYPE: &str = "application/pdf";
const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Download the access report as a PDF table.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/exportar/pdf",
    tag = REPORT_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "PDF document", content_type = "application/pdf"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_pdf(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let rows = DashboardService::new(&state.db).access_report().await?;
    let bytes = report::render_pdf(&rows)?;

    Ok((
        [
            (CONTENT_TYPE, PDF_CONTENT_TYPE),
            (
                CONTENT_DISPOSITION,
                "attachment; filename=\"access-report.pdf\"",
            ),
        ],
        bytes,
    ))
}

/// Download the access report as an Excel workbook.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/exportar/excel",
    tag = REPORT_TAG,
    security(("bearerAuth" = [])),
    responses(
        (
            status = 200,
            description = "Excel workbook",
            content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        ),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_excel(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let rows = DashboardService::new(&state.db).access_report().await?;
    let bytes = report::render_xlsx(&rows)?;

    Ok((
        [
            (CONTENT_TYPE, XLSX_CONTENT_TYPE),
            (
                CONTENT_DISPOSITION,
                "attachment; filename=\"access-report.xlsx\"",
            ),
        ],
        bytes,
    ))
}

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        audit::{AuditFilterParams, PaginatedAuditDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::audit::AuditService,
        state::AppState,
    },
};

pub static AUDIT_TAG: &str = "audit";

/// Browse the audit log, newest first.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Requested page of audit entries
/// - `400 Bad Request` - Page size of zero
#[utoipa::path(
    get,
    path = "/api/admin/auditoria",
    tag = AUDIT_TAG,
    security(("bearerAuth" = [])),
    params(AuditFilterParams),
    responses(
        (status = 200, description = "Audit log page", body = PaginatedAuditDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_audit_log(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<AuditFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let page = AuditService::new(&state.db).get_paginated(params).await?;

    Ok(Json(page.into_dto()))
}

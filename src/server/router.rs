use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        access::{get_accesses, get_recent_accesses, get_vehicles_inside, validate_access},
        alert::{get_alerts, get_own_reports, report_incident, resolve_alert},
        audit::get_audit_log,
        auth::{get_user, login},
        dashboard::{get_access_report, get_admin_summary, get_guard_dashboard},
        event::{create_event, delete_event, get_event, get_events, update_event, verify_event},
        health::health,
        person::{create_person, delete_person, get_person, get_persons, update_person},
        report::{export_excel, export_pdf},
        user::{create_user, deactivate_user, get_users},
        vehicle::{
            create_vehicle, delete_vehicle, get_vehicle, get_vehicle_by_plate, get_vehicles,
            update_vehicle,
        },
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Gatehouse", description = "Vehicle access control API"),
    paths(
        crate::server::controller::auth::login,
        crate::server::controller::auth::get_user,
        crate::server::controller::health::health,
        crate::server::controller::user::get_users,
        crate::server::controller::user::create_user,
        crate::server::controller::user::deactivate_user,
        crate::server::controller::person::get_persons,
        crate::server::controller::person::get_person,
        crate::server::controller::person::create_person,
        crate::server::controller::person::update_person,
        crate::server::controller::person::delete_person,
        crate::server::controller::vehicle::get_vehicles,
        crate::server::controller::vehicle::get_vehicle,
        crate::server::controller::vehicle::get_vehicle_by_plate,
        crate::server::controller::vehicle::create_vehicle,
        crate::server::controller::vehicle::update_vehicle,
        crate::server::controller::vehicle::delete_vehicle,
        crate::server::controller::access::get_accesses,
        crate::server::controller::access::get_recent_accesses,
        crate::server::controller::access::validate_access,
        crate::server::controller::access::get_vehicles_inside,
        crate::server::controller::alert::report_incident,
        crate::server::controller::alert::get_own_reports,
        crate::server::controller::alert::get_alerts,
        crate::server::controller::alert::resolve_alert,
        crate::server::controller::event::get_events,
        crate::server::controller::event::get_event,
        crate::server::controller::event::create_event,
        crate::server::controller::event::update_event,
        crate::server::controller::event::verify_event,
        crate::server::controller::event::delete_event,
        crate::server::controller::dashboard::get_admin_summary,
        crate::server::controller::dashboard::get_guard_dashboard,
        crate::server::controller::dashboard::get_access_report,
        crate::server::controller::audit::get_audit_log,
        crate::server::controller::report::export_pdf,
        crate::server::controller::report::export_excel,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Login and current user"),
        (name = "health", description = "Service health"),
        (name = "user", description = "Guard and admin accounts"),
        (name = "person", description = "Vehicle owners"),
        (name = "vehicle", description = "Registered vehicles"),
        (name = "access", description = "Gate scans and access history"),
        (name = "alert", description = "Security alerts and incident reports"),
        (name = "event", description = "Facility calendar"),
        (name = "dashboard", description = "Dashboards and reports"),
        (name = "audit", description = "Audit log"),
        (name = "report", description = "PDF and Excel exports")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.security_schemes.insert(
                "bearerAuth".to_string(),
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Public login endpoint. Kept apart so the rate limit only applies here.
pub fn login_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .route("/api/health", get(health))
        .route("/api/usuario", get(get_user))
        .route("/api/personas", get(get_persons).post(create_person))
        .route(
            "/api/personas/{id}",
            get(get_person).put(update_person).delete(delete_person),
        )
        .route("/api/vehiculos", get(get_vehicles).post(create_vehicle))
        .route(
            "/api/vehiculos/{id}",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
        .route("/api/vehiculos/placa/{placa}", get(get_vehicle_by_plate))
        .route("/api/accesos", get(get_accesses))
        .route("/api/accesos/recientes", get(get_recent_accesses))
        .route("/api/accesos/validar", post(validate_access))
        .route("/api/vigilante/vehiculos-en-patio", get(get_vehicles_inside))
        .route("/api/vigilante/reportar", post(report_incident))
        .route("/api/vigilante/reportes", get(get_own_reports))
        .route("/api/dashboard/vigilante", get(get_guard_dashboard))
        .route("/api/eventos", get(get_events).post(create_event))
        .route(
            "/api/eventos/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/api/eventos/{id}/verificar", put(verify_event))
        .route("/api/admin/resumen", get(get_admin_summary))
        .route("/api/admin/accesos", get(get_access_report))
        .route("/api/admin/alertas", get(get_alerts))
        .route("/api/admin/alertas/{id}", delete(resolve_alert))
        .route("/api/admin/auditoria", get(get_audit_log))
        .route("/api/admin/exportar/pdf", get(export_pdf))
        .route("/api/admin/exportar/excel", get(export_excel))
        .route("/api/admin/vigilantes", get(get_users).post(create_user))
        .route("/api/admin/vigilantes/{id}", delete(deactivate_user))
}

/// Every route without the login rate limit.
pub fn router() -> Router<AppState> {
    login_routes().merge(api_routes())
}

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        vehicle::{VehicleDto, VehicleFormDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::vehicle::VehicleParams,
        service::vehicle::VehicleService,
        state::AppState,
    },
};

pub static VEHICLE_TAG: &str = "vehicle";

/// List vehicles whose owner is active, with an owner summary.
#[utoipa::path(
    get,
    path = "/api/vehiculos",
    tag = VEHICLE_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Registered vehicles", body = Vec<VehicleDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let vehicles = VehicleService::new(&state.db).get_all().await?;

    Ok(Json(
        vehicles
            .into_iter()
            .map(|v| v.into_dto())
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/vehiculos/{id}",
    tag = VEHICLE_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "Vehicle", body = VehicleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    match VehicleService::new(&state.db).get_by_id(id).await? {
        Some(vehicle) => Ok(Json(vehicle.into_dto())),
        None => Err(AppError::NotFound(format!("Vehicle {} not found", id))),
    }
}

/// Look a vehicle up by plate. The plate is normalized before the lookup, so
/// `abc-123` finds `ABC123`.
#[utoipa::path(
    get,
    path = "/api/vehiculos/placa/{placa}",
    tag = VEHICLE_TAG,
    security(("bearerAuth" = [])),
    params(("placa" = String, Path, description = "Plate, in any case or spacing")),
    responses(
        (status = 200, description = "Vehicle", body = VehicleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No vehicle with this plate", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle_by_plate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plate): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    match VehicleService::new(&state.db).get_by_plate(&plate).await? {
        Some(vehicle) => Ok(Json(vehicle.into_dto())),
        None => Err(AppError::NotFound(format!(
            "No vehicle registered with plate {}",
            plate
        ))),
    }
}

/// Register a vehicle for an active person.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new vehicle
/// - `400 Bad Request` - Empty plate, or owner missing or inactive
/// - `409 Conflict` - Plate already registered
#[utoipa::path(
    post,
    path = "/api/vehiculos",
    tag = VEHICLE_TAG,
    security(("bearerAuth" = [])),
    request_body = VehicleFormDto,
    responses(
        (status = 201, description = "Vehicle created", body = VehicleDto),
        (status = 400, description = "Invalid vehicle data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Plate already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<VehicleFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let vehicle = VehicleService::new(&state.db)
        .create(admin.id, VehicleParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(vehicle.into_dto())))
}

/// Replace a vehicle's record. Occupancy is left untouched.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/vehiculos/{id}",
    tag = VEHICLE_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Vehicle id")),
    request_body = VehicleFormDto,
    responses(
        (status = 200, description = "Vehicle updated", body = VehicleDto),
        (status = 400, description = "Invalid vehicle data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 409, description = "Plate used by another vehicle", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<VehicleFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = VehicleService::new(&state.db);

    match service
        .update(admin.id, id, VehicleParams::from_dto(payload))
        .await?
    {
        Some(vehicle) => Ok(Json(vehicle.into_dto())),
        None => Err(AppError::NotFound(format!("Vehicle {} not found", id))),
    }
}

/// Delete a vehicle. Past accesses keep their plate but lose the link.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/vehiculos/{id}",
    tag = VEHICLE_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 204, description = "Vehicle deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    if !VehicleService::new(&state.db).delete(admin.id, id).await? {
        return Err(AppError::NotFound(format!("Vehicle {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

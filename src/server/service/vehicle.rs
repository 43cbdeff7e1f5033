use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::audit::AuditAction,
    server::{
        data::{person::PersonRepository, vehicle::VehicleRepository},
        error::AppError,
        model::vehicle::{VehicleParams, VehicleWithOwner},
        service::audit::AuditTrail,
        util::plate::{is_recognizable_plate, normalize_registered_plate},
    },
};

/// Vehicle registry operations.
///
/// A vehicle can only be registered to, or moved to, an existing and active owner, and
/// plates are unique in their normalized form.
pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets vehicles whose owner is active, with owner summary.
    pub async fn get_all(&self) -> Result<Vec<VehicleWithOwner>, AppError> {
        Ok(VehicleRepository::new(self.db)
            .get_with_active_owner()
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<VehicleWithOwner>, AppError> {
        Ok(VehicleRepository::new(self.db).find_by_id(id).await?)
    }

    /// Looks a vehicle up by plate in any spelling the registry normalizes.
    pub async fn get_by_plate(&self, plate: &str) -> Result<Option<VehicleWithOwner>, AppError> {
        let plate = normalize_registered_plate(plate);
        if plate.is_empty() {
            return Ok(None);
        }

        Ok(VehicleRepository::new(self.db)
            .find_by_plate(&plate)
            .await?)
    }

    /// Registers a vehicle.
    ///
    /// # Returns
    /// - `Ok(VehicleWithOwner)` - The created vehicle
    /// - `Err(AppError::BadRequest)` - Empty or unrecognizable plate, or owner missing or inactive
    /// - `Err(AppError::Conflict)` - Plate already registered
    pub async fn create(
        &self,
        actor: i32,
        params: VehicleParams,
    ) -> Result<VehicleWithOwner, AppError> {
        let txn = self.db.begin().await?;

        validate(&txn, &params, None).await?;

        let repo = VehicleRepository::new(&txn);
        let vehicle = repo.create(params).await?;

        AuditTrail::new(&txn, Some(actor))
            .record(AuditAction::Create, None, Some(&vehicle))
            .await?;

        let created = repo.find_by_id(vehicle.id).await?.ok_or_else(|| {
            AppError::InternalError(format!("Vehicle {} not found after creation", vehicle.id))
        })?;
        txn.commit().await?;

        tracing::info!("User {} registered vehicle {}", actor, created.vehicle.plate);

        Ok(created)
    }

    /// Replaces the registry fields of a vehicle.
    ///
    /// # Returns
    /// - `Ok(Some(VehicleWithOwner))` - The updated vehicle
    /// - `Ok(None)` - No vehicle with this id
    /// - `Err(AppError::BadRequest)` - Empty or unrecognizable plate, or owner missing or inactive
    /// - `Err(AppError::Conflict)` - Plate used by another vehicle
    pub async fn update(
        &self,
        actor: i32,
        id: i32,
        params: VehicleParams,
    ) -> Result<Option<VehicleWithOwner>, AppError> {
        let txn = self.db.begin().await?;
        let repo = VehicleRepository::new(&txn);

        let Some(previous) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        validate(&txn, &params, Some(id)).await?;

        let vehicle = repo.update(id, params).await?;

        AuditTrail::new(&txn, Some(actor))
            .record(AuditAction::Update, Some(&previous.vehicle), Some(&vehicle))
            .await?;

        let updated = repo.find_by_id(id).await?;
        txn.commit().await?;

        Ok(updated)
    }

    /// Deletes a vehicle. Its access history keeps the plate as read.
    ///
    /// # Returns
    /// - `Ok(true)` - Vehicle deleted
    /// - `Ok(false)` - No vehicle with this id
    pub async fn delete(&self, actor: i32, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let repo = VehicleRepository::new(&txn);

        let Some(previous) = repo.find_by_id(id).await? else {
            return Ok(false);
        };

        repo.delete(id).await?;

        AuditTrail::new(&txn, Some(actor))
            .record(AuditAction::Delete, Some(&previous.vehicle), None)
            .await?;
        txn.commit().await?;

        tracing::info!("User {} deleted vehicle {}", actor, previous.vehicle.plate);

        Ok(true)
    }
}

async fn validate<C: ConnectionTrait>(
    db: &C,
    params: &VehicleParams,
    excluding: Option<i32>,
) -> Result<(), AppError> {
    if params.plate.is_empty() {
        return Err(AppError::BadRequest("Plate is required".to_string()));
    }

    if !is_recognizable_plate(&params.plate) {
        return Err(AppError::BadRequest(format!(
            "Plate '{}' cannot be read back from a camera frame",
            params.plate
        )));
    }

    let owner = PersonRepository::new(db).find_by_id(params.owner_id).await?;
    if !owner.is_some_and(|owner| owner.active) {
        return Err(AppError::BadRequest(
            "Owner does not exist or is inactive".to_string(),
        ));
    }

    if VehicleRepository::new(db)
        .plate_taken(&params.plate, excluding)
        .await?
    {
        return Err(AppError::Conflict(format!(
            "Plate '{}' is already registered",
            params.plate
        )));
    }

    Ok(())
}

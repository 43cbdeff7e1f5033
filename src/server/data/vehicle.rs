//! Vehicle data repository.
//!
//! Besides registry CRUD this repository owns the occupancy flag. The flag is only ever
//! changed through [`VehicleRepository::set_inside_if`], a compare-and-set update, so two
//! concurrent scans of the same plate cannot both flip it.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::vehicle::{Vehicle, VehicleParams, VehicleWithOwner};

pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a vehicle outside the facility.
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The created vehicle
    /// - `Err(DbErr)` - Database error, including unique and foreign key violations
    pub async fn create(&self, params: VehicleParams) -> Result<Vehicle, DbErr> {
        let entity = entity::vehicle::ActiveModel {
            plate: ActiveValue::Set(params.plate),
            kind: ActiveValue::Set(params.kind.as_str().to_string()),
            brand: ActiveValue::Set(params.brand),
            model: ActiveValue::Set(params.model),
            color: ActiveValue::Set(params.color),
            person_id: ActiveValue::Set(params.owner_id),
            inside: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Vehicle::from_entity(entity)
    }

    /// Gets a vehicle by id together with its owner.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<VehicleWithOwner>, DbErr> {
        entity::prelude::Vehicle::find_by_id(id)
            .find_also_related(entity::prelude::Person)
            .one(self.db)
            .await?
            .map(|(vehicle, owner)| VehicleWithOwner::from_entity(vehicle, owner))
            .transpose()
    }

    /// Gets a vehicle by its normalized plate together with its owner.
    ///
    /// # Arguments
    /// - `plate` - Plate in registry form (upper-case, no separators)
    pub async fn find_by_plate(&self, plate: &str) -> Result<Option<VehicleWithOwner>, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::Plate.eq(plate))
            .find_also_related(entity::prelude::Person)
            .one(self.db)
            .await?
            .map(|(vehicle, owner)| VehicleWithOwner::from_entity(vehicle, owner))
            .transpose()
    }

    /// Gets vehicles whose owner is active, ordered by plate.
    pub async fn get_with_active_owner(&self) -> Result<Vec<VehicleWithOwner>, DbErr> {
        entity::prelude::Vehicle::find()
            .find_also_related(entity::prelude::Person)
            .filter(entity::person::Column::Active.eq(true))
            .order_by_asc(entity::vehicle::Column::Plate)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(vehicle, owner)| VehicleWithOwner::from_entity(vehicle, owner))
            .collect()
    }

    /// Gets vehicles currently inside, ordered by plate.
    pub async fn get_inside(&self) -> Result<Vec<VehicleWithOwner>, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::Inside.eq(true))
            .find_also_related(entity::prelude::Person)
            .order_by_asc(entity::vehicle::Column::Plate)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(vehicle, owner)| VehicleWithOwner::from_entity(vehicle, owner))
            .collect()
    }

    /// Checks whether another vehicle already uses this plate.
    ///
    /// # Arguments
    /// - `plate` - Normalized plate
    /// - `excluding` - Id of the vehicle being updated, ignored in the check
    pub async fn plate_taken(&self, plate: &str, excluding: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Vehicle::find().filter(entity::vehicle::Column::Plate.eq(plate));

        if let Some(id) = excluding {
            query = query.filter(entity::vehicle::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Overwrites the registry fields of a vehicle. The occupancy flag is untouched.
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The updated vehicle
    /// - `Err(DbErr::RecordNotFound)` - No vehicle with this id
    pub async fn update(&self, id: i32, params: VehicleParams) -> Result<Vehicle, DbErr> {
        let entity = entity::vehicle::ActiveModel {
            id: ActiveValue::Unchanged(id),
            plate: ActiveValue::Set(params.plate),
            kind: ActiveValue::Set(params.kind.as_str().to_string()),
            brand: ActiveValue::Set(params.brand),
            model: ActiveValue::Set(params.model),
            color: ActiveValue::Set(params.color),
            person_id: ActiveValue::Set(params.owner_id),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Vehicle::from_entity(entity)
    }

    /// Deletes a vehicle. Access rows keep their plate and lose the link.
    ///
    /// # Returns
    /// - `Ok(true)` - Vehicle deleted
    /// - `Ok(false)` - No vehicle with this id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Vehicle::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Flips the occupancy flag only if it currently holds the opposite value.
    ///
    /// # Arguments
    /// - `id` - Vehicle id
    /// - `inside` - Value to store
    ///
    /// # Returns
    /// - `Ok(true)` - The flag was `!inside` and is now `inside`
    /// - `Ok(false)` - The flag already held `inside` (or the vehicle is gone)
    pub async fn set_inside_if(&self, id: i32, inside: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::Vehicle::update_many()
            .col_expr(entity::vehicle::Column::Inside, Expr::value(inside))
            .filter(entity::vehicle::Column::Id.eq(id))
            .filter(entity::vehicle::Column::Inside.eq(!inside))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Vehicle::find().count(self.db).await
    }

    pub async fn count_inside(&self) -> Result<u64, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::Inside.eq(true))
            .count(self.db)
            .await
    }
}

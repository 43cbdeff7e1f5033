//! Access factory for seeding the movement log.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating access log rows.
///
/// # Example
///
/// ```rust,ignore
/// let access = AccessFactory::new(&db)
///     .vehicle(&vehicle)
///     .direction("exit")
///     .result("denied")
///     .build()
///     .await?;
/// ```
pub struct AccessFactory<'a> {
    db: &'a DatabaseConnection,
    occurred_at: DateTime<Utc>,
    direction: String,
    result: String,
    plate: Option<String>,
    observations: Option<String>,
    vehicle_id: Option<i32>,
    control_point_id: Option<i32>,
    guard_id: Option<i32>,
}

impl<'a> AccessFactory<'a> {
    /// Creates a new AccessFactory for an authorized entry happening now with no
    /// vehicle attached.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            occurred_at: Utc::now(),
            direction: "entry".to_string(),
            result: "authorized".to_string(),
            plate: None,
            observations: None,
            vehicle_id: None,
            control_point_id: None,
            guard_id: None,
        }
    }

    /// Links the access to a vehicle and copies its plate.
    pub fn vehicle(mut self, vehicle: &entity::vehicle::Model) -> Self {
        self.vehicle_id = Some(vehicle.id);
        self.plate = Some(vehicle.plate.clone());
        self
    }

    pub fn plate(mut self, plate: impl Into<String>) -> Self {
        self.plate = Some(plate.into());
        self
    }

    pub fn occurred_at(mut self, occurred_at: DateTime<Utc>) -> Self {
        self.occurred_at = occurred_at;
        self
    }

    /// Sets the direction, `"entry"` or `"exit"`.
    pub fn direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = direction.into();
        self
    }

    /// Sets the result, `"authorized"`, `"denied"` or `"failed"`.
    pub fn result(mut self, result: impl Into<String>) -> Self {
        self.result = result.into();
        self
    }

    pub fn observations(mut self, observations: impl Into<String>) -> Self {
        self.observations = Some(observations.into());
        self
    }

    pub fn control_point(mut self, control_point_id: i32) -> Self {
        self.control_point_id = Some(control_point_id);
        self
    }

    pub fn guard(mut self, guard_id: i32) -> Self {
        self.guard_id = Some(guard_id);
        self
    }

    /// Builds and inserts the access entity into the database.
    pub async fn build(self) -> Result<entity::access::Model, DbErr> {
        entity::access::ActiveModel {
            occurred_at: ActiveValue::Set(self.occurred_at),
            direction: ActiveValue::Set(self.direction),
            result: ActiveValue::Set(self.result),
            plate: ActiveValue::Set(self.plate),
            observations: ActiveValue::Set(self.observations),
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            control_point_id: ActiveValue::Set(self.control_point_id),
            guard_id: ActiveValue::Set(self.guard_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an authorized entry for `vehicle` happening now.
pub async fn create_access(
    db: &DatabaseConnection,
    vehicle: &entity::vehicle::Model,
) -> Result<entity::access::Model, DbErr> {
    AccessFactory::new(db).vehicle(vehicle).build().await
}

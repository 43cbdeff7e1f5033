//! Vehicle factory for creating registered vehicles.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vehicles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let vehicle = VehicleFactory::new(&db, owner.id)
///     .plate("ABC123")
///     .inside(true)
///     .build()
///     .await?;
/// ```
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    plate: String,
    kind: String,
    brand: Option<String>,
    model: Option<String>,
    color: Option<String>,
    person_id: i32,
    inside: bool,
}

impl<'a> VehicleFactory<'a> {
    /// Creates a new VehicleFactory owned by `person_id` with default values.
    ///
    /// Defaults:
    /// - plate: `"TST{id}"` padded to three digits
    /// - kind: `"car"`
    /// - color: `"Blue"`
    /// - inside: `false`
    pub fn new(db: &'a DatabaseConnection, person_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            plate: format!("TST{:03}", id),
            kind: "car".to_string(),
            brand: Some("Mazda".to_string()),
            model: Some("3".to_string()),
            color: Some("Blue".to_string()),
            person_id,
            inside: false,
        }
    }

    /// Sets the plate, stored as given.
    pub fn plate(mut self, plate: impl Into<String>) -> Self {
        self.plate = plate.into();
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn inside(mut self, inside: bool) -> Self {
        self.inside = inside;
        self
    }

    /// Builds and inserts the vehicle entity into the database.
    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        entity::vehicle::ActiveModel {
            plate: ActiveValue::Set(self.plate),
            kind: ActiveValue::Set(self.kind),
            brand: ActiveValue::Set(self.brand),
            model: ActiveValue::Set(self.model),
            color: ActiveValue::Set(self.color),
            person_id: ActiveValue::Set(self.person_id),
            inside: ActiveValue::Set(self.inside),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vehicle with default values owned by `person_id`.
pub async fn create_vehicle(
    db: &DatabaseConnection,
    person_id: i32,
) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db, person_id).build().await
}

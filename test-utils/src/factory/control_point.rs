//! Control point factory.
//!
//! Migrations seed one entry and one exit lane; tests built from entities start empty, so
//! this module recreates that seed.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a single control point.
pub async fn create_control_point(
    db: &DatabaseConnection,
    name: impl Into<String>,
    direction: impl Into<String>,
) -> Result<entity::control_point::Model, DbErr> {
    entity::control_point::ActiveModel {
        name: ActiveValue::Set(name.into()),
        direction: ActiveValue::Set(direction.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts the default entry and exit lanes.
///
/// # Returns
/// - `Ok((entry, exit))` - The two created control points
/// - `Err(DbErr)` - Database error during insert
pub async fn create_gates(
    db: &DatabaseConnection,
) -> Result<(entity::control_point::Model, entity::control_point::Model), DbErr> {
    let entry = create_control_point(db, "Main gate entry", "entry").await?;
    let exit = create_control_point(db, "Main gate exit", "exit").await?;

    Ok((entry, exit))
}

//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an active owner and a vehicle registered to them.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((person, vehicle))` - Created owner and vehicle
/// - `Err(DbErr)` - Database error during creation
pub async fn create_vehicle_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::person::Model, entity::vehicle::Model), DbErr> {
    let owner = crate::factory::person::create_person(db).await?;
    let vehicle = crate::factory::vehicle::create_vehicle(db, owner.id).await?;

    Ok((owner, vehicle))
}

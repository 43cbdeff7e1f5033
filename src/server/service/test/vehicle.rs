use super::*;
use crate::{
    model::vehicle::VehicleKind,
    server::{
        error::AppError, model::vehicle::VehicleParams, service::vehicle::VehicleService,
    },
};
use test_utils::{builder::TestBuilder, factory};

fn car(plate: &str, owner_id: i32) -> VehicleParams {
    VehicleParams {
        plate: plate.to_string(),
        kind: VehicleKind::Car,
        brand: Some("Mazda".to_string()),
        model: None,
        color: Some("red".to_string()),
        owner_id,
    }
}

/// Tests registering a vehicle to an active owner.
///
/// Expected: Ok with the owner summary attached, outside, and one CREATE row
#[tokio::test]
async fn create_attaches_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let owner = factory::person::create_person(db).await?;

    let created = VehicleService::new(db)
        .create(admin.id, car("ABC123", owner.id))
        .await?;

    assert_eq!(created.vehicle.plate, "ABC123");
    assert!(!created.vehicle.inside);
    assert_eq!(created.owner.map(|o| o.id), Some(owner.id));

    let rows = audit_rows(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].entity, "vehicle");
    assert_eq!(rows[0].action, "CREATE");

    Ok(())
}

/// Tests registering a vehicle to an owner that does not exist or is inactive.
///
/// Expected: Err(AppError::BadRequest) for both, nothing stored
#[tokio::test]
async fn rejects_missing_or_inactive_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let inactive = factory::person::PersonFactory::new(db)
        .active(false)
        .build()
        .await?;
    let service = VehicleService::new(db);

    let missing = service.create(admin.id, car("ABC123", 999)).await;
    let deactivated = service.create(admin.id, car("ABC123", inactive.id)).await;

    assert!(matches!(missing, Err(AppError::BadRequest(_))));
    assert!(matches!(deactivated, Err(AppError::BadRequest(_))));
    assert_eq!(audit_count(db).await?, 0);

    Ok(())
}

/// Tests registering a plate that is already taken.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_plate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let owner = factory::person::create_person(db).await?;
    factory::vehicle::VehicleFactory::new(db, owner.id)
        .plate("ABC123")
        .build()
        .await?;

    let result = VehicleService::new(db)
        .create(admin.id, car("ABC123", owner.id))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests moving a vehicle to a new owner while keeping its own plate.
///
/// Expected: Ok(Some) with the new owner, one UPDATE row
#[tokio::test]
async fn update_moves_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let first = factory::person::create_person(db).await?;
    let second = factory::person::create_person(db).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, first.id)
        .plate("ABC123")
        .build()
        .await?;

    let updated = VehicleService::new(db)
        .update(admin.id, vehicle.id, car("ABC123", second.id))
        .await?
        .unwrap();

    assert_eq!(updated.vehicle.owner_id, second.id);
    assert_eq!(updated.vehicle.brand.as_deref(), Some("Mazda"));

    let rows = audit_rows(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].action, "UPDATE");

    Ok(())
}

/// Tests plate lookup with the spelling a guard might type.
///
/// Expected: "abc-123" finds ABC123, a blank plate finds nothing
#[tokio::test]
async fn get_by_plate_normalizes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::person::create_person(db).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, owner.id)
        .plate("ABC123")
        .build()
        .await?;
    let service = VehicleService::new(db);

    let found = service.get_by_plate("abc-123").await?.unwrap();

    assert_eq!(found.vehicle.id, vehicle.id);
    assert!(service.get_by_plate("  ").await?.is_none());

    Ok(())
}

/// Tests deleting a vehicle twice.
///
/// Expected: true then false, a single DELETE row
#[tokio::test]
async fn delete_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let (_, vehicle) = factory::helpers::create_vehicle_with_owner(db).await?;
    let service = VehicleService::new(db);

    assert!(service.delete(admin.id, vehicle.id).await?);
    assert!(!service.delete(admin.id, vehicle.id).await?);
    assert_eq!(audit_count(db).await?, 1);

    Ok(())
}

/// Tests registering a plate the camera could never read back, as `ABC1234` is read
/// as `ABC123`.
///
/// Expected: Err(AppError::BadRequest) and no audit row
#[tokio::test]
async fn create_rejects_unrecognizable_plate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let owner = factory::person::create_person(db).await?;

    let result = VehicleService::new(db)
        .create(admin.id, car("ABC1234", owner.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(audit_count(db).await?, 0);

    Ok(())
}

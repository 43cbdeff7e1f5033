use super::*;

/// Tests plate uniqueness checks for create and update.
///
/// Expected: taken for a new vehicle, free when excluding the holder
#[tokio::test]
async fn detects_plate_held_by_other_vehicle() -> Result<(), DbErr> {
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

    let repo = VehicleRepository::new(db);

    assert!(repo.plate_taken("ABC123", None).await?);
    assert!(!repo.plate_taken("ABC123", Some(vehicle.id)).await?);
    assert!(!repo.plate_taken("ZZZ999", None).await?);

    Ok(())
}

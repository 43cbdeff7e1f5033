use super::*;

/// Tests registering a vehicle.
///
/// Verifies new vehicles start outside and can be found by plate with their owner.
///
/// Expected: Ok(Vehicle) with inside=false
#[tokio::test]
async fn creates_vehicle_outside() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::person::create_person(db).await?;

    let repo = VehicleRepository::new(db);
    let vehicle = repo
        .create(VehicleParams {
            plate: "ABC123".to_string(),
            kind: VehicleKind::Motorcycle,
            brand: Some("Yamaha".to_string()),
            model: None,
            color: Some("Black".to_string()),
            owner_id: owner.id,
        })
        .await?;

    assert!(!vehicle.inside);
    assert_eq!(vehicle.kind, VehicleKind::Motorcycle);

    let found = repo.find_by_plate("ABC123").await?.unwrap();
    assert_eq!(found.vehicle.id, vehicle.id);
    assert_eq!(found.owner.unwrap().id, owner.id);

    Ok(())
}

/// Tests that updating a vehicle leaves occupancy alone.
///
/// Expected: Ok(Vehicle) with the new plate and inside still true
#[tokio::test]
async fn update_keeps_occupancy() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::person::create_person(db).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, owner.id)
        .inside(true)
        .build()
        .await?;

    let updated = VehicleRepository::new(db)
        .update(
            vehicle.id,
            VehicleParams {
                plate: "XYZ98A".to_string(),
                kind: VehicleKind::Car,
                brand: None,
                model: None,
                color: None,
                owner_id: owner.id,
            },
        )
        .await?;

    assert_eq!(updated.plate, "XYZ98A");
    assert!(updated.inside);

    Ok(())
}

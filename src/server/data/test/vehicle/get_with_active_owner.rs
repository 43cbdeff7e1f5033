use super::*;

/// Tests that vehicles of deactivated owners drop out of the list.
///
/// Expected: Ok(Vec) containing only the active owner's vehicle
#[tokio::test]
async fn skips_vehicles_of_inactive_owners() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::person::create_person(db).await?;
    let inactive = factory::person::PersonFactory::new(db)
        .active(false)
        .build()
        .await?;

    let kept = factory::vehicle::VehicleFactory::new(db, active.id)
        .plate("AAA111")
        .build()
        .await?;
    factory::vehicle::VehicleFactory::new(db, inactive.id)
        .plate("BBB222")
        .build()
        .await?;

    let vehicles = VehicleRepository::new(db).get_with_active_owner().await?;

    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].vehicle.id, kept.id);
    assert_eq!(vehicles[0].owner.as_ref().unwrap().id, active.id);

    Ok(())
}

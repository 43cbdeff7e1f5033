use super::*;

/// Tests the occupancy compare-and-set on entry.
///
/// Verifies the first flip succeeds and a second identical flip is refused, which is
/// what stops two concurrent entry scans from both being authorized.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn flips_only_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, vehicle) = factory::helpers::create_vehicle_with_owner(db).await?;

    let repo = VehicleRepository::new(db);

    assert!(repo.set_inside_if(vehicle.id, true).await?);
    assert!(!repo.set_inside_if(vehicle.id, true).await?);
    assert_eq!(repo.count_inside().await?, 1);

    Ok(())
}

/// Tests that leaving requires being inside.
///
/// Expected: Ok(false) while outside, Ok(true) once inside
#[tokio::test]
async fn exit_requires_inside() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, vehicle) = factory::helpers::create_vehicle_with_owner(db).await?;

    let repo = VehicleRepository::new(db);

    assert!(!repo.set_inside_if(vehicle.id, false).await?);
    assert!(repo.set_inside_if(vehicle.id, true).await?);
    assert!(repo.set_inside_if(vehicle.id, false).await?);
    assert_eq!(repo.count_inside().await?, 0);

    Ok(())
}

/// Tests flipping a vehicle that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!VehicleRepository::new(db).set_inside_if(404, true).await?);

    Ok(())
}

use super::*;

/// Tests finding when each vehicle came in.
///
/// Verifies only authorized entries count and the newest one wins.
///
/// Expected: one mark pointing at the latest authorized entry
#[tokio::test]
async fn returns_latest_authorized_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gate_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, vehicle) = factory::helpers::create_vehicle_with_owner(db).await?;
    let start = Utc.with_ymd_and_hms(2025, 3, 10, 6, 0, 0).unwrap();

    factory::access::AccessFactory::new(db)
        .vehicle(&vehicle)
        .occurred_at(start)
        .build()
        .await?;
    let latest = factory::access::AccessFactory::new(db)
        .vehicle(&vehicle)
        .occurred_at(start + Duration::hours(2))
        .build()
        .await?;
    factory::access::AccessFactory::new(db)
        .vehicle(&vehicle)
        .occurred_at(start + Duration::hours(3))
        .result("denied")
        .build()
        .await?;
    factory::access::AccessFactory::new(db)
        .vehicle(&vehicle)
        .occurred_at(start + Duration::hours(4))
        .direction("exit")
        .build()
        .await?;

    let marks = AccessRepository::new(db)
        .latest_entries(&[vehicle.id])
        .await?;

    let mark = marks.get(&vehicle.id).unwrap();
    assert_eq!(mark.access_id, latest.id);
    assert_eq!(mark.occurred_at, latest.occurred_at);

    Ok(())
}

/// Tests the empty input shortcut.
///
/// Expected: Ok(empty map)
#[tokio::test]
async fn empty_input_returns_empty_map() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gate_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let marks = AccessRepository::new(db).latest_entries(&[]).await?;

    assert!(marks.is_empty());

    Ok(())
}

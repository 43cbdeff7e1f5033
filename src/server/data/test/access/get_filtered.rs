use super::*;

/// Tests partial plate matching.
///
/// Expected: only accesses whose plate contains the fragment
#[tokio::test]
async fn filters_by_plate_fragment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gate_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::access::AccessFactory::new(db)
        .plate("ABC123")
        .build()
        .await?;
    factory::access::AccessFactory::new(db)
        .plate("XYZ789")
        .build()
        .await?;

    let (records, total) = AccessRepository::new(db)
        .get_filtered(&AccessFilter {
            plate: Some("BC1".to_string()),
            ..filter()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(records[0].access.plate.as_deref(), Some("ABC123"));

    Ok(())
}

/// Tests filtering by vehicle kind through the vehicle join.
///
/// Expected: only the motorcycle's access, with its kind attached
#[tokio::test]
async fn filters_by_vehicle_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gate_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::person::create_person(db).await?;
    let car = factory::vehicle::create_vehicle(db, owner.id).await?;
    let bike = factory::vehicle::VehicleFactory::new(db, owner.id)
        .kind("motorcycle")
        .build()
        .await?;

    factory::access::create_access(db, &car).await?;
    let bike_access = factory::access::create_access(db, &bike).await?;

    let (records, total) = AccessRepository::new(db)
        .get_filtered(&AccessFilter {
            vehicle_kind: Some(VehicleKind::Motorcycle),
            ..filter()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(records[0].access.id, bike_access.id);
    assert_eq!(records[0].vehicle_kind, Some(VehicleKind::Motorcycle));

    Ok(())
}

/// Tests the date window: `from` inclusive, `to` exclusive.
///
/// Expected: only the access inside the window
#[tokio::test]
async fn filters_by_date_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gate_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let day = Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap();

    factory::access::AccessFactory::new(db)
        .occurred_at(day - Duration::minutes(1))
        .build()
        .await?;
    let inside = factory::access::AccessFactory::new(db)
        .occurred_at(day + Duration::hours(8))
        .build()
        .await?;
    factory::access::AccessFactory::new(db)
        .occurred_at(day + Duration::days(1))
        .build()
        .await?;

    let (records, total) = AccessRepository::new(db)
        .get_filtered(&AccessFilter {
            from: Some(day),
            to: Some(day + Duration::days(1)),
            ..filter()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(records[0].access.id, inside.id);

    Ok(())
}

/// Tests pagination and newest-first ordering, with guard names resolved.
///
/// Expected: page 1 of size 2 holds the third and fourth newest accesses
#[tokio::test]
async fn paginates_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gate_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guard = factory::user::UserFactory::new(db)
        .name("Carlos")
        .build()
        .await?;
    let start = Utc.with_ymd_and_hms(2025, 3, 10, 6, 0, 0).unwrap();

    let mut ids = Vec::new();
    for i in 0..5 {
        let access = factory::access::AccessFactory::new(db)
            .occurred_at(start + Duration::minutes(i))
            .guard(guard.id)
            .build()
            .await?;
        ids.push(access.id);
    }

    let (records, total) = AccessRepository::new(db)
        .get_filtered(&AccessFilter {
            page: 1,
            per_page: 2,
            ..filter()
        })
        .await?;

    assert_eq!(total, 5);
    let page_ids: Vec<_> = records.iter().map(|r| r.access.id).collect();
    assert_eq!(page_ids, vec![ids[2], ids[1]]);
    assert_eq!(records[0].guard_name.as_deref(), Some("Carlos"));

    Ok(())
}

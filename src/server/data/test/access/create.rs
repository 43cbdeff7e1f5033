use super::*;

/// Tests appending a failed scan with no vehicle attached.
///
/// Expected: Ok(Access) with result failed and no plate
#[tokio::test]
async fn records_failed_scan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gate_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guard = factory::user::create_user(db).await?;
    let (entry_gate, _) = factory::control_point::create_gates(db).await?;

    let repo = AccessRepository::new(db);
    let access = repo
        .create(NewAccess {
            direction: Direction::Entry,
            result: AccessResult::Failed,
            plate: None,
            observations: Some("no plate could be read from the image".to_string()),
            vehicle_id: None,
            control_point_id: Some(entry_gate.id),
            guard_id: Some(guard.id),
        })
        .await?;

    assert_eq!(access.result, AccessResult::Failed);
    assert_eq!(access.plate, None);
    assert_eq!(access.guard_id, Some(guard.id));
    assert!(repo.exists(access.id).await?);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

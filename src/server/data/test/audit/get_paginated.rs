use super::*;

fn entry(user_id: Option<i32>, entity: &'static str, entity_id: i32) -> NewAuditEntry {
    NewAuditEntry {
        user_id,
        entity,
        entity_id,
        action: AuditAction::Create,
        previous_state: None,
        new_state: Some(format!(r#"{{"id":{}}}"#, entity_id)),
    }
}

/// Tests reading back entries with the acting user's name and parsed snapshots.
///
/// Expected: newest entry first, user name resolved, new state parsed as JSON
#[tokio::test]
async fn returns_entries_with_user_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gate_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db)
        .role("admin")
        .name("Root")
        .build()
        .await?;

    let repo = AuditRepository::new(db);
    repo.create(entry(Some(admin.id), "person", 1)).await?;
    repo.create(entry(None, "vehicle", 2)).await?;

    let (entries, total) = repo.get_paginated(None, 0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(entries[0].entity, "vehicle");
    assert_eq!(entries[0].user_name, None);
    assert_eq!(entries[1].user_name.as_deref(), Some("Root"));
    assert_eq!(
        entries[1].new_state,
        Some(serde_json::json!({ "id": 1 }))
    );
    assert_eq!(entries[1].previous_state, None);

    Ok(())
}

/// Tests filtering by entity name.
///
/// Expected: only the vehicle entries
#[tokio::test]
async fn filters_by_entity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gate_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuditRepository::new(db);
    repo.create(entry(None, "person", 1)).await?;
    repo.create(entry(None, "vehicle", 2)).await?;
    repo.create(entry(None, "vehicle", 3)).await?;

    let (entries, total) = repo.get_paginated(Some("vehicle"), 0, 10).await?;

    assert_eq!(total, 2);
    assert!(entries.iter().all(|e| e.entity == "vehicle"));

    Ok(())
}

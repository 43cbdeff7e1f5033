use chrono::{Duration, Utc};

use super::*;
use crate::server::{error::AppError, model::event::EventParams, service::event::EventService};
use test_utils::{builder::TestBuilder, factory};

fn meeting(title: &str) -> EventParams {
    let starts_at = Utc::now() + Duration::days(1);

    EventParams {
        title: title.to_string(),
        description: None,
        location: Some("Main gate".to_string()),
        category: Some("delivery".to_string()),
        starts_at,
        ends_at: starts_at + Duration::hours(2),
    }
}

/// Tests the full lifecycle of an event.
///
/// Expected: create, update, verify and delete each leave exactly one audit row
#[tokio::test]
async fn every_mutation_is_audited() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gate_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let guard = factory::user::create_user(db).await?;
    let service = EventService::new(db);

    let event = service.create(admin.id, meeting("Delivery")).await?;
    assert_eq!(event.creator_id, Some(admin.id));
    assert!(!event.verified);
    assert_eq!(audit_count(db).await?, 1);

    let updated = service
        .update(admin.id, event.id, meeting("Late delivery"))
        .await?
        .unwrap();
    assert_eq!(updated.title, "Late delivery");
    assert_eq!(audit_count(db).await?, 2);

    let verified = service
        .set_verified(guard.id, event.id, true)
        .await?
        .unwrap();
    assert!(verified.verified);
    assert_eq!(audit_count(db).await?, 3);

    assert!(service.delete(admin.id, event.id).await?);
    assert!(service.get_by_id(event.id).await?.is_none());

    let rows = audit_rows(db).await?;
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[2].user_id, Some(guard.id));
    assert_eq!(rows[3].action, "DELETE");

    Ok(())
}

/// Tests operations on an event that does not exist.
///
/// Expected: None or false, nothing audited
#[tokio::test]
async fn missing_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gate_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let service = EventService::new(db);

    assert!(service
        .update(admin.id, 404, meeting("Ghost"))
        .await?
        .is_none());
    assert!(service.set_verified(admin.id, 404, true).await?.is_none());
    assert!(!service.delete(admin.id, 404).await?);
    assert_eq!(audit_count(db).await?, 0);

    Ok(())
}

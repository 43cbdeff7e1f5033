use serde_json::json;

use super::*;
use test_utils::{builder::TestBuilder, factory};

/// Tests an admin registering a person.
///
/// Expected: 201 with the stored person
#[tokio::test]
async fn admin_creates_person() {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await.unwrap();
    let token = token_for(admin);

    let response = app(db, &[])
        .oneshot(post_json(
            "/api/personas",
            Some(&token),
            json!({ "documento": "1020", "nombre": "Ana Gomez", "tipo": "propietario" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["document_id"], "1020");
    assert_eq!(body["kind"], "owner");
    assert_eq!(body["active"], true);
}

/// Tests a guard calling the admin-only registration route.
///
/// Expected: 403
#[tokio::test]
async fn guard_cannot_create_person() {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guard = factory::user::create_user(db).await.unwrap();
    let token = token_for(guard);

    let response = app(db, &[])
        .oneshot(post_json(
            "/api/personas",
            Some(&token),
            json!({ "document_id": "1020", "name": "Ana Gomez" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Tests fetching a person that does not exist.
///
/// Expected: 404
#[tokio::test]
async fn missing_person_is_not_found() {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guard = factory::user::create_user(db).await.unwrap();
    let token = token_for(guard);

    let response = app(db, &[])
        .oneshot(get("/api/personas/404", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

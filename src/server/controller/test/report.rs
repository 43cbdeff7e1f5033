use super::*;
use test_utils::{builder::TestBuilder, factory};

/// Tests the PDF export headers.
///
/// Expected: 200, application/pdf, attachment disposition, a %PDF body
#[tokio::test]
async fn pdf_export_is_attachment() {
    let test = TestBuilder::new().with_gate_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await.unwrap();
    let token = token_for(admin);
    let (_, vehicle) = factory::helpers::create_vehicle_with_owner(db).await.unwrap();
    factory::access::create_access(db, &vehicle).await.unwrap();

    let response = app(db, &[])
        .oneshot(get("/api/admin/exportar/pdf", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/pdf"
    );
    assert!(response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .starts_with("attachment"));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

/// Tests the Excel export as a guard.
///
/// Expected: 403
#[tokio::test]
async fn excel_export_requires_admin() {
    let test = TestBuilder::new().with_gate_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guard = factory::user::create_user(db).await.unwrap();
    let token = token_for(guard);

    let response = app(db, &[])
        .oneshot(get("/api/admin/exportar/excel", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

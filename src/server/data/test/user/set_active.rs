use super::*;

/// Tests deactivating a user.
///
/// Expected: Ok(true) and the stored user is inactive
#[tokio::test]
async fn deactivates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guard = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let changed = repo.set_active(guard.id, false).await?;

    assert!(changed);
    assert!(!repo.find_by_id(guard.id).await?.unwrap().active);

    Ok(())
}

/// Tests deactivating a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let changed = UserRepository::new(db).set_active(404, false).await?;

    assert!(!changed);

    Ok(())
}

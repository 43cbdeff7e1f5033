use super::*;

/// Tests detecting an active admin.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_admin(db).await?;

    let result = UserRepository::new(db).admin_exists().await?;

    assert!(result);

    Ok(())
}

/// Tests that guards alone do not count as admins.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_guards() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    factory::user::create_user(db).await?;

    let result = UserRepository::new(db).admin_exists().await?;

    assert!(!result);

    Ok(())
}

/// Tests that a deactivated admin does not count.
///
/// Startup relies on this to bootstrap a new admin when the only one was disabled.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_inactive_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .role("admin")
        .active(false)
        .build()
        .await?;

    let result = UserRepository::new(db).admin_exists().await?;

    assert!(!result);

    Ok(())
}

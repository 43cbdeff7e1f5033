use super::*;

/// Tests an admin passing the admin permission check.
///
/// Expected: Ok(User) with the admin role
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();

    let admin = factory::user::create_admin(db).await?;
    let admin_id = admin.id;
    let headers = bearer_for(&settings, admin);

    let user = AuthGuard::new(db, &settings, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.id, admin_id);
    assert!(user.is_admin());

    Ok(())
}

/// Tests a guard calling an admin-only operation.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_guard() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();

    let guard = factory::user::create_user(db).await?;
    let headers = bearer_for(&settings, guard);

    let result = AuthGuard::new(db, &settings, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

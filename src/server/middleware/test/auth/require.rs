use super::*;

mod require_admin;

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &settings, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests an Authorization header that is not a bearer token.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_non_bearer_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic Z2F0ZTpwYXNz"));
    let result = AuthGuard::new(db, &settings, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a garbage token and a token signed with another key.
///
/// Expected: Err(AuthError::InvalidToken) for both
#[tokio::test]
async fn rejects_invalid_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();

    let user = factory::user::create_user(db).await?;
    let foreign = AuthSettings {
        jwt_secret: "someone-else".to_string(),
        ..settings.clone()
    };

    let garbage = bearer("not.a.token");
    let forged = bearer_for(&foreign, user);

    for headers in [&garbage, &forged] {
        let result = AuthGuard::new(db, &settings, headers).require(&[]).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidToken(_)))
        ));
    }

    Ok(())
}

/// Tests a valid token whose user was deactivated after it was issued.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_deactivated_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();

    let user = factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await?;
    let user_id = user.id;
    let headers = bearer_for(&settings, user);

    let result = AuthGuard::new(db, &settings, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) if id == user_id
    ));

    Ok(())
}

/// Tests a token issued while the user held a different role.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_stale_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();

    let user = factory::user::create_admin(db).await?;
    let demoted = entity::user::Model {
        role: "guard".to_string(),
        ..user
    };
    let headers = bearer_for(&settings, demoted);

    let result = AuthGuard::new(db, &settings, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a guard with a valid token and no permission requirements.
///
/// Expected: Ok(User) for the token's user
#[tokio::test]
async fn accepts_any_active_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();

    let user = factory::user::UserFactory::new(db)
        .username("gate1")
        .build()
        .await?;
    let headers = bearer_for(&settings, user);

    let found = AuthGuard::new(db, &settings, &headers).require(&[]).await?;

    assert_eq!(found.username, "gate1");
    assert!(!found.is_admin());

    Ok(())
}

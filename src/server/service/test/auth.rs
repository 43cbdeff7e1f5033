use super::*;
use crate::{
    model::auth::Role,
    server::{
        error::{auth::AuthError, AppError},
        model::auth::LoginParams,
        service::auth::{decode_token, AuthService},
    },
};
use test_utils::{builder::TestBuilder, factory};

fn login_as(username: &str, password: &str, role: Option<&str>) -> LoginParams {
    LoginParams {
        username: username.to_string(),
        password: password.to_string(),
        role: role.map(str::to_string),
    }
}

/// Tests a guard logging in with the right password and role.
///
/// Expected: Ok with a token carrying the user's id and role, and one LOGIN audit row
#[tokio::test]
async fn issues_token_and_audits_login() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();

    let guard = factory::user::UserFactory::new(db)
        .username("gate1")
        .build()
        .await?;

    let session = AuthService::new(db, &settings)
        .login(login_as(
            "gate1",
            factory::user::DEFAULT_PASSWORD,
            Some("guard"),
        ))
        .await?;

    assert_eq!(session.user.id, guard.id);

    let claims = decode_token(&settings, &session.token)?;
    assert_eq!(claims.audit_id, guard.id);
    assert_eq!(claims.role, Role::Guard);
    assert_eq!(claims.exp, session.expires_at.timestamp());

    let rows = audit_rows(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].action, "LOGIN");
    assert_eq!(rows[0].entity, "user");
    assert_eq!(rows[0].user_id, Some(guard.id));

    Ok(())
}

/// Tests a login with the wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials) and nothing audited
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();

    factory::user::UserFactory::new(db)
        .username("gate1")
        .build()
        .await?;

    let result = AuthService::new(db, &settings)
        .login(login_as("gate1", "wrong", Some("guard")))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));
    assert_eq!(audit_count(db).await?, 0);

    Ok(())
}

/// Tests a login with an unknown username.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();

    let result = AuthService::new(db, &settings)
        .login(login_as("nobody", "password", Some("admin")))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    Ok(())
}

/// Tests a deactivated account with the correct password.
///
/// Expected: Err(AuthError::InvalidCredentials), indistinguishable from a wrong password
#[tokio::test]
async fn rejects_inactive_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();

    factory::user::UserFactory::new(db)
        .username("gate1")
        .active(false)
        .build()
        .await?;

    let result = AuthService::new(db, &settings)
        .login(login_as(
            "gate1",
            factory::user::DEFAULT_PASSWORD,
            Some("guard"),
        ))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    Ok(())
}

/// Tests a guard selecting the admin role on the login form.
///
/// Expected: Err(AuthError::RoleMismatch)
#[tokio::test]
async fn rejects_role_mismatch() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();

    factory::user::UserFactory::new(db)
        .username("gate1")
        .build()
        .await?;

    let result = AuthService::new(db, &settings)
        .login(login_as(
            "gate1",
            factory::user::DEFAULT_PASSWORD,
            Some("admin"),
        ))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::RoleMismatch(_)))
    ));
    assert_eq!(audit_count(db).await?, 0);

    Ok(())
}

/// Tests a login form submitted without a role or password.
///
/// Expected: Err(AppError::BadRequest) for both
#[tokio::test]
async fn requires_all_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();

    factory::user::create_user(db).await?;
    let service = AuthService::new(db, &settings);

    let no_role = service.login(login_as("gate1", "password", None)).await;
    let no_password = service
        .login(login_as("gate1", "", Some("guard")))
        .await;

    assert!(matches!(no_role, Err(AppError::BadRequest(_))));
    assert!(matches!(no_password, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests decoding a token signed with another secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_token_from_other_secret() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();

    let admin = factory::user::create_admin(db).await?;

    let session = AuthService::new(db, &settings)
        .login(login_as(
            &admin.username,
            factory::user::DEFAULT_PASSWORD,
            Some("admin"),
        ))
        .await?;

    let other = crate::server::config::AuthSettings {
        jwt_secret: "another-secret".to_string(),
        ..settings
    };

    assert!(matches!(
        decode_token(&other, &session.token),
        Err(AuthError::InvalidToken(_))
    ));

    Ok(())
}

/// Tests the role labels shown on the login screen and a role no account can hold.
///
/// Expected: "Vigilante" logs a guard in, "Supervisor" fails with RoleMismatch
#[tokio::test]
async fn parses_selected_role_after_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();

    factory::user::UserFactory::new(db)
        .username("gate1")
        .build()
        .await?;
    let service = AuthService::new(db, &settings);

    let session = service
        .login(login_as(
            "gate1",
            factory::user::DEFAULT_PASSWORD,
            Some("Vigilante"),
        ))
        .await?;
    let unknown = service
        .login(login_as(
            "gate1",
            factory::user::DEFAULT_PASSWORD,
            Some("Supervisor"),
        ))
        .await;

    assert_eq!(session.user.role, Role::Guard);
    assert!(matches!(
        unknown,
        Err(AppError::AuthErr(AuthError::RoleMismatch(_)))
    ));

    Ok(())
}

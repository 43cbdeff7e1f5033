use super::*;

/// Tests loading the password hash for login.
///
/// Expected: Ok(Some(UserCredentials)) with a hash matching the factory password
#[tokio::test]
async fn returns_hash_for_known_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("gate1")
        .password("open-sesame")
        .build()
        .await?;

    let credentials = UserRepository::new(db)
        .find_credentials("gate1")
        .await?
        .unwrap();

    assert_eq!(credentials.user.username, "gate1");
    assert!(bcrypt::verify("open-sesame", &credentials.password_hash).unwrap());

    Ok(())
}

/// Tests looking up an unknown username.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let credentials = UserRepository::new(db).find_credentials("nobody").await?;

    assert!(credentials.is_none());

    Ok(())
}

use super::*;

/// Tests creating a user.
///
/// Verifies the new account is active and carries the requested role.
///
/// Expected: Ok(User) with active=true
#[tokio::test]
async fn creates_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(NewUser {
            username: "night-shift".to_string(),
            name: "Night Shift".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Guard,
        })
        .await?;

    assert_eq!(user.username, "night-shift");
    assert_eq!(user.role, Role::Guard);
    assert!(user.active);
    assert!(repo.username_taken("night-shift").await?);
    assert!(!repo.username_taken("day-shift").await?);

    Ok(())
}

/// Tests that usernames are unique at the database level.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("taken")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(NewUser {
            username: "taken".to_string(),
            name: "Someone Else".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Guard,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

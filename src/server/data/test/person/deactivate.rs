use super::*;

/// Tests soft-deleting a person.
///
/// Verifies the row is kept, flagged inactive, and no longer listed.
///
/// Expected: Ok(Person) with active=false
#[tokio::test]
async fn keeps_row_and_clears_active() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::person::create_person(db).await?;

    let repo = PersonRepository::new(db);
    let deactivated = repo.deactivate(person.id).await?;

    assert!(!deactivated.active);
    assert!(repo.find_by_id(person.id).await?.is_some());
    assert!(repo.get_active().await?.is_empty());

    Ok(())
}

use super::*;

/// Tests listing active persons.
///
/// Verifies inactive persons are left out and the rest come back sorted by name.
///
/// Expected: Ok(Vec<Person>) with the two active persons, alphabetical
#[tokio::test]
async fn returns_active_persons_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::person::PersonFactory::new(db)
        .name("Zoe")
        .build()
        .await?;
    factory::person::PersonFactory::new(db)
        .name("Ana")
        .build()
        .await?;
    factory::person::PersonFactory::new(db)
        .name("Mario")
        .active(false)
        .build()
        .await?;

    let persons = PersonRepository::new(db).get_active().await?;

    let names: Vec<_> = persons.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Zoe"]);

    Ok(())
}

/// Tests the active person counter used by the admin summary.
///
/// Expected: Ok(1)
#[tokio::test]
async fn counts_only_active_persons() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::person::create_person(db).await?;
    factory::person::PersonFactory::new(db)
        .active(false)
        .build()
        .await?;

    assert_eq!(PersonRepository::new(db).count_active().await?, 1);

    Ok(())
}

use super::*;

/// Tests detecting a document id held by someone else.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_existing_document() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::person::PersonFactory::new(db)
        .document_id("1020304050")
        .build()
        .await?;

    let taken = PersonRepository::new(db)
        .document_taken("1020304050", None)
        .await?;

    assert!(taken);

    Ok(())
}

/// Tests that a person's own document does not count as taken on update.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_excluded_person() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::person::PersonFactory::new(db)
        .document_id("1020304050")
        .build()
        .await?;

    let taken = PersonRepository::new(db)
        .document_taken("1020304050", Some(person.id))
        .await?;

    assert!(!taken);

    Ok(())
}

/// Tests creating a person and finding their document afterwards.
///
/// Expected: Ok(Person) active, and the document is reported taken
#[tokio::test]
async fn created_person_is_active() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);
    let person = repo
        .create(CreatePersonParams {
            document_id: "99887766".to_string(),
            name: "Ana Gomez".to_string(),
            kind: PersonKind::Employee,
            email: Some("ana@example.com".to_string()),
            phone: None,
        })
        .await?;

    assert!(person.active);
    assert_eq!(person.kind, PersonKind::Employee);
    assert!(repo.document_taken("99887766", None).await?);

    Ok(())
}

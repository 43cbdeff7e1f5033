use super::*;

/// Tests a full-record update.
///
/// Expected: Ok(Person) with every field replaced
#[tokio::test]
async fn overwrites_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::person::PersonFactory::new(db)
        .email("old@example.com")
        .build()
        .await?;

    let updated = PersonRepository::new(db)
        .update(
            UpdatePersonParams {
                id: person.id,
                document_id: "NEW-1".to_string(),
                name: "Renamed".to_string(),
                kind: PersonKind::Visitor,
                email: None,
                phone: Some("3001234567".to_string()),
                active: None,
            },
            true,
        )
        .await?;

    assert_eq!(updated.id, person.id);
    assert_eq!(updated.document_id, "NEW-1");
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.kind, PersonKind::Visitor);
    assert_eq!(updated.email, None);
    assert_eq!(updated.phone.as_deref(), Some("3001234567"));

    Ok(())
}

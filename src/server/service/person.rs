use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::audit::AuditAction,
    server::{
        data::person::PersonRepository,
        error::AppError,
        model::person::{CreatePersonParams, Person, UpdatePersonParams},
        service::audit::AuditTrail,
    },
};

/// Owner registry operations. Every mutation is audited in its own transaction.
pub struct PersonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets active persons ordered by name.
    pub async fn get_active(&self) -> Result<Vec<Person>, AppError> {
        Ok(PersonRepository::new(self.db).get_active().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Person>, AppError> {
        Ok(PersonRepository::new(self.db).find_by_id(id).await?)
    }

    /// Registers a person.
    ///
    /// # Returns
    /// - `Ok(Person)` - The created person
    /// - `Err(AppError::BadRequest)` - Document id or name blank
    /// - `Err(AppError::Conflict)` - Document id already registered
    pub async fn create(&self, actor: i32, params: CreatePersonParams) -> Result<Person, AppError> {
        validate(&params.document_id, &params.name)?;

        let txn = self.db.begin().await?;
        let repo = PersonRepository::new(&txn);

        if repo.document_taken(&params.document_id, None).await? {
            return Err(document_conflict(&params.document_id));
        }

        let person = repo.create(params).await?;

        AuditTrail::new(&txn, Some(actor))
            .record(AuditAction::Create, None, Some(&person))
            .await?;
        txn.commit().await?;

        Ok(person)
    }

    /// Replaces every editable field of a person.
    ///
    /// # Returns
    /// - `Ok(Some(Person))` - The updated person
    /// - `Ok(None)` - No person with this id
    /// - `Err(AppError::BadRequest)` - Document id or name blank
    /// - `Err(AppError::Conflict)` - Document id held by another person
    pub async fn update(
        &self,
        actor: i32,
        params: UpdatePersonParams,
    ) -> Result<Option<Person>, AppError> {
        validate(&params.document_id, &params.name)?;

        let txn = self.db.begin().await?;
        let repo = PersonRepository::new(&txn);

        let Some(previous) = repo.find_by_id(params.id).await? else {
            return Ok(None);
        };

        if repo
            .document_taken(&params.document_id, Some(params.id))
            .await?
        {
            return Err(document_conflict(&params.document_id));
        }

        let active = params.active.unwrap_or(previous.active);
        let person = repo.update(params, active).await?;

        AuditTrail::new(&txn, Some(actor))
            .record(AuditAction::Update, Some(&previous), Some(&person))
            .await?;
        txn.commit().await?;

        Ok(Some(person))
    }

    /// Deactivates a person. Their vehicles stay registered but are denied at the gate.
    ///
    /// # Returns
    /// - `Ok(Some(Person))` - The deactivated person
    /// - `Ok(None)` - No person with this id
    pub async fn delete(&self, actor: i32, id: i32) -> Result<Option<Person>, AppError> {
        let txn = self.db.begin().await?;
        let repo = PersonRepository::new(&txn);

        let Some(previous) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let person = repo.deactivate(id).await?;

        AuditTrail::new(&txn, Some(actor))
            .record(AuditAction::Delete, Some(&previous), Some(&person))
            .await?;
        txn.commit().await?;

        tracing::info!("User {} deactivated person {}", actor, id);

        Ok(Some(person))
    }
}

fn validate(document_id: &str, name: &str) -> Result<(), AppError> {
    if document_id.is_empty() || name.is_empty() {
        return Err(AppError::BadRequest(
            "Document id and name are required".to_string(),
        ));
    }

    Ok(())
}

fn document_conflict(document_id: &str) -> AppError {
    AppError::Conflict(format!(
        "A person with document id '{}' already exists",
        document_id
    ))
}

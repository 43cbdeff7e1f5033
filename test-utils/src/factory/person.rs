//! Person factory for creating registry entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test persons with customizable fields.
pub struct PersonFactory<'a> {
    db: &'a DatabaseConnection,
    document_id: String,
    name: String,
    kind: String,
    email: Option<String>,
    phone: Option<String>,
    active: bool,
}

impl<'a> PersonFactory<'a> {
    /// Creates a new PersonFactory with default values.
    ///
    /// Defaults:
    /// - document_id: `"DOC{id}"`
    /// - name: `"Person {id}"`
    /// - kind: `"owner"`
    /// - email / phone: `None`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            document_id: format!("DOC{}", id),
            name: format!("Person {}", id),
            kind: "owner".to_string(),
            email: None,
            phone: None,
            active: true,
        }
    }

    pub fn document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = document_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the person kind, `"owner"`, `"visitor"` or `"employee"`.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the person entity into the database.
    pub async fn build(self) -> Result<entity::person::Model, DbErr> {
        entity::person::ActiveModel {
            document_id: ActiveValue::Set(self.document_id),
            name: ActiveValue::Set(self.name),
            kind: ActiveValue::Set(self.kind),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active owner with default values.
pub async fn create_person(db: &DatabaseConnection) -> Result<entity::person::Model, DbErr> {
    PersonFactory::new(db).build().await
}

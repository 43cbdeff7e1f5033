//! Alert factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating alerts with customizable fields.
pub struct AlertFactory<'a> {
    db: &'a DatabaseConnection,
    category: String,
    detail: String,
    severity: String,
    access_id: Option<i32>,
    guard_id: Option<i32>,
    created_at: DateTime<Utc>,
}

impl<'a> AlertFactory<'a> {
    /// Creates a new AlertFactory for a low severity manual report created now.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            category: "Manual report".to_string(),
            detail: format!("Incident {}", id),
            severity: "low".to_string(),
            access_id: None,
            guard_id: None,
            created_at: Utc::now(),
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    /// Sets the severity, `"low"`, `"medium"` or `"high"`.
    pub fn severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = severity.into();
        self
    }

    pub fn access(mut self, access_id: i32) -> Self {
        self.access_id = Some(access_id);
        self
    }

    pub fn guard(mut self, guard_id: i32) -> Self {
        self.guard_id = Some(guard_id);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the alert entity into the database.
    pub async fn build(self) -> Result<entity::alert::Model, DbErr> {
        entity::alert::ActiveModel {
            category: ActiveValue::Set(self.category),
            detail: ActiveValue::Set(self.detail),
            severity: ActiveValue::Set(self.severity),
            access_id: ActiveValue::Set(self.access_id),
            guard_id: ActiveValue::Set(self.guard_id),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an alert with default values.
pub async fn create_alert(db: &DatabaseConnection) -> Result<entity::alert::Model, DbErr> {
    AlertFactory::new(db).build().await
}

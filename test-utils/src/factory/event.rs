//! Event factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating calendar events with customizable fields.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: Option<String>,
    location: Option<String>,
    category: Option<String>,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    creator_id: Option<i32>,
    verified: bool,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory for a one hour unverified event starting now.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let starts_at = Utc::now();
        Self {
            db,
            title: format!("Event {}", id),
            description: None,
            location: Some("Main gate".to_string()),
            category: None,
            starts_at,
            ends_at: starts_at + Duration::hours(1),
            creator_id: None,
            verified: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the start and end of the event.
    pub fn between(mut self, starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Self {
        self.starts_at = starts_at;
        self.ends_at = ends_at;
        self
    }

    pub fn creator(mut self, creator_id: i32) -> Self {
        self.creator_id = Some(creator_id);
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    /// Builds and inserts the event entity into the database.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            location: ActiveValue::Set(self.location),
            category: ActiveValue::Set(self.category),
            starts_at: ActiveValue::Set(self.starts_at),
            ends_at: ActiveValue::Set(self.ends_at),
            creator_id: ActiveValue::Set(self.creator_id),
            verified: ActiveValue::Set(self.verified),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values.
pub async fn create_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).build().await
}

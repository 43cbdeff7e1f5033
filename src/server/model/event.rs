//! Facility event domain models and parameters.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    model::event::{EventDto, EventFormDto},
    server::{error::AppError, model::audit::Auditable, util::parse::parse_datetime},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub creator_id: Option<i32>,
    pub verified: bool,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            location: entity.location,
            category: entity.category,
            starts_at: entity.starts_at,
            ends_at: entity.ends_at,
            creator_id: entity.creator_id,
            verified: entity.verified,
        }
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            title: self.title,
            description: self.description,
            location: self.location,
            category: self.category,
            start: self.starts_at,
            end: self.ends_at,
            creator_id: self.creator_id,
            verified: self.verified,
        }
    }
}

impl Auditable for Event {
    const ENTITY: &'static str = "event";

    fn audit_id(&self) -> i32 {
        self.id
    }
}

/// Validated event fields shared by create and update.
#[derive(Debug, Clone)]
pub struct EventParams {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl EventParams {
    /// # Returns
    /// - `Ok(EventParams)` - Title present and `start <= end`
    /// - `Err(AppError::BadRequest)` - Blank title, unparseable timestamps or
    ///   an end before the start
    pub fn from_dto(dto: EventFormDto) -> Result<Self, AppError> {
        let title = dto.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::BadRequest("Event title is required".to_string()));
        }

        let starts_at = parse_datetime("start", &dto.start)?;
        let ends_at = parse_datetime("end", &dto.end)?;
        if ends_at < starts_at {
            return Err(AppError::BadRequest(
                "Event end must not be before its start".to_string(),
            ));
        }

        Ok(Self {
            title,
            description: dto.description.filter(|v| !v.trim().is_empty()),
            location: dto.location.filter(|v| !v.trim().is_empty()),
            category: dto.category.filter(|v| !v.trim().is_empty()),
            starts_at,
            ends_at,
        })
    }
}

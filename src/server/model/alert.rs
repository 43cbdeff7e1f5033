//! Alert domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::Serialize;

use crate::{
    model::alert::{AlertDto, ReportIncidentDto, Severity},
    server::{
        error::AppError,
        model::audit::Auditable,
        util::parse::parse_stored,
    },
};

/// Category used for alerts raised automatically by a denied validation.
pub const UNAUTHORIZED_ACCESS_CATEGORY: &str = "unauthorized_access";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub id: i32,
    pub category: String,
    pub detail: String,
    pub severity: Severity,
    pub access_id: Option<i32>,
    pub guard_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Alert {
    pub fn from_entity(entity: entity::alert::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            category: entity.category,
            detail: entity.detail,
            severity: parse_stored("alert.severity", &entity.severity, Severity::parse)?,
            access_id: entity.access_id,
            guard_id: entity.guard_id,
            created_at: entity.created_at,
        })
    }

    /// Converts without the joined access and guard details.
    pub fn into_dto(self) -> AlertDto {
        AlertRecord {
            alert: self,
            access_at: None,
            plate: None,
            guard_name: None,
        }
        .into_dto()
    }
}

impl Auditable for Alert {
    const ENTITY: &'static str = "alert";

    fn audit_id(&self) -> i32 {
        self.id
    }
}

/// Alert joined with the access that triggered it and the reporting guard.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertRecord {
    pub alert: Alert,
    pub access_at: Option<DateTime<Utc>>,
    pub plate: Option<String>,
    pub guard_name: Option<String>,
}

impl AlertRecord {
    pub fn into_dto(self) -> AlertDto {
        let alert = self.alert;

        AlertDto {
            id: alert.id,
            category: alert.category,
            detail: alert.detail,
            severity: alert.severity,
            created_at: alert.created_at,
            access_id: alert.access_id,
            access_at: self.access_at,
            plate: self.plate,
            guard_id: alert.guard_id,
            guard_name: self.guard_name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewAlert {
    pub category: String,
    pub detail: String,
    pub severity: Severity,
    pub access_id: Option<i32>,
    pub guard_id: Option<i32>,
}

impl NewAlert {
    /// Builds a guard-reported incident.
    ///
    /// # Returns
    /// - `Ok(NewAlert)` - Category and detail are non-empty
    /// - `Err(AppError::BadRequest)` - Either field is blank
    pub fn from_report(dto: ReportIncidentDto, guard_id: i32) -> Result<Self, AppError> {
        let category = dto.category.trim().to_string();
        let detail = dto.detail.trim().to_string();

        if category.is_empty() || detail.is_empty() {
            return Err(AppError::BadRequest(
                "Incident category and detail are required".to_string(),
            ));
        }

        Ok(Self {
            category,
            detail,
            severity: dto.severity,
            access_id: dto.access_id,
            guard_id: Some(guard_id),
        })
    }
}

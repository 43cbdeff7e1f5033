//! Audit trail domain models.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::Serialize;

use crate::{
    model::audit::{AuditAction, AuditEntryDto, PaginatedAuditDto},
    server::util::parse::parse_stored,
};

/// A domain model whose mutations are written to the audit trail.
///
/// The serialized form of the model is stored as the before and after snapshot.
pub trait Auditable: Serialize {
    /// Entity name stored with each audit row
    const ENTITY: &'static str;

    /// Id of the audited row
    fn audit_id(&self) -> i32;
}

/// One immutable audit row with the acting user's name resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub id: i32,
    pub occurred_at: DateTime<Utc>,
    pub user_id: Option<i32>,
    pub user_name: Option<String>,
    pub entity: String,
    pub entity_id: i32,
    pub action: AuditAction,
    pub previous_state: Option<serde_json::Value>,
    pub new_state: Option<serde_json::Value>,
}

impl AuditEntry {
    pub fn from_entity(
        entity: entity::audit_log::Model,
        user: Option<entity::user::Model>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            occurred_at: entity.occurred_at,
            user_id: entity.user_id,
            user_name: user.map(|u| u.name),
            entity: entity.entity,
            entity_id: entity.entity_id,
            action: parse_stored("audit_log.action", &entity.action, AuditAction::parse)?,
            previous_state: parse_snapshot(entity.previous_state)?,
            new_state: parse_snapshot(entity.new_state)?,
        })
    }

    pub fn into_dto(self) -> AuditEntryDto {
        AuditEntryDto {
            id: self.id,
            occurred_at: self.occurred_at,
            user_id: self.user_id,
            user_name: self.user_name,
            entity: self.entity,
            entity_id: self.entity_id,
            action: self.action,
            previous_state: self.previous_state,
            new_state: self.new_state,
        }
    }
}

fn parse_snapshot(raw: Option<String>) -> Result<Option<serde_json::Value>, DbErr> {
    raw.map(|raw| {
        serde_json::from_str(&raw)
            .map_err(|e| DbErr::Custom(format!("Invalid audit snapshot: {}", e)))
    })
    .transpose()
}

/// Row values for a new audit entry, snapshots already serialized.
#[derive(Debug, Clone)]
pub struct NewAuditEntry {
    pub user_id: Option<i32>,
    pub entity: &'static str,
    pub entity_id: i32,
    pub action: AuditAction,
    pub previous_state: Option<String>,
    pub new_state: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedAudit {
    pub entries: Vec<AuditEntry>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedAudit {
    pub fn into_dto(self) -> PaginatedAuditDto {
        PaginatedAuditDto {
            entries: self
                .entries
                .into_iter()
                .map(AuditEntry::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

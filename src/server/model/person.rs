//! Registry person domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::Serialize;

use crate::{
    model::person::{PersonDto, PersonFormDto, PersonKind},
    server::{model::audit::Auditable, util::parse::parse_stored},
};

/// A person known to the facility, typically a vehicle owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    pub id: i32,
    pub document_id: String,
    pub name: String,
    pub kind: PersonKind,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Person {
    pub fn from_entity(entity: entity::person::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            document_id: entity.document_id,
            name: entity.name,
            kind: parse_stored("person.kind", &entity.kind, PersonKind::parse)?,
            email: entity.email,
            phone: entity.phone,
            active: entity.active,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> PersonDto {
        PersonDto {
            id: self.id,
            document_id: self.document_id,
            name: self.name,
            kind: self.kind,
            email: self.email,
            phone: self.phone,
            active: self.active,
            created_at: self.created_at,
        }
    }
}

impl Auditable for Person {
    const ENTITY: &'static str = "person";

    fn audit_id(&self) -> i32 {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct CreatePersonParams {
    pub document_id: String,
    pub name: String,
    pub kind: PersonKind,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl CreatePersonParams {
    pub fn from_dto(dto: PersonFormDto) -> Self {
        Self {
            document_id: dto.document_id.trim().to_string(),
            name: dto.name.trim().to_string(),
            kind: dto.kind,
            email: non_blank(dto.email),
            phone: non_blank(dto.phone),
        }
    }
}

/// Full-record update. `active` of `None` keeps the stored flag.
#[derive(Debug, Clone)]
pub struct UpdatePersonParams {
    pub id: i32,
    pub document_id: String,
    pub name: String,
    pub kind: PersonKind,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub active: Option<bool>,
}

impl UpdatePersonParams {
    pub fn from_dto(id: i32, dto: PersonFormDto) -> Self {
        Self {
            id,
            document_id: dto.document_id.trim().to_string(),
            name: dto.name.trim().to_string(),
            kind: dto.kind,
            email: non_blank(dto.email),
            phone: non_blank(dto.phone),
            active: dto.active,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

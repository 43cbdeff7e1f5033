//! Registered vehicle domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::Serialize;

use crate::{
    model::vehicle::{
        OwnerSummaryDto, VehicleDto, VehicleFormDto, VehicleInsideDto, VehicleKind,
    },
    server::{
        model::{audit::Auditable, person::Person},
        util::{parse::parse_stored, plate::normalize_registered_plate},
    },
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    pub id: i32,
    pub plate: String,
    pub kind: VehicleKind,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub owner_id: i32,
    pub inside: bool,
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn from_entity(entity: entity::vehicle::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            plate: entity.plate,
            kind: parse_stored("vehicle.kind", &entity.kind, VehicleKind::parse)?,
            brand: entity.brand,
            model: entity.model,
            color: entity.color,
            owner_id: entity.person_id,
            inside: entity.inside,
            created_at: entity.created_at,
        })
    }
}

impl Auditable for Vehicle {
    const ENTITY: &'static str = "vehicle";

    fn audit_id(&self) -> i32 {
        self.id
    }
}

/// Vehicle joined with its owner. The owner is only `None` if the row was
/// orphaned outside the application.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleWithOwner {
    pub vehicle: Vehicle,
    pub owner: Option<Person>,
}

impl VehicleWithOwner {
    pub fn from_entity(
        vehicle: entity::vehicle::Model,
        owner: Option<entity::person::Model>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            vehicle: Vehicle::from_entity(vehicle)?,
            owner: owner.map(Person::from_entity).transpose()?,
        })
    }

    pub fn into_dto(self) -> VehicleDto {
        let vehicle = self.vehicle;

        VehicleDto {
            id: vehicle.id,
            plate: vehicle.plate,
            kind: vehicle.kind,
            brand: vehicle.brand,
            model: vehicle.model,
            color: vehicle.color,
            owner_id: vehicle.owner_id,
            owner: self.owner.map(|owner| OwnerSummaryDto {
                id: owner.id,
                name: owner.name,
                document_id: owner.document_id,
                active: owner.active,
            }),
            inside: vehicle.inside,
            created_at: vehicle.created_at,
        }
    }
}

/// Create and full-record update share the same fields.
#[derive(Debug, Clone)]
pub struct VehicleParams {
    pub plate: String,
    pub kind: VehicleKind,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub owner_id: i32,
}

impl VehicleParams {
    /// Plates are stored in registry form so OCR lookups match exactly.
    pub fn from_dto(dto: VehicleFormDto) -> Self {
        Self {
            plate: normalize_registered_plate(&dto.plate),
            kind: dto.kind,
            brand: trimmed(dto.brand),
            model: trimmed(dto.model),
            color: trimmed(dto.color),
            owner_id: dto.owner_id,
        }
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// A vehicle currently inside, with the entry that let it in.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleInside {
    pub vehicle: Vehicle,
    pub owner_name: Option<String>,
    pub entry_access_id: Option<i32>,
    pub entered_at: Option<DateTime<Utc>>,
}

impl VehicleInside {
    pub fn into_dto(self) -> VehicleInsideDto {
        VehicleInsideDto {
            vehicle_id: self.vehicle.id,
            plate: self.vehicle.plate,
            kind: self.vehicle.kind,
            color: self.vehicle.color,
            owner_name: self.owner_name,
            entry_access_id: self.entry_access_id,
            entered_at: self.entered_at,
        }
    }
}

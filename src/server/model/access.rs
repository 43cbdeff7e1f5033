//! Access attempt domain models, history filters and validation parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        access::{
            AccessDto, AccessFilterParams, AccessOutcomeDto, AccessResult, Direction,
            PaginatedAccessesDto, RecentAccessDto, ValidateAccessDto,
        },
        vehicle::VehicleKind,
    },
    server::{
        error::AppError,
        util::parse::{parse_date_end, parse_date_start, parse_stored, parse_wire_enum},
    },
};

/// One recorded gate event, whatever its result.
#[derive(Debug, Clone, PartialEq)]
pub struct Access {
    pub id: i32,
    pub occurred_at: DateTime<Utc>,
    pub direction: Direction,
    pub result: AccessResult,
    pub plate: Option<String>,
    pub observations: Option<String>,
    pub vehicle_id: Option<i32>,
    pub control_point_id: Option<i32>,
    pub guard_id: Option<i32>,
}

impl Access {
    pub fn from_entity(entity: entity::access::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            occurred_at: entity.occurred_at,
            direction: parse_stored("access.direction", &entity.direction, Direction::parse)?,
            result: parse_stored("access.result", &entity.result, AccessResult::parse)?,
            plate: entity.plate,
            observations: entity.observations,
            vehicle_id: entity.vehicle_id,
            control_point_id: entity.control_point_id,
            guard_id: entity.guard_id,
        })
    }
}

/// Access joined with the vehicle kind and the name of the guard on duty.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessRecord {
    pub access: Access,
    pub vehicle_kind: Option<VehicleKind>,
    pub guard_name: Option<String>,
}

impl AccessRecord {
    pub fn into_dto(self) -> AccessDto {
        let access = self.access;

        AccessDto {
            id: access.id,
            occurred_at: access.occurred_at,
            direction: access.direction,
            result: access.result,
            plate: access.plate,
            observations: access.observations,
            vehicle_id: access.vehicle_id,
            vehicle_kind: self.vehicle_kind,
            control_point_id: access.control_point_id,
            guard_id: access.guard_id,
            guard_name: self.guard_name,
        }
    }

    pub fn into_recent_dto(self) -> RecentAccessDto {
        RecentAccessDto {
            id: self.access.id,
            occurred_at: self.access.occurred_at,
            plate: self.access.plate,
            direction: self.access.direction,
            result: self.access.result,
            guard_name: self.guard_name,
        }
    }
}

/// Row values for a new access attempt.
#[derive(Debug, Clone)]
pub struct NewAccess {
    pub direction: Direction,
    pub result: AccessResult,
    pub plate: Option<String>,
    pub observations: Option<String>,
    pub vehicle_id: Option<i32>,
    pub control_point_id: Option<i32>,
    pub guard_id: Option<i32>,
}

/// Parsed history filter. `to` is exclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessFilter {
    pub plate: Option<String>,
    pub vehicle_kind: Option<VehicleKind>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub page: u64,
    pub per_page: u64,
}

impl AccessFilter {
    /// Validates the raw query string.
    ///
    /// # Returns
    /// - `Ok(AccessFilter)` - Dates resolved to a half-open UTC range
    /// - `Err(AppError::BadRequest)` - Unparseable date, unknown vehicle kind,
    ///   inverted range or zero page size
    pub fn from_params(params: AccessFilterParams) -> Result<Self, AppError> {
        if params.entries == 0 {
            return Err(AppError::BadRequest(
                "entries must be greater than zero".to_string(),
            ));
        }

        let from = params.from.as_deref().map(parse_date_start).transpose()?;
        let to = params.to.as_deref().map(parse_date_end).transpose()?;
        if let (Some(from), Some(to)) = (from, to) {
            if from >= to {
                return Err(AppError::BadRequest(
                    "'from' must not be after 'to'".to_string(),
                ));
            }
        }

        let vehicle_kind = params
            .vehicle_kind
            .as_deref()
            .map(str::trim)
            .filter(|kind| !kind.is_empty())
            .map(|kind| parse_wire_enum::<VehicleKind>("vehicle kind", kind))
            .transpose()?;

        Ok(Self {
            plate: params
                .plate
                .map(|plate| plate.trim().to_uppercase())
                .filter(|plate| !plate.is_empty()),
            vehicle_kind,
            from,
            to,
            page: params.page,
            per_page: params.entries,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedAccesses {
    pub accesses: Vec<AccessRecord>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedAccesses {
    pub fn into_dto(self) -> PaginatedAccessesDto {
        PaginatedAccessesDto {
            accesses: self
                .accesses
                .into_iter()
                .map(AccessRecord::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Input of a gate validation.
#[derive(Debug, Clone)]
pub struct ValidateAccessParams {
    /// Base64 frame, possibly with a data URL header
    pub image_base64: String,
    pub direction: Direction,
    pub control_point_id: Option<i32>,
    pub guard_id: i32,
}

impl ValidateAccessParams {
    pub fn from_dto(dto: ValidateAccessDto, guard_id: i32) -> Self {
        Self {
            image_base64: dto.image_base64,
            direction: dto.direction,
            control_point_id: dto.control_point_id,
            guard_id,
        }
    }
}

/// Result of a gate validation. Every outcome has a persisted access row.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessOutcome {
    pub access_id: i32,
    pub result: AccessResult,
    pub direction: Direction,
    pub plate: Option<String>,
    pub reason: Option<String>,
    pub owner_name: Option<String>,
    pub alert_id: Option<i32>,
}

impl AccessOutcome {
    pub fn into_dto(self) -> AccessOutcomeDto {
        AccessOutcomeDto {
            access_id: self.access_id,
            result: self.result,
            direction: self.direction,
            plate: self.plate,
            reason: self.reason,
            owner_name: self.owner_name,
            alert_id: self.alert_id,
        }
    }
}

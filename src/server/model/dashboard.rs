//! Dashboard aggregates and report rows.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        access::AccessResult,
        dashboard::{AccessReportRowDto, AdminSummaryDto, GuardDashboardDto},
        vehicle::VehicleKind,
    },
    server::model::access::AccessRecord,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AdminSummary {
    pub total_vehicles: u64,
    pub total_accesses: u64,
    pub total_alerts: u64,
    pub vehicles_inside: u64,
    pub active_persons: u64,
}

impl AdminSummary {
    pub fn into_dto(self) -> AdminSummaryDto {
        AdminSummaryDto {
            total_vehicles: self.total_vehicles,
            total_accesses: self.total_accesses,
            total_alerts: self.total_alerts,
            vehicles_inside: self.vehicles_inside,
            active_persons: self.active_persons,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuardDashboard {
    pub recent_accesses: Vec<AccessRecord>,
    pub active_alerts: u64,
    pub total_vehicles: u64,
}

impl GuardDashboard {
    pub fn into_dto(self) -> GuardDashboardDto {
        GuardDashboardDto {
            recent_accesses: self
                .recent_accesses
                .into_iter()
                .map(AccessRecord::into_recent_dto)
                .collect(),
            active_alerts: self.active_alerts,
            total_vehicles: self.total_vehicles,
        }
    }
}

/// Access joined with vehicle and owner details for the management report.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessReportRow {
    pub access_id: i32,
    pub occurred_at: DateTime<Utc>,
    pub plate: Option<String>,
    pub vehicle_kind: Option<VehicleKind>,
    pub color: Option<String>,
    pub owner_name: Option<String>,
    pub result: AccessResult,
}

impl AccessReportRow {
    pub fn into_dto(self) -> AccessReportRowDto {
        AccessReportRowDto {
            access_id: self.access_id,
            occurred_at: self.occurred_at,
            plate: self.plate,
            vehicle_kind: self.vehicle_kind,
            color: self.color,
            owner_name: self.owner_name,
            result: self.result,
        }
    }
}

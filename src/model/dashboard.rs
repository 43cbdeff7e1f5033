use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    access::{AccessResult, RecentAccessDto},
    vehicle::VehicleKind,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdminSummaryDto {
    pub total_vehicles: u64,
    pub total_accesses: u64,
    pub total_alerts: u64,
    pub vehicles_inside: u64,
    pub active_persons: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GuardDashboardDto {
    pub recent_accesses: Vec<RecentAccessDto>,
    pub active_alerts: u64,
    pub total_vehicles: u64,
}

/// One line of the management access report and its exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccessReportRowDto {
    pub access_id: i32,
    pub occurred_at: DateTime<Utc>,
    pub plate: Option<String>,
    pub vehicle_kind: Option<VehicleKind>,
    pub color: Option<String>,
    pub owner_name: Option<String>,
    pub result: AccessResult,
}

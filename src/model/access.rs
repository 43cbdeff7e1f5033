use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::vehicle::VehicleKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[serde(alias = "entrada")]
    Entry,
    #[serde(alias = "salida")]
    Exit,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Exit => "exit",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "entry" => Some(Self::Entry),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccessResult {
    #[serde(alias = "autorizado")]
    Authorized,
    #[serde(alias = "denegado")]
    Denied,
    #[serde(alias = "fallido")]
    Failed,
}

impl AccessResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authorized => "authorized",
            Self::Denied => "denied",
            Self::Failed => "failed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "authorized" => Some(Self::Authorized),
            "denied" => Some(Self::Denied),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccessDto {
    pub id: i32,
    pub occurred_at: DateTime<Utc>,
    pub direction: Direction,
    pub result: AccessResult,
    pub plate: Option<String>,
    pub observations: Option<String>,
    pub vehicle_id: Option<i32>,
    pub vehicle_kind: Option<VehicleKind>,
    pub control_point_id: Option<i32>,
    pub guard_id: Option<i32>,
    pub guard_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedAccessesDto {
    pub accesses: Vec<AccessDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Query string of the access history. Spanish names are what the existing
/// front-end sends.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AccessFilterParams {
    /// Partial plate match
    #[serde(default, alias = "placa")]
    pub plate: Option<String>,
    /// Vehicle kind
    #[serde(default, alias = "tipo")]
    pub vehicle_kind: Option<String>,
    /// First day included, `YYYY-MM-DD`
    #[serde(default, alias = "desde")]
    pub from: Option<String>,
    /// Last day included, `YYYY-MM-DD`
    #[serde(default, alias = "hasta")]
    pub to: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    25
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidateAccessDto {
    /// Base64 image, optionally prefixed with a `data:image/...;base64,` header.
    #[serde(default)]
    pub image_base64: String,
    #[serde(alias = "tipo_acceso")]
    pub direction: Direction,
    #[serde(default)]
    pub control_point_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccessOutcomeDto {
    pub access_id: i32,
    pub result: AccessResult,
    pub direction: Direction,
    pub plate: Option<String>,
    pub reason: Option<String>,
    pub owner_name: Option<String>,
    pub alert_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecentAccessDto {
    pub id: i32,
    pub occurred_at: DateTime<Utc>,
    pub plate: Option<String>,
    pub direction: Direction,
    pub result: AccessResult,
    pub guard_name: Option<String>,
}

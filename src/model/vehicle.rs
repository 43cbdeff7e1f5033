use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    #[serde(alias = "automovil", alias = "carro")]
    Car,
    #[serde(alias = "moto", alias = "motocicleta")]
    Motorcycle,
    #[serde(alias = "camion")]
    Truck,
    #[serde(alias = "otro")]
    Other,
}

impl VehicleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Motorcycle => "motorcycle",
            Self::Truck => "truck",
            Self::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "car" => Some(Self::Car),
            "motorcycle" => Some(Self::Motorcycle),
            "truck" => Some(Self::Truck),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OwnerSummaryDto {
    pub id: i32,
    pub name: String,
    pub document_id: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub plate: String,
    pub kind: VehicleKind,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub owner_id: i32,
    pub owner: Option<OwnerSummaryDto>,
    pub inside: bool,
    pub created_at: DateTime<Utc>,
}

/// Body of both create and full-record update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VehicleFormDto {
    #[serde(alias = "placa")]
    pub plate: String,
    #[serde(default = "default_kind", alias = "tipo")]
    pub kind: VehicleKind,
    #[serde(default, alias = "marca")]
    pub brand: Option<String>,
    #[serde(default, alias = "modelo")]
    pub model: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(alias = "id_persona", alias = "person_id")]
    pub owner_id: i32,
}

fn default_kind() -> VehicleKind {
    VehicleKind::Car
}

/// A vehicle currently inside the facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleInsideDto {
    pub vehicle_id: i32,
    pub plate: String,
    pub kind: VehicleKind,
    pub color: Option<String>,
    pub owner_name: Option<String>,
    pub entry_access_id: Option<i32>,
    pub entered_at: Option<DateTime<Utc>>,
}

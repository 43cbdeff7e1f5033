use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[serde(alias = "baja")]
    Low,
    #[serde(alias = "media")]
    Medium,
    #[serde(alias = "alta")]
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AlertDto {
    pub id: i32,
    pub category: String,
    pub detail: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    pub access_id: Option<i32>,
    pub access_at: Option<DateTime<Utc>>,
    pub plate: Option<String>,
    pub guard_id: Option<i32>,
    pub guard_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportIncidentDto {
    #[serde(alias = "tipo")]
    pub category: String,
    #[serde(alias = "detalle")]
    pub detail: String,
    #[serde(default = "default_severity", alias = "severidad")]
    pub severity: Severity,
    #[serde(default, alias = "id_acceso")]
    pub access_id: Option<i32>,
}

fn default_severity() -> Severity {
    Severity::Low
}

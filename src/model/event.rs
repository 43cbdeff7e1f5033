use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub creator_id: Option<i32>,
    pub verified: bool,
}

/// Body of both create and full-record update. `start` and `end` accept RFC 3339 or
/// `YYYY-MM-DDTHH:MM[:SS]` read as UTC.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventFormDto {
    #[serde(alias = "titulo")]
    pub title: String,
    #[serde(default, alias = "descripcion")]
    pub description: Option<String>,
    #[serde(default, alias = "ubicacion")]
    pub location: Option<String>,
    #[serde(default, alias = "categoria")]
    pub category: Option<String>,
    #[serde(alias = "inicio")]
    pub start: String,
    #[serde(alias = "fin")]
    pub end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerifyEventDto {
    #[serde(default = "default_verified", alias = "verificado")]
    pub verified: bool,
}

fn default_verified() -> bool {
    true
}

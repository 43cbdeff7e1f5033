use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PersonKind {
    #[serde(alias = "propietario")]
    Owner,
    #[serde(alias = "visitante")]
    Visitor,
    #[serde(alias = "empleado")]
    Employee,
}

impl PersonKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Visitor => "visitor",
            Self::Employee => "employee",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "owner" => Some(Self::Owner),
            "visitor" => Some(Self::Visitor),
            "employee" => Some(Self::Employee),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PersonDto {
    pub id: i32,
    pub document_id: String,
    pub name: String,
    pub kind: PersonKind,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Body of both create and full-record update. `active` is ignored on create.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PersonFormDto {
    #[serde(alias = "documento")]
    pub document_id: String,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default = "default_kind", alias = "tipo")]
    pub kind: PersonKind,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "telefono")]
    pub phone: Option<String>,
    #[serde(default, alias = "activo")]
    pub active: Option<bool>,
}

fn default_kind() -> PersonKind {
    PersonKind::Owner
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

/// Staff role. Stored as `admin` / `guard`; the legacy front-end sends
/// `Administrador` / `Vigilante`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[serde(alias = "Administrador", alias = "administrador")]
    Admin,
    #[serde(alias = "Vigilante", alias = "vigilante")]
    Guard,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Guard => "guard",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Self::Admin),
            "guard" => Some(Self::Guard),
            _ => None,
        }
    }
}

/// Login form. Every field defaults to empty and the role is kept as text, so that a
/// missing or unknown value is answered by the service instead of a deserialization
/// rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    #[serde(default, alias = "usuario")]
    pub username: String,
    #[serde(default, alias = "clave")]
    pub password: String,
    /// `admin` / `guard`, or `Administrador` / `Vigilante`
    #[serde(default, alias = "rol")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserDto,
}

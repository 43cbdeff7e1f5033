use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::auth::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub role: Role,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    #[serde(alias = "usuario")]
    pub username: String,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "clave")]
    pub password: String,
    #[serde(default = "default_role", alias = "rol")]
    pub role: Role,
}

fn default_role() -> Role {
    Role::Guard
}

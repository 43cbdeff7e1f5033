//! Login and access token models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::auth::{LoginDto, LoginResponseDto, Role},
    server::{model::user::User, util::parse::parse_wire_enum},
};

/// JWT payload issued at login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Username
    pub sub: String,
    pub role: Role,
    /// Id of the user, recorded as the actor of audited actions
    pub audit_id: i32,
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
    /// Role picked on the login form, as sent. `None` when missing or blank.
    pub role: Option<String>,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            password: dto.password,
            role: dto
                .role
                .map(|role| role.trim().to_string())
                .filter(|role| !role.is_empty()),
        }
    }

    /// The selected role, if it names one.
    pub fn selected_role(&self) -> Option<Role> {
        self.role
            .as_deref()
            .and_then(|role| parse_wire_enum::<Role>("role", role).ok())
    }
}

/// Successful login: signed token plus the authenticated user.
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: User,
}

impl LoginSession {
    pub fn into_dto(self) -> LoginResponseDto {
        LoginResponseDto {
            token: self.token,
            token_type: "Bearer".to_string(),
            expires_at: self.expires_at,
            user: self.user.into_dto(),
        }
    }
}

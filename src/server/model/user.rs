//! Staff account domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::Serialize;

use crate::{
    model::{
        auth::Role,
        user::{CreateUserDto, UserDto},
    },
    server::{model::audit::Auditable, util::parse::parse_stored},
};

/// Guard or admin account. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub role: Role,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Custom)` - The stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            username: entity.username,
            name: entity.name,
            role: parse_stored("user.role", &entity.role, Role::parse)?,
            active: entity.active,
            created_at: entity.created_at,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            name: self.name,
            role: self.role,
            active: self.active,
            created_at: self.created_at,
        }
    }
}

impl Auditable for User {
    const ENTITY: &'static str = "user";

    fn audit_id(&self) -> i32 {
        self.id
    }
}

/// User together with the stored bcrypt hash, only used by login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Parameters for registering a staff account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub name: String,
    pub password: String,
    pub role: Role,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            name: dto.name.trim().to_string(),
            password: dto.password,
            role: dto.role,
        }
    }
}

/// Row values for inserting a staff account once the password is hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub name: String,
    pub password_hash: String,
    pub role: Role,
}

//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing staff accounts. It handles
//! account creation, credential lookup for login, activation changes and admin checks,
//! converting between entity models and domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::auth::Role,
    server::model::user::{NewUser, User, UserCredentials},
};

/// Repository providing database operations for staff accounts.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new active account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(DbErr)` - Database error, including a unique violation on username
    pub async fn create(&self, user: NewUser) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(user.username),
            password_hash: ActiveValue::Set(user.password_hash),
            name: ActiveValue::Set(user.name),
            role: ActiveValue::Set(user.role.as_str().to_string()),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds an account by id regardless of its active flag.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Loads an account with its password hash for login.
    ///
    /// # Returns
    /// - `Ok(Some(UserCredentials))` - Account exists, active or not
    /// - `Ok(None)` - No account has this username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials(&self, username: &str) -> Result<Option<UserCredentials>, DbErr> {
        let Some(entity) = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let password_hash = entity.password_hash.clone();

        Ok(Some(UserCredentials {
            user: User::from_entity(entity)?,
            password_hash,
        }))
    }

    pub async fn username_taken(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any active admin account exists.
    ///
    /// Used at startup to decide whether the bootstrap admin must be created.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .filter(entity::user::Column::Active.eq(true))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all accounts ordered alphabetically by name.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Sets the active flag of an account.
    ///
    /// # Returns
    /// - `Ok(true)` - Account found and updated
    /// - `Ok(false)` - No account with this id
    pub async fn set_active(&self, id: i32, active: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::Active, Expr::value(active))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

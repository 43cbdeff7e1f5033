//! User factory for creating staff accounts.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Password given to every factory user unless overridden.
pub const DEFAULT_PASSWORD: &str = "password";

/// Lowest bcrypt cost accepted by the bcrypt crate, keeps tests fast.
const TEST_BCRYPT_COST: u32 = 4;

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("night-shift")
///     .role("guard")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    name: String,
    password: String,
    role: String,
    active: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"` where id is auto-incremented
    /// - name: `"User {id}"`
    /// - password: `DEFAULT_PASSWORD`
    /// - role: `"guard"`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            name: format!("User {}", id),
            password: DEFAULT_PASSWORD.to_string(),
            role: "guard".to_string(),
            active: true,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the plaintext password, hashed with bcrypt on `build()`.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the stored role, `"admin"` or `"guard"`.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert, or hashing failure
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let password_hash = bcrypt::hash(&self.password, TEST_BCRYPT_COST)
            .map_err(|e| DbErr::Custom(format!("Failed to hash test password: {}", e)))?;

        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(password_hash),
            name: ActiveValue::Set(self.name),
            role: ActiveValue::Set(self.role),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active guard with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an active admin with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role("admin").build().await
}

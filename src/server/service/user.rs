use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::audit::AuditAction,
    server::{
        config::AuthSettings,
        data::user::UserRepository,
        error::AppError,
        model::user::{CreateUserParams, NewUser, User},
        service::{audit::AuditTrail, auth::hash_password},
    },
};

/// Staff account management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    settings: &'a AuthSettings,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, settings: &'a AuthSettings) -> Self {
        Self { db, settings }
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Registers a staff account with a bcrypt-hashed password.
    ///
    /// # Arguments
    /// - `actor` - Admin performing the action
    /// - `params` - Account fields
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::BadRequest)` - Username, name or password blank
    /// - `Err(AppError::Conflict)` - Username already in use
    pub async fn create(&self, actor: i32, params: CreateUserParams) -> Result<User, AppError> {
        if params.username.is_empty() || params.name.is_empty() || params.password.is_empty() {
            return Err(AppError::BadRequest(
                "Username, name and password are required".to_string(),
            ));
        }

        let password_hash = hash_password(self.settings, &params.password)?;

        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        if repo.username_taken(&params.username).await? {
            return Err(AppError::Conflict(format!(
                "Username '{}' is already in use",
                params.username
            )));
        }

        let user = repo
            .create(NewUser {
                username: params.username,
                name: params.name,
                password_hash,
                role: params.role,
            })
            .await?;

        AuditTrail::new(&txn, Some(actor))
            .record(AuditAction::Create, None, Some(&user))
            .await?;
        txn.commit().await?;

        tracing::info!("User {} created account '{}'", actor, user.username);

        Ok(user)
    }

    /// Deactivates a staff account. Outstanding tokens stop working on their next use.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Account deactivated
    /// - `Ok(None)` - No account with this id
    /// - `Err(AppError::BadRequest)` - The actor tried to deactivate themself
    pub async fn deactivate(&self, actor: i32, id: i32) -> Result<Option<User>, AppError> {
        if actor == id {
            return Err(AppError::BadRequest(
                "You cannot deactivate your own account".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        let Some(previous) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        repo.set_active(id, false).await?;
        let updated = User {
            active: false,
            ..previous.clone()
        };

        AuditTrail::new(&txn, Some(actor))
            .record(AuditAction::Delete, Some(&previous), Some(&updated))
            .await?;
        txn.commit().await?;

        Ok(Some(updated))
    }
}

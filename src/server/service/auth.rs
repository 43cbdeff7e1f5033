//! Password login and access token handling.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::audit::AuditAction,
    server::{
        config::AuthSettings,
        data::user::UserRepository,
        error::{auth::AuthError, internal::InternalError, AppError},
        model::{
            audit::Auditable,
            auth::{Claims, LoginParams, LoginSession},
            user::User,
        },
        service::audit::AuditTrail,
    },
};

/// Service for staff login.
///
/// Verifies credentials against the bcrypt hash, checks the role chosen on the login
/// form against the stored role, records the login in the audit trail and issues a
/// signed HS256 token.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    settings: &'a AuthSettings,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, settings: &'a AuthSettings) -> Self {
        Self { db, settings }
    }

    /// Authenticates a user and issues an access token.
    ///
    /// The client never learns whether the username, the password or the active flag
    /// was the reason a login failed.
    ///
    /// # Arguments
    /// - `params` - Username, password and selected role
    ///
    /// # Returns
    /// - `Ok(LoginSession)` - Token, expiry and the authenticated user
    /// - `Err(AppError::BadRequest)` - Username, password or role missing
    /// - `Err(AuthError::InvalidCredentials)` - Unknown or inactive user, or wrong password
    /// - `Err(AuthError::RoleMismatch)` - Credentials valid but the selected role differs or names no role
    pub async fn login(&self, params: LoginParams) -> Result<LoginSession, AppError> {
        if params.role.is_none() || params.username.is_empty() || params.password.is_empty() {
            return Err(AppError::BadRequest(
                "Username, password and role are required".to_string(),
            ));
        }

        let credentials = UserRepository::new(self.db)
            .find_credentials(&params.username)
            .await?
            .filter(|c| c.user.active)
            .ok_or_else(|| AuthError::InvalidCredentials(params.username.clone()))?;

        if !bcrypt::verify(&params.password, &credentials.password_hash)? {
            tracing::warn!("Failed login for user '{}'", params.username);
            return Err(AuthError::InvalidCredentials(params.username).into());
        }

        let user = credentials.user;
        if params.selected_role() != Some(user.role) {
            tracing::warn!(
                "User '{}' tried to log in as '{}' but is {}",
                user.username,
                params.role.as_deref().unwrap_or_default(),
                user.role.as_str()
            );
            return Err(AuthError::RoleMismatch(user.username).into());
        }

        let (token, expires_at) = encode_token(self.settings, &user)?;

        let txn = self.db.begin().await?;
        AuditTrail::new(&txn, Some(user.id))
            .record_raw(
                User::ENTITY,
                user.id,
                AuditAction::Login,
                None,
                Some(
                    serde_json::json!({
                        "username": user.username,
                        "role": user.role,
                    })
                    .to_string(),
                ),
            )
            .await?;
        txn.commit().await?;

        tracing::info!("User '{}' logged in as {}", user.username, user.role.as_str());

        Ok(LoginSession {
            token,
            expires_at,
            user,
        })
    }
}

/// Signs an access token for the user.
///
/// # Returns
/// - `Ok((token, expires_at))` - Signed token and its expiry
/// - `Err(InternalError::TokenEncoding)` - Signing failed
pub fn encode_token(
    settings: &AuthSettings,
    user: &User,
) -> Result<(String, DateTime<Utc>), AppError> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(settings.token_ttl_hours);

    let claims = Claims {
        sub: user.username.clone(),
        role: user.role,
        audit_id: user.id,
        name: user.name.clone(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(settings.jwt_secret.as_bytes()),
    )
    .map_err(InternalError::TokenEncoding)?;

    Ok((token, expires_at))
}

/// Verifies signature and expiry of an access token.
///
/// # Returns
/// - `Ok(Claims)` - Token is valid
/// - `Err(AuthError::InvalidToken)` - Malformed, tampered with or expired
pub fn decode_token(settings: &AuthSettings, token: &str) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(settings.jwt_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| AuthError::InvalidToken(e.to_string()))
}

/// Hashes a password with the configured bcrypt cost.
pub fn hash_password(settings: &AuthSettings, password: &str) -> Result<String, AppError> {
    Ok(bcrypt::hash(password, settings.bcrypt_cost)?)
}

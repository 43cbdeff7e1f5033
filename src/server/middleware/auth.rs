use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    config::AuthSettings,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::decode_token,
};

pub enum Permission {
    Admin,
}

/// Checks the bearer token of a request against the database.
///
/// A valid signature is not enough: the token's user must still exist, be active and
/// hold the role the token was issued for.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    settings: &'a AuthSettings,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        settings: &'a AuthSettings,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            settings,
            headers,
        }
    }

    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = bearer_token(self.headers)?;
        let claims = decode_token(self.settings, token)?;

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo
            .find_by_id(claims.audit_id)
            .await?
            .filter(|user| user.active)
        else {
            return Err(AuthError::UserNotInDatabase(claims.audit_id).into());
        };

        if user.role != claims.role {
            return Err(AuthError::InvalidToken(format!(
                "token role {} no longer matches user {}",
                claims.role.as_str(),
                user.id
            ))
            .into());
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted an admin-only action without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidToken("authorization header is not ASCII".to_string()))?;

    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingToken)
}

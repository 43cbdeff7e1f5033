use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on a protected route.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Token failed signature, format or expiry validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Bearer token is invalid or expired: {0}")]
    InvalidToken(String),

    /// Unknown username, inactive account or wrong password at login.
    ///
    /// The client is never told which of the three it was. Results in a 401
    /// Unauthorized response.
    #[error("Invalid credentials for user '{0}'")]
    InvalidCredentials(String),

    /// The token subject no longer exists or was deactivated.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from token is missing or inactive")]
    UserNotInDatabase(i32),

    /// Correct credentials but the role selected at login is not the account's role.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User '{0}' selected a role that does not match the account")]
    RoleMismatch(String),

    /// Authenticated user lacks a required permission.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `InvalidCredentials` / `UserNotInDatabase` → 401
/// - `RoleMismatch` / `AccessDenied` → 403
///
/// Details are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Authentication required"),
            Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Invalid or expired token")
            }
            Self::InvalidCredentials(_) => {
                (StatusCode::UNAUTHORIZED, "Invalid username or password")
            }
            Self::RoleMismatch(_) => (
                StatusCode::FORBIDDEN,
                "Selected role does not match this account",
            ),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

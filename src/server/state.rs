//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{config::AuthSettings, service::ocr::PlateRecognizer};

/// Shared resources handed to every handler through Axum's state extraction.
///
/// Cloned per request: the connection is a pool handle and the recognizer sits
/// behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Token signing key, token lifetime and bcrypt cost.
    pub auth: AuthSettings,

    /// OCR backend used by access validation.
    pub recognizer: Arc<dyn PlateRecognizer>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        auth: AuthSettings,
        recognizer: Arc<dyn PlateRecognizer>,
    ) -> Self {
        Self {
            db,
            auth,
            recognizer,
        }
    }
}

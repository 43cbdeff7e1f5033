use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Signing a freshly built token failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to encode access token: {0}")]
    TokenEncoding(#[source] jsonwebtoken::errors::Error),

    /// A model could not be snapshotted as JSON for the audit trail.
    #[error("Failed to serialize audit snapshot of {entity}: {source}")]
    AuditSnapshot {
        /// Audited entity name
        entity: &'static str,
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// A report export could not be rendered.
    #[error("Failed to render {format} export: {reason}")]
    Export {
        /// `pdf` or `xlsx`
        format: &'static str,
        /// Renderer error message
        reason: String,
    },
}

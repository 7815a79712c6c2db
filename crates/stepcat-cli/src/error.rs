//! Error types for stepcat-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from stepcat-core
    #[error(transparent)]
    Core(#[from] stepcat_core::Error),

    /// Error from stepcat-meta
    #[error(transparent)]
    Meta(#[from] stepcat_meta::Error),

    /// Error from stepcat-schema
    #[error(transparent)]
    Schema(#[from] stepcat_schema::Error),

    /// Rendering JSON output failed
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

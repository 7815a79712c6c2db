//! Error types for stepcat-core

use std::path::PathBuf;

use crate::validation::ValidationPass;

/// Result type for stepcat-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a catalog build
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A discovered definition file could not be read or parsed
    #[error("Failed to load definition {path}: {message}")]
    DefinitionLoad { path: PathBuf, message: String },

    /// A discovered tool was rejected by the validator
    #[error("Validation failed for {path} during {pass}: {message}")]
    Validation {
        path: PathBuf,
        pass: ValidationPass,
        message: String,
    },

    /// The external validator program could not be started
    #[error("Could not run validator `{program}`: {source}")]
    ValidatorUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem error from stepcat-fs
    #[error(transparent)]
    Fs(#[from] stepcat_fs::Error),
}

impl Error {
    pub fn validation(
        path: impl Into<PathBuf>,
        pass: ValidationPass,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            path: path.into(),
            pass,
            message: message.into(),
        }
    }
}

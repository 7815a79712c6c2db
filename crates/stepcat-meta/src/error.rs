//! Error types for stepcat-meta

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] stepcat_fs::Error),

    #[error("Malformed registry {path} line {line}: expected `<namespace> <directory>`, got {content:?}")]
    MalformedRegistry {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("Invalid settings at {path}: {message}")]
    InvalidSettings { path: PathBuf, message: String },

    #[error("Could not determine the user's home directory")]
    HomeNotFound,
}

//! Format-agnostic document loading
//!
//! Definition files, schema documents and settings all go through
//! [`DocumentStore`]. The format is picked from the file extension, so a
//! `.cwl` tool definition is read as YAML and a schema as JSON.

use serde::de::DeserializeOwned;

use crate::{Error, NormalizedPath, Result, io};

/// Serialization formats understood by [`DocumentStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
    Toml,
}

impl DocumentFormat {
    /// Detect the format from a file extension (case-insensitive).
    ///
    /// - `.yaml`, `.yml`, `.cwl` -> YAML
    /// - `.json` -> JSON
    /// - `.toml` -> TOML
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "yaml" | "yml" | "cwl" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
            Self::Toml => "TOML",
        }
    }
}

/// Loads and saves documents, detecting the format from the extension.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentStore;

impl DocumentStore {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the format for `path` or fail with `UnsupportedFormat`.
    pub fn format_of(&self, path: &NormalizedPath) -> Result<DocumentFormat> {
        let extension = path.extension().unwrap_or("");
        DocumentFormat::from_extension(extension).ok_or_else(|| Error::UnsupportedFormat {
            extension: extension.to_string(),
        })
    }

    /// Load a document from a file.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let format = self.format_of(path)?;
        let content = io::read_text(path)?;
        self.parse(path, format, &content)
    }

    /// Parse `content` as `format`. `path` is only used for error reporting.
    pub fn parse<T: DeserializeOwned>(
        &self,
        path: &NormalizedPath,
        format: DocumentFormat,
        content: &str,
    ) -> Result<T> {
        let parse_error = |message: String| Error::Parse {
            path: path.to_native(),
            format: format.name().into(),
            message,
        };

        match format {
            DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string())),
            DocumentFormat::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
            DocumentFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
        }
    }
}

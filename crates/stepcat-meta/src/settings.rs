//! Catalog settings loaded from `config.toml`
//!
//! Every field has a default so a partial or missing file is valid:
//!
//! ```toml
//! tool_suffix = "cwl"
//! workflow_suffix = "yml"
//! deprecated_markers = ["biobb_md"]
//! generated_marker = "_inputs"
//! tool_schema_dir = "autogenerated/schemas/tools"
//! workflow_schema_dir = "autogenerated/schemas/workflows"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use stepcat_fs::{DocumentStore, NormalizedPath};

use crate::{Error, Result};

/// Discovery constants shared by the catalog builders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogSettings {
    /// Extension of tool definition files
    pub tool_suffix: String,
    /// Extension of workflow definition files
    pub workflow_suffix: String,
    /// Tool paths containing any of these substrings are never cataloged.
    /// `biobb_md` was superseded by `biobb_gromacs`.
    pub deprecated_markers: Vec<String>,
    /// Workflow paths containing this substring are generated input files
    pub generated_marker: String,
    /// Output directory for generated tool schemas, relative to the artifact root
    pub tool_schema_dir: String,
    /// Output directory for generated workflow schemas, relative to the artifact root
    pub workflow_schema_dir: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            tool_suffix: "cwl".into(),
            workflow_suffix: "yml".into(),
            deprecated_markers: vec!["biobb_md".into()],
            generated_marker: "_inputs".into(),
            tool_schema_dir: "autogenerated/schemas/tools".into(),
            workflow_schema_dir: "autogenerated/schemas/workflows".into(),
        }
    }
}

impl CatalogSettings {
    /// Load settings from `path`, falling back to defaults if it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = NormalizedPath::new(path.as_ref());
        if !path.exists() {
            tracing::debug!(path = %path, "No settings file, using defaults");
            return Ok(Self::default());
        }

        let settings: Self = DocumentStore::new().load(&path)?;
        settings.validate(&path)?;
        Ok(settings)
    }

    fn validate(&self, path: &NormalizedPath) -> Result<()> {
        let invalid = |message: &str| Error::InvalidSettings {
            path: path.to_native(),
            message: message.to_string(),
        };

        if self.tool_suffix.trim_start_matches('.').is_empty() {
            return Err(invalid("tool_suffix must not be empty"));
        }
        if self.workflow_suffix.trim_start_matches('.').is_empty() {
            return Err(invalid("workflow_suffix must not be empty"));
        }
        if self.deprecated_markers.iter().any(|m| m.is_empty()) {
            return Err(invalid("deprecated_markers must not contain empty strings"));
        }
        Ok(())
    }
}

//! Tool catalog construction

use std::path::{Path, PathBuf};

use serde_json::Value;
use stepcat_fs::{DocumentFormat, DocumentStore, NormalizedPath, absolutize, find_by_suffix, io};
use stepcat_meta::{CatalogSettings, NamespaceDirPair};

use crate::diagnostics::{DefinitionKind, Diagnostic, DiagnosticSink};
use crate::model::{Definition, StepId, Tool, ToolCatalog};
use crate::validation::{StructuralValidator, ToolValidator};
use crate::{Error, Result};

/// Set `stdout` and `stderr` to `<stem>.out` and `<stem>.err`, replacing any
/// values the document declared.
pub fn inject_streams(definition: &mut Definition, stem: &str) {
    definition.insert("stdout".into(), Value::String(format!("{stem}.out")));
    definition.insert("stderr".into(), Value::String(format!("{stem}.err")));
}

/// Builds a [`ToolCatalog`] from registry pairs.
///
/// ```rust,no_run
/// use stepcat_core::{ToolCatalogBuilder, TracingSink};
/// use stepcat_meta::NamespaceDirPair;
///
/// let pairs = vec![NamespaceDirPair::new("global", "cwl_adapters")];
/// let catalog = ToolCatalogBuilder::new()
///     .validate(true)
///     .build(&pairs, &mut TracingSink)?;
/// # Ok::<(), stepcat_core::Error>(())
/// ```
pub struct ToolCatalogBuilder {
    settings: CatalogSettings,
    validate: bool,
    skip_schema_validation: bool,
    validator: Box<dyn ToolValidator>,
    artifact_root: PathBuf,
}

impl Default for ToolCatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolCatalogBuilder {
    pub fn new() -> Self {
        Self {
            settings: CatalogSettings::default(),
            validate: false,
            skip_schema_validation: false,
            validator: Box::new(StructuralValidator::new()),
            artifact_root: PathBuf::from("."),
        }
    }

    pub fn settings(mut self, settings: CatalogSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Run the validator on every discovered tool.
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Skip `$schemas` processing during validation.
    pub fn skip_schema_validation(mut self, skip: bool) -> Self {
        self.skip_schema_validation = skip;
        self
    }

    pub fn validator(mut self, validator: impl ToolValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    /// Directory under which the tool schema directory is created.
    pub fn artifact_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.artifact_root = root.into();
        self
    }

    /// Scan every pair in order and build the catalog.
    ///
    /// Fails on the first unloadable or invalid definition. Directories with
    /// no definitions produce a [`Diagnostic::NoMatches`] instead.
    pub fn build(&self, pairs: &[NamespaceDirPair], sink: &mut dyn DiagnosticSink) -> Result<ToolCatalog> {
        let schema_dir = NormalizedPath::new(&self.artifact_root).join(&self.settings.tool_schema_dir);
        io::ensure_dir(&schema_dir)?;

        let mut catalog = ToolCatalog::default();
        for pair in pairs {
            self.scan(pair, &mut catalog, sink)?;
        }

        tracing::info!(tools = catalog.len(), pairs = pairs.len(), "Built tool catalog");
        Ok(catalog)
    }

    fn scan(
        &self,
        pair: &NamespaceDirPair,
        catalog: &mut ToolCatalog,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<()> {
        let paths = find_by_suffix(&pair.directory, &self.settings.tool_suffix);
        if paths.is_empty() {
            sink.emit(Diagnostic::no_matches(DefinitionKind::Tool, pair, &self.settings.tool_suffix));
            return Ok(());
        }

        for found in paths {
            // Markers apply to the path below the registry directory as written
            let discovered = NormalizedPath::new(&found);
            if self.is_deprecated(&discovered) {
                tracing::debug!(path = %discovered, "Skipping deprecated tool");
                continue;
            }
            let Some(stem) = discovered.file_stem().map(str::to_string) else {
                continue;
            };

            let path = absolutize(&found)?;
            let mut definition = load_definition(&path)?;

            if self.validate {
                self.validator.validate(&path, self.skip_schema_validation, sink)?;
            }

            inject_streams(&mut definition, &stem);

            let id = StepId::new(stem, pair.namespace.clone());
            tracing::debug!(%id, path = %path.display(), "Cataloged tool");
            if let Some(previous) = catalog.insert(id.clone(), Tool { path, definition }) {
                tracing::debug!(%id, replaced = %previous.path.display(), "Tool overwritten by later directory");
            }
        }
        Ok(())
    }

    fn is_deprecated(&self, path: &NormalizedPath) -> bool {
        self.settings
            .deprecated_markers
            .iter()
            .any(|marker| path.contains(marker))
    }
}

/// Load a tool definition. Definitions are YAML documents whose root must be
/// a mapping.
fn load_definition(path: &Path) -> Result<Definition> {
    let normalized = NormalizedPath::new(path);
    let load_error = |message: String| Error::DefinitionLoad {
        path: path.to_path_buf(),
        message,
    };

    let content = io::read_text(&normalized).map_err(|e| load_error(e.to_string()))?;
    let document: Value = DocumentStore::new()
        .parse(&normalized, DocumentFormat::Yaml, &content)
        .map_err(|e| load_error(e.to_string()))?;

    match document {
        Value::Object(definition) => Ok(definition),
        other => Err(load_error(format!(
            "expected a mapping at the document root, found {}",
            value_kind(&other)
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "an empty document",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

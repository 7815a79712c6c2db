//! Tool definition validation
//!
//! Validation runs in two passes. The resolution pass loads and preprocesses
//! the document. The construction pass checks that a process object could
//! actually be built from it. Some documents survive resolution and only
//! fail construction, so both passes always run. The first failure aborts
//! the catalog build.

use std::fmt;
use std::path::Path;
use std::process::Command;

use serde_json::Value;
use stepcat_fs::{DocumentFormat, DocumentStore, NormalizedPath, io};

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::noise::NoiseFilter;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationPass {
    /// Document resolution and preprocessing
    Resolution,
    /// Stricter process-object construction
    Construction,
}

impl ValidationPass {
    pub const ALL: [ValidationPass; 2] = [ValidationPass::Resolution, ValidationPass::Construction];
}

impl fmt::Display for ValidationPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationPass::Resolution => write!(f, "resolution"),
            ValidationPass::Construction => write!(f, "construction"),
        }
    }
}

/// A validator for tool definition files.
pub trait ToolValidator {
    /// Run one pass over the file at `path`.
    ///
    /// `skip_schemas` skips processing of `$schemas` references, which is
    /// much faster but less thorough.
    fn check(
        &self,
        pass: ValidationPass,
        path: &Path,
        skip_schemas: bool,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<()>;

    /// Run every pass in order, stopping at the first failure.
    fn validate(&self, path: &Path, skip_schemas: bool, sink: &mut dyn DiagnosticSink) -> Result<()> {
        for pass in ValidationPass::ALL {
            self.check(pass, path, skip_schemas, sink)?;
        }
        Ok(())
    }
}

/// Process classes a definition may declare
const KNOWN_CLASSES: &[&str] = &["CommandLineTool", "ExpressionTool", "Workflow", "Operation"];

/// In-process structural checks of CWL documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralValidator;

impl StructuralValidator {
    pub fn new() -> Self {
        Self
    }

    fn load(&self, path: &Path, pass: ValidationPass) -> Result<serde_json::Map<String, Value>> {
        let normalized = NormalizedPath::new(path);
        let fail = |message: String| Error::validation(path, pass, message);

        let content = io::read_text(&normalized).map_err(|e| fail(e.to_string()))?;
        let document: Value = DocumentStore::new()
            .parse(&normalized, DocumentFormat::Yaml, &content)
            .map_err(|e| fail(e.to_string()))?;
        match document {
            Value::Object(map) => Ok(map),
            _ => Err(fail("document root is not a mapping".into())),
        }
    }

    fn resolve(&self, path: &Path, skip_schemas: bool) -> Result<()> {
        let pass = ValidationPass::Resolution;
        let fail = |message: String| Error::validation(path, pass, message);
        let document = self.load(path, pass)?;

        match document.get("cwlVersion") {
            Some(Value::String(version)) if version.starts_with("v1.") => {}
            Some(Value::String(version)) => return Err(fail(format!("unsupported cwlVersion {version:?}"))),
            Some(_) => return Err(fail("cwlVersion must be a string".into())),
            None => return Err(fail("missing cwlVersion".into())),
        }
        if !matches!(document.get("class"), Some(Value::String(_))) {
            return Err(fail("missing or non-string class".into()));
        }
        if let Some(namespaces) = document.get("$namespaces") {
            if !namespaces.is_object() {
                return Err(fail("$namespaces must be a mapping".into()));
            }
        }
        if !skip_schemas {
            if let Some(schemas) = document.get("$schemas") {
                let all_strings = schemas
                    .as_array()
                    .is_some_and(|items| items.iter().all(Value::is_string));
                if !all_strings {
                    return Err(fail("$schemas must be a list of strings".into()));
                }
            }
        }
        Ok(())
    }

    fn construct(&self, path: &Path) -> Result<()> {
        let pass = ValidationPass::Construction;
        let fail = |message: String| Error::validation(path, pass, message);
        let document = self.load(path, pass)?;

        let class = document.get("class").and_then(Value::as_str).unwrap_or_default();
        if !KNOWN_CLASSES.contains(&class) {
            return Err(fail(format!("unknown process class {class:?}")));
        }

        for field in ["inputs", "outputs"] {
            let parameters = document
                .get(field)
                .ok_or_else(|| fail(format!("missing {field}")))?;
            check_parameters(field, parameters).map_err(fail)?;
        }
        for field in ["requirements", "hints"] {
            if let Some(entries) = document.get(field) {
                check_requirements(field, entries).map_err(fail)?;
            }
        }

        match class {
            "CommandLineTool"
                if !document.contains_key("baseCommand") && !document.contains_key("arguments") =>
            {
                Err(fail("CommandLineTool needs baseCommand or arguments".into()))
            }
            "ExpressionTool" if !matches!(document.get("expression"), Some(Value::String(_))) => {
                Err(fail("ExpressionTool needs a string expression".into()))
            }
            "Workflow" if !document.contains_key("steps") => Err(fail("Workflow needs steps".into())),
            _ => Ok(()),
        }
    }
}

impl ToolValidator for StructuralValidator {
    fn check(
        &self,
        pass: ValidationPass,
        path: &Path,
        skip_schemas: bool,
        _sink: &mut dyn DiagnosticSink,
    ) -> Result<()> {
        match pass {
            ValidationPass::Resolution => self.resolve(path, skip_schemas),
            ValidationPass::Construction => self.construct(path),
        }
    }
}

/// Inputs and outputs are either a mapping of id to type/parameter, or a
/// list of parameters each carrying an `id`.
fn check_parameters(field: &str, parameters: &Value) -> std::result::Result<(), String> {
    match parameters {
        Value::Object(entries) => {
            for (id, parameter) in entries {
                if !(parameter.is_string() || parameter.is_object() || parameter.is_array()) {
                    return Err(format!("{field}.{id} must be a type or a parameter mapping"));
                }
            }
            Ok(())
        }
        Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                if !matches!(item.get("id"), Some(Value::String(_))) {
                    return Err(format!("{field}[{idx}] must be a mapping with a string id"));
                }
            }
            Ok(())
        }
        _ => Err(format!("{field} must be a mapping or a list")),
    }
}

fn check_requirements(field: &str, entries: &Value) -> std::result::Result<(), String> {
    match entries {
        Value::Object(_) => Ok(()),
        Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                if !matches!(item.get("class"), Some(Value::String(_))) {
                    return Err(format!("{field}[{idx}] must be a mapping with a string class"));
                }
            }
            Ok(())
        }
        _ => Err(format!("{field} must be a mapping or a list")),
    }
}

/// Validation by an external program, `cwltool` by default.
///
/// The resolution pass runs `<program> --print-pre <path>` and the
/// construction pass runs `<program> --validate <path>`, each with
/// `--skip-schemas` when requested. Standard error is passed through the
/// [`NoiseFilter`]. The remaining lines are emitted as
/// [`Diagnostic::ValidatorOutput`] and become the error message when the
/// program exits unsuccessfully.
#[derive(Debug, Clone)]
pub struct ExternalValidator {
    program: String,
    noise: NoiseFilter,
}

impl ExternalValidator {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            noise: NoiseFilter::new(),
        }
    }

    pub fn cwltool() -> Self {
        Self::new("cwltool").with_noise_filter(NoiseFilter::cwltool_defaults())
    }

    pub fn with_noise_filter(mut self, noise: NoiseFilter) -> Self {
        self.noise = noise;
        self
    }

    fn pass_flag(pass: ValidationPass) -> &'static str {
        match pass {
            ValidationPass::Resolution => "--print-pre",
            ValidationPass::Construction => "--validate",
        }
    }
}

impl ToolValidator for ExternalValidator {
    fn check(
        &self,
        pass: ValidationPass,
        path: &Path,
        skip_schemas: bool,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<()> {
        let mut command = Command::new(&self.program);
        command.arg(Self::pass_flag(pass));
        if skip_schemas {
            command.arg("--skip-schemas");
        }
        command.arg(path);

        tracing::debug!(program = %self.program, %pass, path = %path.display(), "Running validator");
        let output = command.output().map_err(|source| Error::ValidatorUnavailable {
            program: self.program.clone(),
            source,
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        let kept: Vec<&str> = self.noise.filter(&stderr).collect();
        for line in &kept {
            sink.emit(Diagnostic::ValidatorOutput {
                path: path.to_path_buf(),
                line: line.to_string(),
            });
        }

        if output.status.success() {
            return Ok(());
        }
        let message = if kept.is_empty() {
            format!("{} exited with {}", self.program, output.status)
        } else {
            kept.join("\n")
        };
        Err(Error::validation(path, pass, message))
    }
}

//! Non-fatal diagnostics emitted while building catalogs
//!
//! Builders never write to a global logger directly for conditions a caller
//! may want to act on. They hand a [`Diagnostic`] to the [`DiagnosticSink`]
//! the caller passed in. [`Diagnostics`] collects them for inspection and
//! [`TracingSink`] forwards them to `tracing`.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use stepcat_fs::search_pattern;
use stepcat_meta::NamespaceDirPair;

/// Which kind of definition a builder was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DefinitionKind {
    Tool,
    Workflow,
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionKind::Tool => write!(f, "tool"),
            DefinitionKind::Workflow => write!(f, "workflow"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A registry directory contained no matching files. Usually the process
    /// runs from the wrong working directory.
    NoMatches {
        kind: DefinitionKind,
        namespace: String,
        directory: PathBuf,
        /// Absolute glob pattern that was searched
        pattern: String,
    },

    /// A line of output from an external validator that is not known noise
    ValidatorOutput { path: PathBuf, line: String },
}

impl Diagnostic {
    pub fn no_matches(kind: DefinitionKind, pair: &NamespaceDirPair, suffix: &str) -> Self {
        Self::NoMatches {
            kind,
            namespace: pair.namespace.clone(),
            directory: pair.directory.clone(),
            pattern: search_pattern(&pair.directory, suffix),
        }
    }

    /// Whether the diagnostic should be shown to a user by default.
    pub fn is_warning(&self) -> bool {
        matches!(self, Diagnostic::NoMatches { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NoMatches {
                kind,
                namespace,
                directory,
                pattern,
            } => write!(
                f,
                "No {kind} files found in {} (namespace '{namespace}', searched {pattern}). \
                 This almost certainly means you are not in the correct working directory.",
                directory.display()
            ),
            Diagnostic::ValidatorOutput { path, line } => {
                write!(f, "{}: {line}", path.display())
            }
        }
    }
}

/// Receiver for diagnostics produced during a build.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics in emission order.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(|d| d.is_warning())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl DiagnosticSink for Diagnostics {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }
}

/// Forwards diagnostics to `tracing`: warnings at `warn`, the rest at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_warning() {
            tracing::warn!("{diagnostic}");
        } else {
            tracing::debug!("{diagnostic}");
        }
    }
}

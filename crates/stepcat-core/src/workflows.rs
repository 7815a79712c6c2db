//! Workflow catalog construction
//!
//! Workflows sharing a stem within one namespace are resolved by
//! [`resolve_collision`]: the shorter path wins, so a shallow, general
//! definition takes precedence over a deeply nested, specific one.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use stepcat_fs::{NormalizedPath, absolutize, find_by_suffix, io};
use stepcat_meta::{CatalogSettings, NamespaceDirPair};

use crate::Result;
use crate::diagnostics::{DefinitionKind, Diagnostic, DiagnosticSink};
use crate::model::WorkflowCatalog;

/// Outcome of [`resolve_collision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Existing,
    Candidate,
}

/// Decide which of two paths registered under the same stem is kept.
///
/// The candidate wins when its path is no longer than the existing one. Ties
/// go to the candidate, which is always the later-processed entry.
pub fn resolve_collision(existing: &Path, candidate: &Path) -> Winner {
    if path_len(candidate) <= path_len(existing) {
        Winner::Candidate
    } else {
        Winner::Existing
    }
}

fn path_len(path: &Path) -> usize {
    path.as_os_str().len()
}

/// Insert `path` under `stem`, keeping whichever path [`resolve_collision`] picks.
fn offer(entries: &mut BTreeMap<String, PathBuf>, stem: String, path: PathBuf) {
    match entries.get(&stem) {
        Some(existing) if resolve_collision(existing, &path) == Winner::Existing => {
            tracing::debug!(%stem, kept = %existing.display(), dropped = %path.display(), "Workflow shadowed");
        }
        Some(existing) => {
            tracing::debug!(%stem, kept = %path.display(), dropped = %existing.display(), "Workflow shadowed");
            entries.insert(stem, path);
        }
        None => {
            entries.insert(stem, path);
        }
    }
}

/// Builds a [`WorkflowCatalog`] from registry pairs.
#[derive(Debug, Clone)]
pub struct WorkflowCatalogBuilder {
    settings: CatalogSettings,
    artifact_root: PathBuf,
}

impl Default for WorkflowCatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowCatalogBuilder {
    pub fn new() -> Self {
        Self {
            settings: CatalogSettings::default(),
            artifact_root: PathBuf::from("."),
        }
    }

    pub fn settings(mut self, settings: CatalogSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Directory under which the workflow schema directory is created.
    pub fn artifact_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.artifact_root = root.into();
        self
    }

    /// Scan every pair in order and build the catalog.
    ///
    /// Pairs sharing a namespace are merged by key union. A stem present in
    /// several of them keeps the entry of the later pair.
    pub fn build(
        &self,
        pairs: &[NamespaceDirPair],
        sink: &mut dyn DiagnosticSink,
    ) -> Result<WorkflowCatalog> {
        let schema_dir =
            NormalizedPath::new(&self.artifact_root).join(&self.settings.workflow_schema_dir);
        io::ensure_dir(&schema_dir)?;

        let mut catalog = WorkflowCatalog::default();
        for pair in pairs {
            let entries = self.scan(pair, sink)?;
            catalog.namespace_mut(&pair.namespace).extend(entries);
        }

        tracing::info!(workflows = catalog.len(), pairs = pairs.len(), "Built workflow catalog");
        Ok(catalog)
    }

    /// Stem to path map for one pair.
    fn scan(
        &self,
        pair: &NamespaceDirPair,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<BTreeMap<String, PathBuf>> {
        let found = find_by_suffix(&pair.directory, &self.settings.workflow_suffix);
        if found.is_empty() {
            sink.emit(Diagnostic::no_matches(
                DefinitionKind::Workflow,
                pair,
                &self.settings.workflow_suffix,
            ));
        }

        let mut paths = Vec::with_capacity(found.len());
        for found in found {
            // Markers apply to the path below the registry directory as written
            let discovered = NormalizedPath::new(&found);
            if discovered.contains(&self.settings.generated_marker) {
                tracing::debug!(path = %discovered, "Skipping generated inputs file");
                continue;
            }
            let Some(stem) = discovered.file_stem().map(str::to_string) else {
                continue;
            };
            paths.push((stem, absolutize(&found)?));
        }

        // Longest first, so shorter paths are offered last
        paths.sort_by(|(_, a), (_, b)| path_len(b).cmp(&path_len(a)).then_with(|| a.cmp(b)));

        let mut entries = BTreeMap::new();
        for (stem, path) in paths {
            offer(&mut entries, stem, path);
        }
        Ok(entries)
    }
}

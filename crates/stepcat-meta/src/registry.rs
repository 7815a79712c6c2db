//! Namespace registry files
//!
//! A registry is plain text with one `<namespace> <directory>` pair per
//! non-empty line:
//!
//! ```text
//! global   cwl_adapters
//! biobb    ../biobb_adapters/biobb_adapters
//! global   extra_adapters
//! ```
//!
//! Order is significant and a namespace may appear on several lines; the
//! catalog builders merge those lines rather than replacing earlier ones.

use std::path::{Path, PathBuf};

use stepcat_fs::{NormalizedPath, io};

use crate::{Error, Result};

/// One registry line: a namespace and the directory tree it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDirPair {
    pub namespace: String,
    /// Directory as written in the registry; relative paths resolve against
    /// the working directory at discovery time.
    pub directory: PathBuf,
}

impl NamespaceDirPair {
    pub fn new(namespace: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            namespace: namespace.into(),
            directory: directory.into(),
        }
    }
}

/// Read and parse the registry file at `path`.
pub fn read_registry(path: impl AsRef<Path>) -> Result<Vec<NamespaceDirPair>> {
    let path = path.as_ref();
    let content = io::read_text(&NormalizedPath::new(path))?;
    let pairs = parse_registry(path, &content)?;
    tracing::debug!(registry = %path.display(), entries = pairs.len(), "Loaded registry");
    Ok(pairs)
}

/// Parse registry `content`. `path` is only used for error reporting.
///
/// Blank lines are skipped. Every other line must split on whitespace into
/// exactly two fields. Pairs are returned in file order without
/// deduplication.
pub fn parse_registry(path: impl AsRef<Path>, content: &str) -> Result<Vec<NamespaceDirPair>> {
    let mut pairs = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => continue,
            [namespace, directory] => pairs.push(NamespaceDirPair::new(*namespace, *directory)),
            _ => {
                return Err(Error::MalformedRegistry {
                    path: path.as_ref().to_path_buf(),
                    line: idx + 1,
                    content: line.to_string(),
                });
            }
        }
    }

    Ok(pairs)
}

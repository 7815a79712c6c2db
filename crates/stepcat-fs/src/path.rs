//! Normalized path handling for cross-platform marker matching

use std::path::{Component, Path, PathBuf};

use crate::{Error, Result};

/// A path normalized to use forward slashes internally.
///
/// Substring markers (deprecated packages, generated files) are matched
/// against this form so the same marker works on every platform. Conversion
/// to a native `PathBuf` happens only at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: path_str.replace('\\', "/"),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let inner = if self.inner.is_empty() || self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}/{}", self.inner, segment)
        };
        Self { inner }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// File name without its final extension.
    ///
    /// A leading dot is part of the stem, so `.hidden` has stem `.hidden`.
    pub fn file_stem(&self) -> Option<&str> {
        let name = self.file_name()?;
        match name.rfind('.') {
            Some(idx) if idx > 0 => Some(&name[..idx]),
            _ => Some(name),
        }
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 { None } else { Some(&name[idx + 1..]) }
        })
    }

    /// Whether `marker` occurs anywhere in the normalized path text.
    pub fn contains(&self, marker: &str) -> bool {
        !marker.is_empty() && self.inner.contains(marker)
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

/// Make `path` absolute against the current working directory.
///
/// Purely lexical: `.` and `..` components are folded away but symlinks are
/// not resolved, so a cataloged path keeps pointing at the name the user
/// configured.
pub fn absolutize(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|e| Error::io(path, e))?;
        cwd.join(path)
    };
    Ok(fold_components(&joined))
}

fn fold_components(path: &Path) -> PathBuf {
    let mut folded = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `..` at the root stays at the root
            Component::ParentDir => {
                folded.pop();
            }
            other => folded.push(other.as_os_str()),
        }
    }
    folded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stem_strips_last_extension_only() {
        let path = NormalizedPath::new("adapters/align.reads.cwl");
        assert_eq!(path.file_stem(), Some("align.reads"));
        assert_eq!(path.extension(), Some("cwl"));
    }

    #[test]
    fn test_file_stem_without_extension() {
        let path = NormalizedPath::new("adapters/README");
        assert_eq!(path.file_stem(), Some("README"));
        assert_eq!(path.extension(), None);
    }

    #[test]
    fn test_contains_ignores_empty_marker() {
        let path = NormalizedPath::new("a/b/c.yml");
        assert!(!path.contains(""));
        assert!(path.contains("b/c"));
    }

    #[cfg(unix)]
    #[test]
    fn test_absolutize_folds_dot_segments() {
        let abs = absolutize("/data/tools/./nested/../align.cwl").unwrap();
        assert_eq!(abs, PathBuf::from("/data/tools/align.cwl"));
    }

    #[cfg(unix)]
    #[test]
    fn test_absolutize_parent_of_root_is_root() {
        let abs = absolutize("/../../x.yml").unwrap();
        assert_eq!(abs, PathBuf::from("/x.yml"));
    }

    #[test]
    fn test_absolutize_relative_uses_cwd() {
        let cwd = std::env::current_dir().unwrap();
        let abs = absolutize("some/file.yml").unwrap();
        assert_eq!(abs, cwd.join("some").join("file.yml"));
    }
}

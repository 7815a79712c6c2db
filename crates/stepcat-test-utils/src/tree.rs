//! [`TestTree`] builder for catalog test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree with helpers for laying out definition files
/// and registry files.
///
/// # Example
///
/// ```rust,no_run
/// use stepcat_test_utils::TestTree;
/// use stepcat_test_utils::fixtures::COMMAND_LINE_TOOL;
///
/// let tree = TestTree::new();
/// tree.write("adapters/align.cwl", COMMAND_LINE_TOOL);
/// let registry = tree.registry("tool_dirs.txt", &[("global", "adapters")]);
/// tree.assert_file_exists("tool_dirs.txt");
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` inside the tree.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `content` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Create an (empty) directory at `rel`.
    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Write a registry file at `rel` whose directories are absolute paths
    /// inside the tree.
    pub fn registry(&self, rel: &str, entries: &[(&str, &str)]) -> PathBuf {
        let content: String = entries
            .iter()
            .map(|(namespace, dir)| format!("{} {}\n", namespace, self.path(dir).display()))
            .collect();
        self.write(rel, &content)
    }

    /// Assert that `rel` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            full_path.exists(),
            "Expected path to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `rel` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            !full_path.exists(),
            "Expected path NOT to exist: {}",
            full_path.display()
        );
    }
}

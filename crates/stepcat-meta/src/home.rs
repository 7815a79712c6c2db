//! Per-user configuration directory
//!
//! Layout under the user's home directory:
//!
//! ```text
//! ~/stepcat/
//!   tool_dirs.txt       namespace registry for tool definitions
//!   workflow_dirs.txt   namespace registry for workflow definitions
//!   config.toml         optional CatalogSettings
//! ```

use std::path::{Path, PathBuf};

use stepcat_fs::{NormalizedPath, io};

use crate::registry::{NamespaceDirPair, read_registry};
use crate::settings::CatalogSettings;
use crate::{Error, Result};

/// Name of the configuration directory inside the home directory
const CONFIG_DIR: &str = "stepcat";
const SETTINGS_FILE: &str = "config.toml";

/// Which registry file to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryKind {
    Tools,
    Workflows,
}

impl RegistryKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Tools => "tool_dirs.txt",
            Self::Workflows => "workflow_dirs.txt",
        }
    }

    /// Registry content written when the file is first seeded.
    pub fn default_content(&self) -> &'static str {
        match self {
            Self::Tools => "global cwl_adapters\n",
            Self::Workflows => "global workflows\n",
        }
    }
}

/// Handle on the per-user configuration directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigHome {
    dir: PathBuf,
}

impl ConfigHome {
    /// Configuration directory beneath an explicit home directory.
    pub fn new(home: impl AsRef<Path>) -> Self {
        Self {
            dir: home.as_ref().join(CONFIG_DIR),
        }
    }

    /// Configuration directory beneath the current user's home directory.
    pub fn from_user_home() -> Result<Self> {
        dirs::home_dir().map(Self::new).ok_or(Error::HomeNotFound)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn registry_path(&self, kind: RegistryKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    /// Create the configuration directory and seed any missing registry file.
    ///
    /// Existing files are never touched. Returns the paths that were created.
    pub fn ensure_config_files(&self) -> Result<Vec<PathBuf>> {
        io::ensure_dir(&NormalizedPath::new(&self.dir))?;

        let mut created = Vec::new();
        for kind in [RegistryKind::Tools, RegistryKind::Workflows] {
            let path = self.registry_path(kind);
            if path.exists() {
                continue;
            }
            io::write_text(&NormalizedPath::new(&path), kind.default_content())?;
            tracing::info!(path = %path.display(), "Seeded registry file");
            created.push(path);
        }

        Ok(created)
    }

    /// Read the registry of `kind`.
    pub fn read_registry(&self, kind: RegistryKind) -> Result<Vec<NamespaceDirPair>> {
        read_registry(self.registry_path(kind))
    }

    /// Load `config.toml`, or defaults when it is absent.
    pub fn settings(&self) -> Result<CatalogSettings> {
        CatalogSettings::load_or_default(self.settings_path())
    }
}

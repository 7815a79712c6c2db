//! Registry files, catalog settings and per-user configuration for stepcat.
//!
//! A registry file associates namespaces with directory trees. The per-user
//! configuration directory holds one registry for tool definitions, one for
//! workflow definitions, and optional [`CatalogSettings`].

pub mod error;
pub mod home;
pub mod registry;
pub mod settings;

pub use error::{Error, Result};
pub use home::{ConfigHome, RegistryKind};
pub use registry::{NamespaceDirPair, parse_registry, read_registry};
pub use settings::CatalogSettings;

//! Filesystem layer for stepcat
//!
//! Provides normalized path handling, atomic I/O, format-agnostic document
//! loading and recursive discovery of definition files.

pub mod discovery;
pub mod document;
pub mod error;
pub mod io;
pub mod path;

pub use discovery::{find_by_suffix, search_pattern};
pub use document::{DocumentFormat, DocumentStore};
pub use error::{Error, Result};
pub use path::{NormalizedPath, absolutize};

//! JSON Schema sanitization for stepcat.
//!
//! Generated schemas describe optional values as `anyOf` alternatives, one of
//! which is `{"type": ["null"]}`. Downstream consumers reject those branches,
//! so [`sanitize`] removes them.

pub mod error;
pub mod sanitize;

pub use error::{Error, Result};
pub use sanitize::{is_null_only, sanitize, sanitize_file};

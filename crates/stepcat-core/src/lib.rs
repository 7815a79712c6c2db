//! Tool and workflow catalog builders for stepcat.
//!
//! Given the `(namespace, directory)` pairs of a registry, the builders scan
//! each directory tree for definition files and produce lookup tables a
//! workflow compiler uses to resolve step names:
//!
//! - [`ToolCatalogBuilder`] produces a [`ToolCatalog`] keyed by [`StepId`]
//! - [`WorkflowCatalogBuilder`] produces a [`WorkflowCatalog`] of
//!   `namespace -> stem -> path`
//!
//! Non-fatal findings are reported through a [`DiagnosticSink`] supplied by
//! the caller.

pub mod diagnostics;
pub mod error;
pub mod model;
pub mod noise;
pub mod tools;
pub mod validation;
pub mod workflows;

pub use diagnostics::{DefinitionKind, Diagnostic, DiagnosticSink, Diagnostics, TracingSink};
pub use error::{Error, Result};
pub use model::{Definition, StepId, Tool, ToolCatalog, WorkflowCatalog};
pub use noise::NoiseFilter;
pub use tools::{ToolCatalogBuilder, inject_streams};
pub use validation::{ExternalValidator, StructuralValidator, ToolValidator, ValidationPass};
pub use workflows::{Winner, WorkflowCatalogBuilder, resolve_collision};

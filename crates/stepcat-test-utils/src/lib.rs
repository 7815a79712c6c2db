//! Shared test utilities for the stepcat workspace.
//!
//! This crate provides fixture builders so crate test suites do not each
//! hand-roll temporary definition trees. It is a dev-dependency only.
//!
//! # Modules
//!
//! - [`tree`]: [`tree::TestTree`] builder for definition directories and registries
//! - [`fixtures`]: canned CWL and workflow documents

pub mod fixtures;
pub mod tree;

pub use tree::TestTree;

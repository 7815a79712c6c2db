//! Command implementations for stepcat-cli

pub mod init;
pub mod schema;
pub mod tools;
pub mod workflows;

pub use init::run_init;
pub use schema::run_sanitize_schema;
pub use tools::{ToolOptions, run_tools};
pub use workflows::run_workflows;

use colored::Colorize;
use stepcat_core::{Diagnostic, DiagnosticSink, TracingSink};

/// Prints warnings to stderr as they happen. Everything else goes to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_warning() {
            eprintln!("{} {}", "warning:".yellow().bold(), diagnostic);
        } else {
            TracingSink.emit(diagnostic);
        }
    }
}

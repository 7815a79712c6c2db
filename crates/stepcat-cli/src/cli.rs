//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// stepcat - Catalog CWL tools and workflows across registered directories
#[derive(Parser, Debug)]
#[command(name = "stepcat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory containing the `stepcat/` configuration folder
    /// (defaults to the user's home directory)
    #[arg(long, global = true, env = "STEPCAT_HOME")]
    pub home: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create missing registry files in the configuration directory
    Init,

    /// Build and list the tool catalog
    ///
    /// Directories come from `stepcat/tool_dirs.txt`. Relative directories
    /// are resolved against the current working directory.
    Tools {
        /// Validate every discovered tool
        #[arg(long)]
        validate: bool,

        /// Skip `$schemas` processing during validation
        #[arg(long, requires = "validate")]
        skip_schemas: bool,

        /// Validator to run with --validate
        #[arg(long, value_enum, default_value_t = ValidatorKind::Structural)]
        validator: ValidatorKind,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Build and list the workflow catalog
    ///
    /// Directories come from `stepcat/workflow_dirs.txt`.
    Workflows {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Remove null-only branches from a JSON schema
    SanitizeSchema {
        /// Schema to read
        #[arg(long)]
        input: PathBuf,

        /// Where to write the sanitized schema
        #[arg(long)]
        output: PathBuf,
    },
}

/// Tool validator implementations
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorKind {
    /// In-process structural checks
    Structural,
    /// The external `cwltool` program
    Cwltool,
}

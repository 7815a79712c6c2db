//! stepcat CLI
//!
//! Builds the tool and workflow catalogs from the per-user registries and
//! sanitizes generated schemas.

mod cli;
mod commands;
mod error;
mod logging;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use stepcat_meta::ConfigHome;

use cli::{Cli, Commands, ValidatorKind};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{} could not initialize logging: {}", "warning:".yellow().bold(), e);
    }
    if cli.verbose {
        tracing::debug!("Verbose mode enabled");
    }

    let Some(command) = cli.command else {
        println!("{} CWL step catalog", "stepcat".green().bold());
        println!();
        println!("Run {} for available commands.", "stepcat --help".cyan());
        return Ok(());
    };

    execute_command(command, cli.home)
}

fn execute_command(command: Commands, home: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Init => commands::run_init(&config_home(home)?),
        Commands::Tools {
            validate,
            skip_schemas,
            validator,
            json,
        } => commands::run_tools(
            &config_home(home)?,
            &commands::ToolOptions {
                validate,
                skip_schemas,
                external: validator == ValidatorKind::Cwltool,
                json,
            },
        ),
        Commands::Workflows { json } => commands::run_workflows(&config_home(home)?, json),
        Commands::SanitizeSchema { input, output } => commands::run_sanitize_schema(&input, &output),
    }
}

fn config_home(home: Option<PathBuf>) -> Result<ConfigHome> {
    match home {
        Some(dir) => Ok(ConfigHome::new(dir)),
        None => Ok(ConfigHome::from_user_home()?),
    }
}

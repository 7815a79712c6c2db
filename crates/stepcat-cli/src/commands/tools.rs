//! Tools command: build and print the tool catalog

use colored::Colorize;
use stepcat_core::{ExternalValidator, ToolCatalogBuilder};
use stepcat_meta::{ConfigHome, RegistryKind};

use super::ConsoleSink;
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct ToolOptions {
    pub validate: bool,
    pub skip_schemas: bool,
    /// Use `cwltool` instead of the structural validator
    pub external: bool,
    pub json: bool,
}

pub fn run_tools(home: &ConfigHome, options: &ToolOptions) -> Result<()> {
    home.ensure_config_files()?;
    let settings = home.settings()?;
    let pairs = home.read_registry(RegistryKind::Tools)?;

    let mut builder = ToolCatalogBuilder::new()
        .settings(settings)
        .validate(options.validate)
        .skip_schema_validation(options.skip_schemas);
    if options.external {
        builder = builder.validator(ExternalValidator::cwltool());
    }

    let mut sink = ConsoleSink;
    let catalog = builder.build(&pairs, &mut sink)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    for (id, tool) in catalog.iter() {
        println!("  {:<40} {}", id.to_string().green(), tool.path.display().to_string().dimmed());
    }
    println!();
    println!(
        "{} {} tools in {} namespaces.",
        "Total:".dimmed(),
        catalog.len(),
        catalog.namespaces().len()
    );
    Ok(())
}

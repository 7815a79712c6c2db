//! Workflows command: build and print the workflow catalog

use colored::Colorize;
use stepcat_core::WorkflowCatalogBuilder;
use stepcat_meta::{ConfigHome, RegistryKind};

use super::ConsoleSink;
use crate::error::Result;

pub fn run_workflows(home: &ConfigHome, json: bool) -> Result<()> {
    home.ensure_config_files()?;
    let settings = home.settings()?;
    let pairs = home.read_registry(RegistryKind::Workflows)?;

    let mut sink = ConsoleSink;
    let catalog = WorkflowCatalogBuilder::new()
        .settings(settings)
        .build(&pairs, &mut sink)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    for (namespace, entries) in catalog.iter() {
        if entries.is_empty() {
            continue;
        }
        println!("{}:", namespace.cyan().bold());
        for (stem, path) in entries {
            println!("  {:<32} {}", stem.green(), path.display().to_string().dimmed());
        }
        println!();
    }
    println!("{} {} workflows.", "Total:".dimmed(), catalog.len());
    Ok(())
}

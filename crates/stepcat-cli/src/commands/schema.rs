//! Sanitize-schema command

use std::path::Path;

use colored::Colorize;

use crate::error::Result;

pub fn run_sanitize_schema(input: &Path, output: &Path) -> Result<()> {
    stepcat_schema::sanitize_file(input, output)?;
    println!(
        "{} {} -> {}",
        "Sanitized".green().bold(),
        input.display(),
        output.display()
    );
    Ok(())
}

//! Init command: seed the per-user configuration

use colored::Colorize;
use stepcat_meta::ConfigHome;

use crate::error::Result;

pub fn run_init(home: &ConfigHome) -> Result<()> {
    let created = home.ensure_config_files()?;

    if created.is_empty() {
        println!(
            "{} Configuration already present in {}",
            "OK".green().bold(),
            home.dir().display()
        );
        return Ok(());
    }

    for path in &created {
        println!("{} {}", "Created".green().bold(), path.display());
    }
    Ok(())
}

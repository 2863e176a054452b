use crate::config::{default_config_template, CONFIG_FILE_NAME};
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Write a default `.gridmap.toml` in the current directory.
pub fn init_config(force: bool) -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);

    if path.exists() && !force {
        bail!("{CONFIG_FILE_NAME} already exists (use --force to overwrite)");
    }

    std::fs::write(path, default_config_template())
        .with_context(|| format!("Failed to write {CONFIG_FILE_NAME}"))?;

    println!("Created {CONFIG_FILE_NAME}");
    Ok(())
}

//! Settings file creation for `dashchart init-config`.

use anyhow::{bail, Context, Result};
use dashchart_core::ChartSettings;
use std::fs;
use std::path::Path;

/// Write the commented default settings file to `path`.
pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Cannot write settings: `{}` already exists (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create `{}`", parent.display()))?;
    }

    fs::write(path, ChartSettings::default_file_contents())
        .with_context(|| format!("Failed to write `{}`", path.display()))?;

    println!("Created settings file `{}`", path.display());
    Ok(())
}

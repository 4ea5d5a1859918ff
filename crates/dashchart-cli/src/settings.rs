//! Settings file lookup for the CLI.

use anyhow::{bail, Context, Result};
use dashchart_core::ChartSettings;
use std::path::{Path, PathBuf};

/// Settings file name looked up in the working directory.
pub const LOCAL_SETTINGS_FILE: &str = "dashchart.toml";

/// Per-user settings file, `<config_dir>/dashchart/config.toml`.
pub fn user_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("dashchart").join("config.toml"))
}

/// Candidate files in lookup order, without the explicit `--config` path.
fn implicit_candidates(working_dir: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![working_dir.join(LOCAL_SETTINGS_FILE)];
    candidates.extend(user_settings_path());
    candidates
}

/// Load settings from `explicit`, or the first implicit candidate that
/// exists, or fall back to the defaults.
///
/// An explicit path that does not exist is an error.
pub fn load_settings(explicit: Option<&Path>, working_dir: &Path) -> Result<ChartSettings> {
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("Settings file `{}` does not exist", path.display());
        }
        return load_file(path);
    }

    for candidate in implicit_candidates(working_dir) {
        if candidate.is_file() {
            return load_file(&candidate);
        }
    }

    log::debug!("no settings file found, using defaults");
    Ok(ChartSettings::default())
}

fn load_file(path: &Path) -> Result<ChartSettings> {
    log::debug!("loading settings from {}", path.display());
    ChartSettings::load(path)
        .with_context(|| format!("Failed to load settings from `{}`", path.display()))
}

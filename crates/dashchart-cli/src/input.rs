//! Reading chart data from files or stdin.

use anyhow::{Context, Result};
use dashchart_core::{adapt, DataPoint, FieldMapping};
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read JSON from `path`, where `-` means stdin.
pub fn read_json(path: &Path) -> Result<Value> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read data from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read data file `{}`", path.display()))?
    };
    parse_json(&content).with_context(|| format!("Invalid JSON in `{}`", path.display()))
}

fn parse_json(content: &str) -> Result<Value> {
    Ok(serde_json::from_str(content)?)
}

/// Read and adapt chart data through `mapping`.
pub fn load_points(path: &Path, mapping: &FieldMapping) -> Result<Vec<DataPoint>> {
    let value = read_json(path)?;
    if !value.is_array() {
        log::warn!("data in `{}` is not a JSON array, rendering the empty state", path.display());
    }
    let points = adapt(&value, mapping);
    log::info!("loaded {} data points (fields {mapping})", points.len());
    Ok(points)
}

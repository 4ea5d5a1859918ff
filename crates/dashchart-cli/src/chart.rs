//! Shared chart options and the `render` and `geometry` commands.

use anyhow::{Context, Result};
use clap::Args;
use dashchart_core::{
    geometry, render, ChartGeometry, ChartKind, ChartSettings, DataPoint, FieldMapping,
    RenderConfig, SourceShape, SvgSurface,
};
use std::fs;
use std::path::{Path, PathBuf};

use crate::input;

/// Options shared by every command that draws a chart.
#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    /// JSON data file, or `-` for stdin
    pub data: PathBuf,

    /// Chart kind (line, bar, pie, doughnut)
    #[arg(short, long)]
    pub kind: ChartKind,

    /// Named record shape (points, weekly-activity, level-distribution, monthly-scores)
    #[arg(long, conflicts_with = "fields")]
    pub shape: Option<SourceShape>,

    /// Custom field mapping as `label:value[:color]`
    #[arg(long)]
    pub fields: Option<FieldMapping>,

    /// Surface width in logical pixels
    #[arg(long)]
    pub width: Option<f32>,

    /// Chart height in logical pixels
    #[arg(long)]
    pub height: Option<f32>,

    /// Chart title
    #[arg(long)]
    pub title: Option<String>,

    /// Hide the pie/doughnut legend
    #[arg(long)]
    pub no_legend: bool,

    /// Display pixel density for rendered output (the viewer follows the display)
    #[arg(long)]
    pub scale: Option<f32>,
}

impl ChartArgs {
    pub fn mapping(&self) -> FieldMapping {
        match (&self.fields, self.shape) {
            (Some(fields), _) => fields.clone(),
            (None, Some(shape)) => shape.mapping(),
            (None, None) => FieldMapping::identity(),
        }
    }

    /// Settings with command-line overrides applied.
    pub fn apply(&self, mut settings: ChartSettings) -> Result<ChartSettings> {
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(scale) = self.scale {
            settings.scale_factor = scale;
        }
        if let Some(title) = &self.title {
            settings.title = Some(title.clone());
        }
        if self.no_legend {
            settings.show_legend = false;
        }
        settings.validate().context("Invalid chart dimensions")?;
        Ok(settings)
    }

    /// Flags that have no effect in the viewer window.
    pub fn viewer_ignored_flags(&self) -> Vec<&'static str> {
        let mut ignored = Vec::new();
        if self.scale.is_some() {
            ignored.push("--scale");
        }
        ignored
    }

    pub fn load_points(&self) -> Result<Vec<DataPoint>> {
        input::load_points(&self.data, &self.mapping())
    }
}

/// Render `data` to an SVG document.
pub fn render_svg(data: &[DataPoint], config: &RenderConfig, settings: &ChartSettings) -> String {
    let mut surface = SvgSurface::new(settings.scale_factor);
    render(&mut surface, data, config, settings.width);
    surface.to_svg_string()
}

/// Geometry for `data` as pretty-printed JSON.
pub fn geometry_json(
    data: &[DataPoint],
    config: &RenderConfig,
    settings: &ChartSettings,
) -> Result<String> {
    let geometry: ChartGeometry = geometry::compute(data, config, settings.surface_size());
    serde_json::to_string_pretty(&geometry).context("Failed to serialize geometry")
}

/// Write `content` to `output`, or stdout when no path is given.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write `{}`", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

//! dashchart CLI - render dashboard chart data from the command line

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dashchart_core::{ChartSettings, DataPoint, RenderConfig};
use std::path::PathBuf;

mod chart;
mod init;
mod input;
mod settings;

use chart::ChartArgs;

#[derive(Parser)]
#[command(name = "dashchart")]
#[command(version = dashchart_core::VERSION)]
#[command(about = "Bar, line, pie and doughnut charts for dashboard data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (defaults to ./dashchart.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render chart data to an SVG document
    Render {
        #[command(flatten)]
        chart: ChartArgs,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the computed chart geometry as JSON
    Geometry {
        #[command(flatten)]
        chart: ChartArgs,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Open chart data in the interactive viewer
    View {
        #[command(flatten)]
        chart: ChartArgs,
    },

    /// Write a default settings file
    InitConfig {
        /// Destination (defaults to ./dashchart.toml)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Render { chart, output } => {
            let (data, config, settings) = prepare(&chart, cli.config)?;
            let svg = chart::render_svg(&data, &config, &settings);
            chart::write_output(&svg, output.as_deref())?;
        }

        Commands::Geometry { chart, output } => {
            let (data, config, settings) = prepare(&chart, cli.config)?;
            let json = chart::geometry_json(&data, &config, &settings)?;
            chart::write_output(&json, output.as_deref())?;
        }

        Commands::View { chart } => {
            for flag in chart.viewer_ignored_flags() {
                log::debug!("{flag} has no effect in the viewer; iced applies the display scale factor");
            }
            let (data, config, settings) = prepare(&chart, cli.config)?;
            launch_viewer(data, config, &settings)?;
        }

        Commands::InitConfig { path, force } => {
            let path = path.unwrap_or_else(|| PathBuf::from(settings::LOCAL_SETTINGS_FILE));
            init::init_config(&path, force)?;
        }
    }

    Ok(())
}

/// Load settings, apply overrides and read the data for one chart.
fn prepare(
    args: &ChartArgs,
    config_path: Option<PathBuf>,
) -> Result<(Vec<DataPoint>, RenderConfig, ChartSettings)> {
    let working_dir = std::env::current_dir().context("Failed to get current directory")?;
    let settings = settings::load_settings(config_path.as_deref(), &working_dir)?;
    let settings = args.apply(settings)?;
    let config = settings.render_config(args.kind);
    let data = args.load_points()?;
    log::debug!(
        "{} chart, {}x{} at scale {}",
        config.kind,
        settings.width,
        settings.height,
        settings.scale_factor
    );
    Ok((data, config, settings))
}

#[cfg(feature = "gui")]
fn launch_viewer(data: Vec<DataPoint>, config: RenderConfig, settings: &ChartSettings) -> Result<()> {
    let window_title = config
        .title
        .clone()
        .unwrap_or_else(|| format!("dashchart - {}", config.kind));
    dashchart_gui::ChartViewer::new(data, config)
        .with_width(settings.width)
        .with_window_title(window_title)
        .run()
        .context("Viewer failed")
}

#[cfg(not(feature = "gui"))]
fn launch_viewer(_data: Vec<DataPoint>, _config: RenderConfig, _settings: &ChartSettings) -> Result<()> {
    anyhow::bail!("dashchart was built without the `gui` feature")
}

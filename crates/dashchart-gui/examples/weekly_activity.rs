//! Weekly activity chart in a viewer window
//!
//! Run with: cargo run --package dashchart-gui --example weekly_activity

use dashchart_core::{adapt, ChartKind, FieldMapping, RenderConfig};
use dashchart_gui::ChartViewer;
use serde_json::json;

fn main() {
    let records = json!([
        {"day": "Mon", "hours": 2.5},
        {"day": "Tue", "hours": 1.0},
        {"day": "Wed", "hours": 3.25},
        {"day": "Thu", "hours": "0.5"},
        {"day": "Fri", "hours": 4},
        {"day": "Sat", "hours": null},
        {"day": "Sun", "hours": 1.75}
    ]);

    let data = adapt(&records, &FieldMapping::weekly_activity());
    let config = RenderConfig::new(ChartKind::Bar)
        .with_height(320.0)
        .with_title("Weekly Activity");

    let viewer = ChartViewer::new(data, config)
        .with_window_title("Weekly Activity")
        .with_width(720.0);

    if let Err(e) = viewer.run() {
        eprintln!("GUI error: {e}");
        std::process::exit(1);
    }
}

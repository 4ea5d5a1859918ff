//! End-to-end tests for the normalize -> geometry -> draw pipeline

use serde_json::{json, Value};

use dashchart_core::geometry::{self, EMPTY_MESSAGE};
use dashchart_core::{
    adapt, normalize, render, render_value, ChartKind, DataPoint, DrawCommand, FieldMapping,
    Plot, Recorder, RenderConfig, SurfaceSize, PALETTE,
};

fn size() -> SurfaceSize {
    SurfaceSize::new(600.0, 300.0, 1.0)
}

fn texts(recorder: &Recorder) -> Vec<String> {
    recorder
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text(run) => Some(run.content.clone()),
            _ => None,
        })
        .collect()
}

fn assert_all_finite(recorder: &Recorder) {
    for command in recorder.commands() {
        let finite = match command {
            DrawCommand::Clear(size) => size.width.is_finite() && size.height.is_finite(),
            DrawCommand::FillRect { rect, .. } => rect.is_finite(),
            DrawCommand::FillSector { sector, .. } => {
                sector.center.is_finite()
                    && sector.outer_radius.is_finite()
                    && sector.inner_radius.is_finite()
                    && sector.start_angle.is_finite()
                    && sector.sweep_angle.is_finite()
            }
            DrawCommand::StrokePolyline { points, .. } => points.iter().all(|p| p.is_finite()),
            DrawCommand::FillCircle { center, radius, .. }
            | DrawCommand::StrokeCircle { center, radius, .. } => {
                center.is_finite() && radius.is_finite()
            }
            DrawCommand::Text(run) => run.position.is_finite(),
        };
        assert!(finite, "non-finite draw command: {command:?}");
    }
}

#[test]
fn test_weekly_activity_bar_chart() {
    let input = json!([{"day": "Mon", "hours": 4}, {"day": "Tue", "hours": 0}]);
    let data = adapt(&input, &FieldMapping::weekly_activity());
    let geometry = geometry::compute(&data, &RenderConfig::new(ChartKind::Bar), size());

    let Plot::Bar(bars) = &geometry.plot else {
        panic!("expected bar geometry");
    };
    assert_eq!(bars.bars.len(), 2);
    assert_eq!(bars.max_value, 4.0);
    assert!(bars.bars[0].rect.height > 0.0);
    assert_eq!(bars.bars[1].rect.height, 0.0);
}

#[test]
fn test_empty_pie_shows_only_message() {
    let mut recorder = Recorder::new();
    let config = RenderConfig::new(ChartKind::Pie).with_legend(true);
    render_value(&mut recorder, &json!([]), &config, 600.0);

    assert_eq!(texts(&recorder), vec![EMPTY_MESSAGE]);
    assert_eq!(recorder.count(|c| matches!(c, DrawCommand::FillSector { .. })), 0);
    assert_eq!(recorder.count(|c| matches!(c, DrawCommand::FillRect { .. })), 0);
}

#[test]
fn test_all_zero_doughnut_shows_empty_ring() {
    let input = json!([{"level": "A", "count": 0}, {"level": "B", "count": 0}]);
    let data = adapt(&input, &FieldMapping::level_distribution());

    let geometry = geometry::compute(&data, &RenderConfig::new(ChartKind::Doughnut), size());
    let Plot::Pie(pie) = &geometry.plot else {
        panic!("expected pie geometry");
    };
    assert_eq!(pie.total, 0.0);
    assert!(pie.slices.is_empty());
    assert!(pie.empty_ring.is_some());
    assert_eq!(pie.center_label.as_ref().map(|l| l.text.as_str()), Some("0%"));

    let mut recorder = Recorder::new();
    render(&mut recorder, &data, &RenderConfig::new(ChartKind::Doughnut), 600.0);
    assert_eq!(recorder.count(|c| matches!(c, DrawCommand::FillSector { .. })), 0);
    assert_eq!(recorder.count(|c| matches!(c, DrawCommand::StrokeCircle { .. })), 2);
    assert!(texts(&recorder).contains(&"0%".to_string()));
}

#[test]
fn test_malformed_value_renders_as_zero() {
    let input = json!([{"label": "X", "value": "abc"}]);
    let data = normalize(&input);
    assert_eq!(data, vec![DataPoint::new("X", 0.0)]);

    for kind in ChartKind::ALL {
        let mut recorder = Recorder::new();
        render_value(&mut recorder, &input, &RenderConfig::new(kind), 600.0);
        assert_all_finite(&recorder);
    }
}

#[test]
fn test_single_point_line_uses_full_width() {
    let data = vec![DataPoint::new("Jan", 72.0)];
    let geometry = geometry::compute(&data, &RenderConfig::new(ChartKind::Line), size());
    let Plot::Line(line) = &geometry.plot else {
        panic!("expected line geometry");
    };
    assert_eq!(line.x_step, 600.0 - 2.0 * geometry::PADDING);
    assert!(line.points[0].position.is_finite());
}

#[test]
fn test_normalization_is_total() {
    let inputs: Vec<Value> = vec![
        Value::Null,
        json!([]),
        json!({"label": "not an array"}),
        json!([null, 1, "two", [3], {"value": {}}, {"label": [], "value": "4"}]),
    ];
    let expected_lens = [0, 0, 0, 6];
    for (input, expected) in inputs.iter().zip(expected_lens) {
        let data = normalize(input);
        assert_eq!(data.len(), expected);
        assert!(data.iter().all(|p| p.value.is_finite() && !p.label.is_empty()));
    }
}

#[test]
fn test_zero_values_never_produce_non_finite_geometry() {
    let data = vec![DataPoint::new("a", 0.0); 5];
    for kind in ChartKind::ALL {
        let mut recorder = Recorder::new();
        render(&mut recorder, &data, &RenderConfig::new(kind), 600.0);
        assert_all_finite(&recorder);
    }
}

#[test]
fn test_color_assignment_is_deterministic() {
    let data: Vec<DataPoint> = (0..20).map(|i| DataPoint::new(format!("P{i}"), 1.0)).collect();
    let geometry = geometry::compute(&data, &RenderConfig::new(ChartKind::Pie), size());
    let Plot::Pie(pie) = &geometry.plot else {
        panic!("expected pie geometry");
    };
    for slice in &pie.slices {
        assert_eq!(slice.color, PALETTE[slice.index % 8]);
    }
    for row in &geometry.legend {
        assert_eq!(row.color, PALETTE[row.index % 8]);
    }
}

#[test]
fn test_pipeline_is_idempotent() {
    let input = json!([
        {"label": "Beginner", "value": 45},
        {"label": "Intermediate", "value": "30"},
        {"label": "", "value": 25, "color": "#111827"}
    ]);
    for kind in ChartKind::ALL {
        let config = RenderConfig::new(kind).with_title("Levels");
        let mut first = Recorder::new();
        let mut second = Recorder::new();
        render_value(&mut first, &input, &config, 600.0);
        render_value(&mut second, &input, &config, 600.0);
        assert_eq!(first.commands(), second.commands());
    }
}

#[test]
fn test_legend_ignored_for_cartesian_kinds() {
    let data = vec![DataPoint::new("a", 1.0), DataPoint::new("b", 2.0)];
    for kind in [ChartKind::Bar, ChartKind::Line] {
        let config = RenderConfig::new(kind).with_legend(true);
        let mut recorder = Recorder::new();
        render(&mut recorder, &data, &config, 600.0);
        assert!(!texts(&recorder).iter().any(|t| t.ends_with("%)")));
    }
}

#[test]
fn test_geometry_serializes_to_json() {
    let data = vec![DataPoint::new("Mon", 4.0)];
    let geometry = geometry::compute(&data, &RenderConfig::new(ChartKind::Bar), size());
    let json = serde_json::to_value(&geometry).unwrap();
    assert_eq!(json["kind"], "bar");
    assert_eq!(json["plot"]["type"], "bar");
    assert_eq!(json["plot"]["bars"][0]["color"], "#3b82f6");
}

//! Immediate-mode rendering onto a [`Surface`]
//!
//! [`render`] runs the whole pipeline for one pass: compute geometry, clear
//! the surface, then issue fills, strokes and text. There is no partial
//! invalidation; every call redraws everything.

mod recorder;
mod svg;

use serde_json::Value;

use crate::color::{Color, AXIS_COLOR, EMPTY_RING_COLOR, LABEL_COLOR, TITLE_COLOR};
use crate::config::{RenderConfig, SurfaceSize};
use crate::data::{normalize, DataPoint};
use crate::geometry::{
    self, Align, Baseline, BarGeometry, ChartGeometry, Label, LineGeometry, PieGeometry, Plot,
    Point, Rect, TextRole, LINE_WIDTH, MARKER_RADIUS,
};

pub use recorder::{DrawCommand, Recorder};
pub use svg::SvgSurface;

/// Stroke width of the cartesian baseline.
pub const AXIS_WIDTH: f32 = 1.0;
/// Stroke width of the empty-ring outline.
pub const RING_WIDTH: f32 = 2.0;

/// An annular (or, with zero inner radius, plain) circular sector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub center: Point,
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub start_angle: f32,
    pub sweep_angle: f32,
}

/// Text ready to be drawn: a [`Label`] with its resolved style.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub content: String,
    pub position: Point,
    pub align: Align,
    pub baseline: Baseline,
    pub size: f32,
    pub color: Color,
}

impl TextRun {
    #[must_use]
    pub fn from_label(label: &Label) -> Self {
        let (size, color) = text_style(label.role);
        Self {
            content: label.text.clone(),
            position: label.anchor,
            align: label.align,
            baseline: label.baseline,
            size,
            color,
        }
    }
}

/// Font size and color for each kind of text.
#[must_use]
pub fn text_style(role: TextRole) -> (f32, Color) {
    match role {
        TextRole::Title => (16.0, TITLE_COLOR),
        TextRole::Category | TextRole::Legend => (12.0, LABEL_COLOR),
        TextRole::Value => (11.0, LABEL_COLOR),
        TextRole::Center => (18.0, TITLE_COLOR),
        TextRole::Empty => (14.0, LABEL_COLOR),
    }
}

/// A 2D drawing surface.
///
/// Coordinates are logical pixels with the origin at the top-left. A
/// surface is driven by one render pass at a time.
pub trait Surface {
    /// Pixel density of the output; geometry stays in logical pixels.
    fn scale_factor(&self) -> f32 {
        1.0
    }

    /// Resize to `size` and erase everything drawn so far.
    fn clear(&mut self, size: SurfaceSize);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn fill_sector(&mut self, sector: Sector, color: Color);

    /// Stroke an open path through `points` in order.
    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f32);

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32);

    fn fill_text(&mut self, text: &TextRun);
}

/// Draw `data` as configured onto `surface`, `width` logical pixels wide
/// and `config.height` tall.
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    data: &[DataPoint],
    config: &RenderConfig,
    width: f32,
) {
    let size = SurfaceSize::new(width, config.height, surface.scale_factor());
    let geometry = geometry::compute(data, config, size);
    draw(surface, &geometry);
}

/// Normalize raw JSON input, then [`render`] it.
pub fn render_value<S: Surface + ?Sized>(
    surface: &mut S,
    input: &Value,
    config: &RenderConfig,
    width: f32,
) {
    let data = normalize(input);
    render(surface, &data, config, width);
}

/// Clear `surface` and draw precomputed geometry onto it.
pub fn draw<S: Surface + ?Sized>(surface: &mut S, geometry: &ChartGeometry) {
    log::trace!("drawing {} chart", geometry.kind);
    surface.clear(geometry.size);

    if let Some(title) = &geometry.title {
        surface.fill_text(&TextRun::from_label(title));
    }

    match &geometry.plot {
        Plot::Empty(message) => surface.fill_text(&TextRun::from_label(message)),
        Plot::Bar(bars) => draw_bars(surface, bars),
        Plot::Line(line) => draw_line(surface, line),
        Plot::Pie(pie) => draw_pie(surface, pie),
    }

    for row in &geometry.legend {
        surface.fill_rect(row.swatch, row.color);
        surface.fill_text(&TextRun::from_label(&row.label));
    }
}

fn draw_bars<S: Surface + ?Sized>(surface: &mut S, geometry: &BarGeometry) {
    let (start, end) = geometry.baseline;
    surface.stroke_polyline(&[start, end], AXIS_COLOR, AXIS_WIDTH);

    for bar in &geometry.bars {
        surface.fill_rect(bar.rect, bar.color);
        surface.fill_text(&TextRun::from_label(&bar.value_label));
        surface.fill_text(&TextRun::from_label(&bar.category_label));
    }
}

fn draw_line<S: Surface + ?Sized>(surface: &mut S, geometry: &LineGeometry) {
    let (start, end) = geometry.baseline;
    surface.stroke_polyline(&[start, end], AXIS_COLOR, AXIS_WIDTH);

    if geometry.points.len() > 1 {
        let path: Vec<Point> = geometry.points.iter().map(|p| p.position).collect();
        surface.stroke_polyline(&path, geometry.stroke_color, LINE_WIDTH);
    }

    for point in &geometry.points {
        surface.fill_circle(point.position, MARKER_RADIUS, point.color);
        surface.fill_text(&TextRun::from_label(&point.value_label));
        surface.fill_text(&TextRun::from_label(&point.category_label));
    }
}

fn draw_pie<S: Surface + ?Sized>(surface: &mut S, geometry: &PieGeometry) {
    if let Some(ring) = &geometry.empty_ring {
        surface.stroke_circle(ring.center, ring.outer_radius, EMPTY_RING_COLOR, RING_WIDTH);
        if ring.inner_radius > 0.0 {
            surface.stroke_circle(ring.center, ring.inner_radius, EMPTY_RING_COLOR, RING_WIDTH);
        }
    }

    for slice in &geometry.slices {
        surface.fill_sector(
            Sector {
                center: geometry.center,
                outer_radius: geometry.outer_radius,
                inner_radius: geometry.inner_radius,
                start_angle: slice.start_angle,
                sweep_angle: slice.sweep_angle,
            },
            slice.color,
        );
    }

    if let Some(label) = &geometry.center_label {
        surface.fill_text(&TextRun::from_label(label));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartKind;
    use serde_json::json;

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

    #[test]
    fn test_every_render_starts_with_clear() {
        let mut recorder = Recorder::new();
        let data = vec![DataPoint::new("A", 1.0)];
        render(&mut recorder, &data, &RenderConfig::new(ChartKind::Bar), 400.0);
        let first_len = recorder.commands().len();
        render(&mut recorder, &data, &RenderConfig::new(ChartKind::Bar), 400.0);

        assert_eq!(recorder.commands().len(), first_len);
        assert!(matches!(recorder.commands()[0], DrawCommand::Clear(_)));
        assert_eq!(recorder.clear_count(), 2);
    }

    #[test]
    fn test_surface_size_uses_width_height_and_density() {
        let mut recorder = Recorder::with_scale_factor(2.0);
        render(&mut recorder, &[], &RenderConfig::new(ChartKind::Line).with_height(120.0), 320.0);
        assert_eq!(
            recorder.commands()[0],
            DrawCommand::Clear(SurfaceSize::new(320.0, 120.0, 2.0))
        );
    }

    #[test]
    fn test_empty_data_draws_only_message() {
        let mut recorder = Recorder::new();
        let config = RenderConfig::new(ChartKind::Pie).with_title("Levels");
        render(&mut recorder, &[], &config, 400.0);
        assert_eq!(recorder.commands().len(), 2);
        assert_eq!(texts(&recorder), vec!["No data available"]);
    }

    #[test]
    fn test_bar_draw_calls() {
        let mut recorder = Recorder::new();
        let data = vec![DataPoint::new("Mon", 4.0), DataPoint::new("Tue", 2.0)];
        render(&mut recorder, &data, &RenderConfig::new(ChartKind::Bar).with_legend(true), 400.0);
        assert_eq!(recorder.count(|c| matches!(c, DrawCommand::FillRect { .. })), 2);
        assert_eq!(texts(&recorder), vec!["4", "Mon", "2", "Tue"]);
    }

    #[test]
    fn test_line_draw_calls() {
        let mut recorder = Recorder::new();
        let data = vec![DataPoint::new("a", 1.0), DataPoint::new("b", 2.0), DataPoint::new("c", 3.0)];
        render(&mut recorder, &data, &RenderConfig::new(ChartKind::Line), 400.0);
        let polylines: Vec<usize> = recorder
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::StrokePolyline { points, .. } => Some(points.len()),
                _ => None,
            })
            .collect();
        // Baseline, then the data path
        assert_eq!(polylines, vec![2, 3]);
        assert_eq!(recorder.count(|c| matches!(c, DrawCommand::FillCircle { .. })), 3);
    }

    #[test]
    fn test_pie_with_legend_draw_calls() {
        let mut recorder = Recorder::new();
        let data = vec![DataPoint::new("A", 60.0), DataPoint::new("B", 40.0)];
        render(&mut recorder, &data, &RenderConfig::new(ChartKind::Pie), 400.0);
        assert_eq!(recorder.count(|c| matches!(c, DrawCommand::FillSector { .. })), 2);
        // Legend swatches
        assert_eq!(recorder.count(|c| matches!(c, DrawCommand::FillRect { .. })), 2);
        assert_eq!(texts(&recorder), vec!["A (60%)", "B (40%)"]);
    }

    #[test]
    fn test_render_value_normalizes_first() {
        let mut recorder = Recorder::new();
        let input = json!([{"label": "X", "value": "abc"}]);
        render_value(&mut recorder, &input, &RenderConfig::new(ChartKind::Bar), 400.0);
        assert_eq!(texts(&recorder), vec!["0", "X"]);
    }

    #[test]
    fn test_text_roles_have_distinct_title_style() {
        let (title_size, _) = text_style(TextRole::Title);
        let (value_size, _) = text_style(TextRole::Value);
        assert!(title_size > value_size);
    }
}

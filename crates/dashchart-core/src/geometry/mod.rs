//! Geometry calculators
//!
//! Pure functions from normalized data, a [`RenderConfig`] and a surface
//! size to pixel-space drawing instructions. Nothing here draws; the
//! [`render`](crate::render) module turns a [`ChartGeometry`] into surface
//! calls. Every coordinate produced is finite, whatever the input values.

mod bar;
mod line;
mod pie;

use serde::Serialize;

use crate::config::{ChartKind, RenderConfig, SurfaceSize};
use crate::data::DataPoint;
use crate::legend::{self, LegendRow};

pub use bar::{Bar, BarGeometry, BAR_FILL_RATIO};
pub use line::{LineGeometry, LinePoint, Segment, LINE_WIDTH, MARKER_RADIUS};
pub use pie::{PieGeometry, Ring, Slice, INNER_RADIUS_RATIO, PIE_MARGIN};

/// Padding around the cartesian chart area, on every side.
pub const PADDING: f32 = 40.0;
/// Message shown in place of a chart when there is no data.
pub const EMPTY_MESSAGE: &str = "No data available";

/// A point in logical pixels, origin top-left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// An axis-aligned rectangle; `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// Horizontal text anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Vertical text anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Baseline {
    Top,
    Middle,
    Bottom,
}

/// What a piece of text is for; surfaces pick size and color from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextRole {
    Title,
    Category,
    Value,
    Legend,
    Center,
    Empty,
}

/// A positioned piece of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub anchor: Point,
    pub align: Align,
    pub baseline: Baseline,
    pub role: TextRole,
}

impl Label {
    #[must_use]
    pub fn new(text: impl Into<String>, anchor: Point, role: TextRole) -> Self {
        Self {
            text: text.into(),
            anchor,
            align: Align::Center,
            baseline: Baseline::Middle,
            role,
        }
    }

    #[must_use]
    pub fn aligned(mut self, align: Align, baseline: Baseline) -> Self {
        self.align = align;
        self.baseline = baseline;
        self
    }
}

/// The drawable body of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Plot {
    /// Centered empty-state message
    Empty(Label),
    Bar(BarGeometry),
    Line(LineGeometry),
    Pie(PieGeometry),
}

/// Complete geometry for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartGeometry {
    pub kind: ChartKind,
    pub size: SurfaceSize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Label>,
    pub plot: Plot,
    pub legend: Vec<LegendRow>,
}

/// Inner rectangle of a cartesian (bar/line) chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ChartArea {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ChartArea {
    pub(crate) fn padded(size: SurfaceSize) -> Self {
        Self {
            left: PADDING,
            top: PADDING,
            width: (size.width - 2.0 * PADDING).max(0.0),
            height: (size.height - 2.0 * PADDING).max(0.0),
        }
    }

    pub(crate) fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub(crate) fn right(&self) -> f32 {
        self.left + self.width
    }
}

/// Compute the geometry for `data` drawn as `config.kind` on a surface of
/// `size`.
#[must_use]
pub fn compute(data: &[DataPoint], config: &RenderConfig, size: SurfaceSize) -> ChartGeometry {
    if data.is_empty() {
        log::debug!("{} chart has no data, computing empty state", config.kind);
        return ChartGeometry {
            kind: config.kind,
            size,
            title: None,
            plot: Plot::Empty(legend::empty_state(size)),
            legend: Vec::new(),
        };
    }

    log::debug!(
        "computing {} geometry for {} points on {}x{}",
        config.kind,
        data.len(),
        size.width,
        size.height
    );

    let title = config
        .title
        .as_ref()
        .filter(|t| !t.is_empty())
        .map(|t| Label::new(t.clone(), Point::new(size.width / 2.0, PADDING / 2.0), TextRole::Title));

    let (plot, legend) = match config.kind {
        ChartKind::Bar => (Plot::Bar(bar::compute(data, ChartArea::padded(size))), Vec::new()),
        ChartKind::Line => (Plot::Line(line::compute(data, ChartArea::padded(size))), Vec::new()),
        ChartKind::Pie | ChartKind::Doughnut => {
            let doughnut = config.kind == ChartKind::Doughnut;
            let legend_height = if config.show_legend {
                legend::legend_height(data.len(), size.height)
            } else {
                0.0
            };
            let top = if title.is_some() { PADDING } else { 0.0 };
            let bottom = (size.height - legend_height).max(top);
            let pie = pie::compute(data, size.width, top, bottom, doughnut);
            let rows = if config.show_legend {
                legend::layout(data, bottom, size)
            } else {
                Vec::new()
            };
            (Plot::Pie(pie), rows)
        }
    };

    ChartGeometry {
        kind: config.kind,
        size,
        title,
        plot,
        legend,
    }
}

/// Largest value, never below 1 so scaling cannot divide by zero.
pub(crate) fn scale_max(data: &[DataPoint]) -> f64 {
    data.iter()
        .map(|p| p.value)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0)
}

/// Fraction of the axis covered by `value`, clamped to `0.0..=1.0`.
pub(crate) fn ratio(value: f64, max_value: f64) -> f32 {
    (value / max_value).clamp(0.0, 1.0) as f32
}

/// Compact display form: integers without decimals, others to at most two
/// places.
#[must_use]
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

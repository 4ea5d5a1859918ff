use serde::Serialize;

use super::{format_value, ratio, scale_max, Align, Baseline, ChartArea, Label, Point, TextRole};
use crate::color::{self, Color};
use crate::data::DataPoint;

/// Radius of the filled marker drawn at each data point.
pub const MARKER_RADIUS: f32 = 4.0;
/// Width of the connecting line.
pub const LINE_WIDTH: f32 = 2.0;

/// One plotted data point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePoint {
    pub index: usize,
    pub position: Point,
    /// Marker fill
    pub color: Color,
    pub value_label: Label,
    pub category_label: Label,
}

/// Straight segment between consecutive points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineGeometry {
    pub max_value: f64,
    /// Horizontal distance between consecutive points
    pub x_step: f32,
    pub stroke_color: Color,
    pub baseline: (Point, Point),
    pub points: Vec<LinePoint>,
    pub segments: Vec<Segment>,
}

pub(super) fn compute(data: &[DataPoint], area: ChartArea) -> LineGeometry {
    let max_value = scale_max(data);
    let x_step = if data.len() > 1 {
        area.width / (data.len() - 1) as f32
    } else {
        area.width
    };
    let bottom = area.bottom();

    let points: Vec<LinePoint> = data
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let position = Point::new(
                area.left + x_step * index as f32,
                bottom - ratio(point.value, max_value) * area.height,
            );
            LinePoint {
                index,
                position,
                color: color::resolve(point.color.as_deref(), index),
                value_label: Label::new(
                    format_value(point.value),
                    Point::new(position.x, position.y - 10.0),
                    TextRole::Value,
                )
                .aligned(Align::Center, Baseline::Bottom),
                category_label: Label::new(
                    point.label.clone(),
                    Point::new(position.x, bottom + 8.0),
                    TextRole::Category,
                )
                .aligned(Align::Center, Baseline::Top),
            }
        })
        .collect();

    let segments = points
        .windows(2)
        .map(|pair| Segment {
            from: pair[0].position,
            to: pair[1].position,
        })
        .collect();

    LineGeometry {
        max_value,
        x_step,
        stroke_color: color::palette_color(0),
        baseline: (
            Point::new(area.left, bottom),
            Point::new(area.right(), bottom),
        ),
        points,
        segments,
    }
}

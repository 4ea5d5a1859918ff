use std::f64::consts::{FRAC_PI_2, TAU};

use serde::Serialize;

use super::{format_value, Label, Point, TextRole};
use crate::color::{self, Color};
use crate::data::DataPoint;

/// Inner cut of a doughnut as a fraction of the outer radius.
pub const INNER_RADIUS_RATIO: f32 = 0.6;
/// Gap kept between the pie and the edges of its region.
pub const PIE_MARGIN: f32 = 20.0;

/// One colored wedge. Angles are in radians, clockwise on screen, with
/// `-PI/2` at 12 o'clock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub index: usize,
    pub start_angle: f32,
    pub sweep_angle: f32,
    pub color: Color,
    /// Fraction of the positive subtotal, `0.0..=1.0`
    pub share: f64,
}

/// Neutral outline drawn when there is nothing to slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ring {
    pub center: Point,
    pub outer_radius: f32,
    /// Zero for a plain pie
    pub inner_radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieGeometry {
    pub center: Point,
    pub outer_radius: f32,
    /// Zero for a plain pie
    pub inner_radius: f32,
    /// Signed sum of all values; shown at the center of a doughnut
    pub total: f64,
    pub slices: Vec<Slice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_ring: Option<Ring>,
    /// Doughnut only: the total, overlaid at the center
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_label: Option<Label>,
}

/// Lay out a pie in the horizontal band `top..bottom` of a surface `width`
/// wide.
pub(super) fn compute(
    data: &[DataPoint],
    width: f32,
    top: f32,
    bottom: f32,
    doughnut: bool,
) -> PieGeometry {
    let band = (bottom - top).max(0.0);
    let outer_radius = (width.min(band) / 2.0 - PIE_MARGIN).max(0.0);
    let inner_radius = if doughnut {
        outer_radius * INNER_RADIUS_RATIO
    } else {
        0.0
    };
    let center = Point::new(width / 2.0, top + band / 2.0);

    let total: f64 = data.iter().map(|p| p.value).sum();

    let center_label = doughnut.then(|| {
        Label::new(format!("{}%", format_value(total)), center, TextRole::Center)
    });

    if total <= 0.0 {
        log::debug!("pie total is {total}, drawing empty ring");
        return PieGeometry {
            center,
            outer_radius,
            inner_radius,
            total,
            slices: Vec::new(),
            empty_ring: Some(Ring {
                center,
                outer_radius,
                inner_radius,
            }),
            center_label,
        };
    }

    // Negative points get no slice; the rest share the full turn.
    let positive: f64 = data.iter().map(|p| p.value.max(0.0)).sum();

    let mut angle = -FRAC_PI_2;
    let slices = data
        .iter()
        .enumerate()
        .filter(|(_, point)| point.value > 0.0)
        .map(|(index, point)| {
            let share = point.value / positive;
            let sweep = share * TAU;
            let slice = Slice {
                index,
                start_angle: angle as f32,
                sweep_angle: sweep as f32,
                color: color::resolve(point.color.as_deref(), index),
                share,
            };
            angle += sweep;
            slice
        })
        .collect();

    PieGeometry {
        center,
        outer_radius,
        inner_radius,
        total,
        slices,
        empty_ring: None,
        center_label,
    }
}

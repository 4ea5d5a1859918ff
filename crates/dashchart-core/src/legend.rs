//! Legend rows and the empty-state message

use serde::Serialize;

use crate::color::{self, Color};
use crate::config::SurfaceSize;
use crate::data::DataPoint;
use crate::geometry::{format_value, Align, Baseline, Label, Point, Rect, TextRole, EMPTY_MESSAGE, PADDING};

/// Vertical space taken by one legend row.
pub const ROW_HEIGHT: f32 = 20.0;
/// Gap between the plot and the first legend row.
pub const LEGEND_MARGIN: f32 = 10.0;
/// Side of the color swatch.
pub const SWATCH_SIZE: f32 = 12.0;

/// One legend row: swatch plus `"label (value%)"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendRow {
    pub index: usize,
    pub swatch: Rect,
    pub color: Color,
    pub label: Label,
}

/// Share of the surface height the legend may take; longer legends wrap
/// into columns.
pub const MAX_LEGEND_SHARE: f32 = 0.5;

/// Rows that fit in one legend column on a surface `surface_height` tall.
/// Always at least one.
#[must_use]
pub fn rows_per_column(surface_height: f32) -> usize {
    let available = surface_height * MAX_LEGEND_SHARE - LEGEND_MARGIN;
    ((available / ROW_HEIGHT).floor() as usize).max(1)
}

/// Height reserved below the plot for `rows` legend rows.
#[must_use]
pub fn legend_height(rows: usize, surface_height: f32) -> f32 {
    if rows == 0 {
        0.0
    } else {
        let stacked = rows.min(rows_per_column(surface_height));
        LEGEND_MARGIN + ROW_HEIGHT * stacked as f32
    }
}

/// Legend text for a point. The value is shown as-is with a percent sign;
/// it is not rescaled against the total.
#[must_use]
pub fn row_text(point: &DataPoint) -> String {
    format!("{} ({}%)", point.label, format_value(point.value))
}

/// Lay out one row per point, starting just below `top`. Rows fill a column
/// top to bottom, then continue in the next column to the right.
pub(crate) fn layout(data: &[DataPoint], top: f32, size: SurfaceSize) -> Vec<LegendRow> {
    let left = PADDING.min(size.width / 2.0);
    let per_column = rows_per_column(size.height);
    let columns = data.len().div_ceil(per_column).max(1);
    let column_width = (size.width - 2.0 * left).max(0.0) / columns as f32;
    data.iter()
        .enumerate()
        .map(|(index, point)| {
            let x = left + column_width * (index / per_column) as f32;
            let row = (index % per_column) as f32;
            let row_center = top + LEGEND_MARGIN + ROW_HEIGHT * row + ROW_HEIGHT / 2.0;
            LegendRow {
                index,
                swatch: Rect::new(x, row_center - SWATCH_SIZE / 2.0, SWATCH_SIZE, SWATCH_SIZE),
                color: color::resolve(point.color.as_deref(), index),
                label: Label::new(
                    row_text(point),
                    Point::new(x + SWATCH_SIZE + 8.0, row_center),
                    TextRole::Legend,
                )
                .aligned(Align::Left, Baseline::Middle),
            }
        })
        .collect()
}

/// The centered message shown when there is nothing to chart.
#[must_use]
pub fn empty_state(size: SurfaceSize) -> Label {
    Label::new(
        EMPTY_MESSAGE,
        Point::new(size.width / 2.0, size.height / 2.0),
        TextRole::Empty,
    )
}

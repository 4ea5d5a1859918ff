use serde::Serialize;

use super::{format_value, ratio, scale_max, Align, Baseline, ChartArea, Label, Point, Rect, TextRole};
use crate::color::{self, Color};
use crate::data::DataPoint;

/// Share of each slot taken by the bar; the rest is split either side.
pub const BAR_FILL_RATIO: f32 = 0.7;

/// A single bar with its labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub index: usize,
    pub rect: Rect,
    pub color: Color,
    /// Value printed just above the bar
    pub value_label: Label,
    /// Category printed under the baseline
    pub category_label: Label,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarGeometry {
    /// Value mapped to the full chart height (never below 1)
    pub max_value: f64,
    pub slot_width: f32,
    pub baseline: (Point, Point),
    pub bars: Vec<Bar>,
}

pub(super) fn compute(data: &[DataPoint], area: ChartArea) -> BarGeometry {
    let max_value = scale_max(data);
    let slot_width = area.width / data.len().max(1) as f32;
    let bar_width = slot_width * BAR_FILL_RATIO;
    let gap = (slot_width - bar_width) / 2.0;
    let bottom = area.bottom();

    let bars = data
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let x = area.left + slot_width * index as f32 + gap;
            let height = ratio(point.value, max_value) * area.height;
            let top = bottom - height;
            let center_x = x + bar_width / 2.0;

            Bar {
                index,
                rect: Rect::new(x, top, bar_width, height),
                color: color::resolve(point.color.as_deref(), index),
                value_label: Label::new(
                    format_value(point.value),
                    Point::new(center_x, top - 5.0),
                    TextRole::Value,
                )
                .aligned(Align::Center, Baseline::Bottom),
                category_label: Label::new(
                    point.label.clone(),
                    Point::new(center_x, bottom + 8.0),
                    TextRole::Category,
                )
                .aligned(Align::Center, Baseline::Top),
            }
        })
        .collect();

    BarGeometry {
        max_value,
        slot_width,
        baseline: (
            Point::new(area.left, bottom),
            Point::new(area.right(), bottom),
        ),
        bars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PALETTE;
    use crate::config::SurfaceSize;

    fn area() -> ChartArea {
        // 400x300 surface: 320x220 chart area at (40, 40)
        ChartArea::padded(SurfaceSize::new(400.0, 300.0, 1.0))
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_slot_split_seventy_thirty() {
        let data = vec![DataPoint::new("A", 1.0), DataPoint::new("B", 2.0)];
        let geometry = compute(&data, area());
        assert!(approx(geometry.slot_width, 160.0));

        let first = &geometry.bars[0].rect;
        assert!(approx(first.width, 112.0));
        assert!(approx(first.x, 40.0 + 24.0));

        let second = &geometry.bars[1].rect;
        assert!(approx(second.x, 40.0 + 160.0 + 24.0));
    }

    #[test]
    fn test_heights_are_proportional_to_max() {
        let data = vec![DataPoint::new("A", 4.0), DataPoint::new("B", 1.0)];
        let geometry = compute(&data, area());
        assert_eq!(geometry.max_value, 4.0);
        assert!(approx(geometry.bars[0].rect.height, 220.0));
        assert!(approx(geometry.bars[1].rect.height, 55.0));
        // Bars stand on the baseline
        for bar in &geometry.bars {
            assert!(approx(bar.rect.y + bar.rect.height, 260.0));
        }
    }

    #[test]
    fn test_all_zero_values_have_zero_height() {
        let data = vec![DataPoint::new("A", 0.0), DataPoint::new("B", 0.0)];
        let geometry = compute(&data, area());
        assert_eq!(geometry.max_value, 1.0);
        for bar in &geometry.bars {
            assert!(bar.rect.is_finite());
            assert_eq!(bar.rect.height, 0.0);
        }
    }

    #[test]
    fn test_negative_values_clamp_to_baseline() {
        let data = vec![DataPoint::new("A", -5.0), DataPoint::new("B", 5.0)];
        let geometry = compute(&data, area());
        assert_eq!(geometry.bars[0].rect.height, 0.0);
        assert_eq!(geometry.bars[0].value_label.text, "-5");
    }

    #[test]
    fn test_colors_follow_palette_unless_overridden() {
        let data: Vec<DataPoint> = (0..10)
            .map(|i| DataPoint::new(format!("P{i}"), 1.0))
            .chain(std::iter::once(DataPoint::new("own", 1.0).with_color("#000000")))
            .collect();
        let geometry = compute(&data, area());
        for bar in &geometry.bars[..10] {
            assert_eq!(bar.color, PALETTE[bar.index % 8]);
        }
        assert_eq!(geometry.bars[10].color, Color::BLACK);
    }

    #[test]
    fn test_labels_sit_around_the_bar() {
        let data = vec![DataPoint::new("Mon", 2.0)];
        let bar = &compute(&data, area()).bars[0];
        assert_eq!(bar.category_label.text, "Mon");
        assert!(bar.category_label.anchor.y > bar.rect.y + bar.rect.height);
        assert!(bar.value_label.anchor.y < bar.rect.y);
    }
}

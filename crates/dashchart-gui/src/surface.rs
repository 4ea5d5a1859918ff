//! [`Surface`] implementation over an iced canvas frame

use std::f32::consts::FRAC_PI_2;

use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{self, Frame, Path, Stroke, Text};
use iced::{Color as IcedColor, Point as IcedPoint, Size};

use dashchart_core::geometry::{Align, Baseline, Point, Rect};
use dashchart_core::render::{Sector, Surface, TextRun};
use dashchart_core::{Color, SurfaceSize};

/// Draws onto a borrowed iced [`Frame`].
///
/// iced hands every `draw` call a fresh frame and applies the window scale
/// factor itself, so `clear` only records the logical size.
pub struct FrameSurface<'a> {
    frame: &'a mut Frame,
    size: SurfaceSize,
}

impl<'a> FrameSurface<'a> {
    pub fn new(frame: &'a mut Frame) -> Self {
        let Size { width, height } = frame.size();
        Self {
            frame,
            size: SurfaceSize::new(width, height, 1.0),
        }
    }

    /// Logical size of the last pass.
    pub fn size(&self) -> SurfaceSize {
        self.size
    }
}

/// Convert a chart color to an iced color
pub fn to_iced_color(color: Color) -> IcedColor {
    IcedColor::from_rgba8(color.r, color.g, color.b, color.alpha())
}

fn to_iced_point(point: Point) -> IcedPoint {
    IcedPoint::new(point.x, point.y)
}

impl Surface for FrameSurface<'_> {
    fn clear(&mut self, size: SurfaceSize) {
        log::trace!("iced frame pass at {}x{}", size.width, size.height);
        self.size = size;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let path = Path::rectangle(
            IcedPoint::new(rect.x, rect.y),
            Size::new(rect.width, rect.height),
        );
        self.frame.fill(&path, to_iced_color(color));
    }

    fn fill_sector(&mut self, sector: Sector, color: Color) {
        if sector.sweep_angle.abs() <= f32::EPSILON || sector.outer_radius <= 0.0 {
            return;
        }
        let Sector {
            center,
            outer_radius: outer,
            inner_radius: inner,
            start_angle: start,
            sweep_angle: sweep,
        } = sector;
        let end = start + sweep;

        let slice = Path::new(|builder| {
            builder.move_to(IcedPoint::new(
                center.x + outer * start.cos(),
                center.y + outer * start.sin(),
            ));
            push_arc(builder, center, outer, start, sweep);
            if inner > 0.0 {
                builder.line_to(IcedPoint::new(
                    center.x + inner * end.cos(),
                    center.y + inner * end.sin(),
                ));
                push_arc(builder, center, inner, end, -sweep);
            } else {
                builder.line_to(to_iced_point(center));
            }
            builder.close();
        });
        self.frame.fill(&slice, to_iced_color(color));
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        if rest.is_empty() {
            return;
        }
        let path = Path::new(|builder| {
            builder.move_to(to_iced_point(*first));
            for point in rest {
                builder.line_to(to_iced_point(*point));
            }
        });
        self.frame.stroke(
            &path,
            Stroke::default()
                .with_color(to_iced_color(color))
                .with_width(width),
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        let circle = Path::circle(to_iced_point(center), radius);
        self.frame.fill(&circle, to_iced_color(color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        let circle = Path::circle(to_iced_point(center), radius);
        self.frame.stroke(
            &circle,
            Stroke::default()
                .with_color(to_iced_color(color))
                .with_width(width),
        );
    }

    fn fill_text(&mut self, text: &TextRun) {
        let align_x = match text.align {
            Align::Left => Horizontal::Left,
            Align::Center => Horizontal::Center,
            Align::Right => Horizontal::Right,
        };
        let align_y = match text.baseline {
            Baseline::Top => Vertical::Top,
            Baseline::Middle => Vertical::Center,
            Baseline::Bottom => Vertical::Bottom,
        };
        self.frame.fill_text(Text {
            content: text.content.clone(),
            position: to_iced_point(text.position),
            color: to_iced_color(text.color),
            size: text.size.into(),
            align_x: align_x.into(),
            align_y: align_y.into(),
            ..Text::default()
        });
    }
}

/// Widest angle one cubic piece may cover.
const MAX_PIECE_ANGLE: f32 = FRAC_PI_2;

/// Cubic bezier pieces approximating the arc of `radius` around `center`
/// from `start` through `sweep` radians, as `[control1, control2, end]`.
/// The arc's start point is not included.
fn arc_pieces(center: Point, radius: f32, start: f32, sweep: f32) -> Vec<[Point; 3]> {
    let pieces = ((sweep.abs() / MAX_PIECE_ANGLE).ceil() as usize).max(1);
    let step = sweep / pieces as f32;
    let handle = radius * 4.0 / 3.0 * (step / 4.0).tan();

    let on_circle = |angle: f32| {
        Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
    };
    // Offset along the tangent at `angle`, in the direction of increasing angle
    let along = |from: Point, angle: f32, length: f32| {
        Point::new(from.x - length * angle.sin(), from.y + length * angle.cos())
    };

    (0..pieces)
        .map(|i| {
            let from_angle = start + step * i as f32;
            let to_angle = from_angle + step;
            let to = on_circle(to_angle);
            [
                along(on_circle(from_angle), from_angle, handle),
                along(to, to_angle, -handle),
                to,
            ]
        })
        .collect()
}

fn push_arc(builder: &mut canvas::path::Builder, center: Point, radius: f32, start: f32, sweep: f32) {
    for [c1, c2, to] in arc_pieces(center, radius, start, sweep) {
        builder.bezier_curve_to(to_iced_point(c1), to_iced_point(c2), to_iced_point(to));
    }
}

use super::{Sector, Surface, TextRun};
use crate::color::Color;
use crate::config::SurfaceSize;
use crate::geometry::{Point, Rect};

/// A single recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(SurfaceSize),
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillSector {
        sector: Sector,
        color: Color,
    },
    StrokePolyline {
        points: Vec<Point>,
        color: Color,
        width: f32,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Color,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
        color: Color,
        width: f32,
    },
    Text(TextRun),
}

/// Surface that records draw calls instead of producing pixels.
///
/// `clear` discards everything recorded so far, so after a render the
/// recorder holds exactly the commands of the last pass.
#[derive(Debug)]
pub struct Recorder {
    scale_factor: f32,
    commands: Vec<DrawCommand>,
    clears: usize,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::with_scale_factor(1.0)
    }

    #[must_use]
    pub fn with_scale_factor(scale_factor: f32) -> Self {
        Self {
            scale_factor,
            commands: Vec::new(),
            clears: 0,
        }
    }

    /// Commands of the most recent pass, starting with its `Clear`.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of passes drawn since construction.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Number of recorded commands matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }

    #[must_use]
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for Recorder {
    fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    fn clear(&mut self, size: SurfaceSize) {
        self.commands.clear();
        self.clears += 1;
        self.commands.push(DrawCommand::Clear(size));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_sector(&mut self, sector: Sector, color: Color) {
        self.commands.push(DrawCommand::FillSector { sector, color });
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f32) {
        self.commands.push(DrawCommand::StrokePolyline {
            points: points.to_vec(),
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            width,
        });
    }

    fn fill_text(&mut self, text: &TextRun) {
        self.commands.push(DrawCommand::Text(text.clone()));
    }
}

//! Chart canvas widget
//!
//! [`ChartProgram`] is an iced canvas program that runs the full dashchart
//! pipeline on every draw. iced calls `draw` whenever the widget's inputs or
//! bounds change, which gives the clear-and-redraw behavior directly.

use iced::mouse;
use iced::widget::canvas::{self, Canvas, Frame};
use iced::{Element, Length, Rectangle, Renderer, Theme};

use dashchart_core::{render, DataPoint, RenderConfig};

use crate::surface::FrameSurface;

/// Canvas program for rendering any [`dashchart_core::ChartKind`]
#[derive(Debug, Clone)]
pub struct ChartProgram {
    pub data: Vec<DataPoint>,
    pub config: RenderConfig,
}

impl ChartProgram {
    pub fn new(data: Vec<DataPoint>, config: RenderConfig) -> Self {
        Self { data, config }
    }
}

impl<Message> canvas::Program<Message> for ChartProgram {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        {
            let mut surface = FrameSurface::new(&mut frame);
            render(&mut surface, &self.data, &self.config, bounds.width);
        }

        vec![frame.into_geometry()]
    }
}

/// Chart element that fills the available width at the configured height
pub fn chart<'a, Message: 'a>(data: Vec<DataPoint>, config: RenderConfig) -> Element<'a, Message> {
    let height = config.height;
    Canvas::new(ChartProgram::new(data, config))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashchart_core::ChartKind;

    #[test]
    fn test_chart_program_creation() {
        let program = ChartProgram::new(
            vec![DataPoint::new("Mon", 4.0)],
            RenderConfig::new(ChartKind::Bar).with_height(200.0),
        );
        assert_eq!(program.data.len(), 1);
        assert_eq!(program.config.kind, ChartKind::Bar);
        assert!((program.config.height - 200.0).abs() < f32::EPSILON);
    }
}

//! Standalone chart viewer window
//!
//! Shows one data set with buttons to switch the chart kind and toggle the
//! legend. Each change replaces the [`RenderConfig`] and the canvas redraws
//! from scratch.

use iced::widget::{button, column, container, row, text};
use iced::{Element, Task};

use dashchart_core::{ChartKind, DataPoint, RenderConfig};

use crate::chart::chart;
use crate::error::{GuiError, GuiResult};

/// Extra window height for the toolbar above the chart.
const TOOLBAR_HEIGHT: f32 = 120.0;

/// Messages produced by the viewer's controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerMessage {
    SetKind(ChartKind),
    ToggleLegend,
}

/// Interactive single-chart window
#[derive(Debug, Clone)]
pub struct ChartViewer {
    data: Vec<DataPoint>,
    config: RenderConfig,
    window_title: String,
    width: f32,
}

impl ChartViewer {
    pub fn new(data: Vec<DataPoint>, config: RenderConfig) -> Self {
        Self {
            data,
            config,
            window_title: "dashchart".to_string(),
            width: dashchart_core::config::DEFAULT_WIDTH,
        }
    }

    #[must_use]
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Apply a control message
    pub fn update(&mut self, message: ViewerMessage) -> Task<ViewerMessage> {
        match message {
            ViewerMessage::SetKind(kind) => {
                log::debug!("viewer switching to {kind} chart");
                self.config.kind = kind;
            }
            ViewerMessage::ToggleLegend => {
                self.config.show_legend = !self.config.show_legend;
                log::debug!("viewer legend visible: {}", self.config.show_legend);
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, ViewerMessage> {
        let kinds = row(ChartKind::ALL.iter().map(|&kind| {
            let message = (kind != self.config.kind).then_some(ViewerMessage::SetKind(kind));
            Element::from(
                button(text(kind.name()))
                    .padding([4, 12])
                    .on_press_maybe(message),
            )
        }))
        .spacing(8);

        let legend_label = if self.config.show_legend {
            "Hide legend"
        } else {
            "Show legend"
        };

        let controls = row![
            kinds,
            button(text(legend_label))
                .padding([4, 12])
                .on_press(ViewerMessage::ToggleLegend),
        ]
        .spacing(24);

        let content = column![
            controls,
            chart(self.data.clone(), self.config.clone()),
        ]
        .spacing(16);

        container(content).padding(16).into()
    }

    /// Open the viewer window and block until it is closed
    pub fn run(self) -> GuiResult<()> {
        let width = self.width;
        let height = self.config.height + TOOLBAR_HEIGHT;
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(GuiError::WindowSize { width, height });
        }

        log::info!(
            "opening viewer: {} points as {} chart",
            self.data.len(),
            self.config.kind
        );

        let title = self.window_title.clone();

        iced::application(
            move || (self.clone(), Task::none()),
            ChartViewer::update,
            ChartViewer::view,
        )
        .title(move |_: &ChartViewer| title.clone())
        .window_size((width, height))
        .run()
        .map_err(|e| GuiError::Iced(e.to_string()))
    }
}

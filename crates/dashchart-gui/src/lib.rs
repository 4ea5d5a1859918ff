//! dashchart GUI - iced canvas widgets for dashchart charts
//!
//! The core crate computes geometry and issues draw calls against its
//! `Surface` trait. This crate supplies a surface over an iced canvas
//! [`Frame`](iced::widget::canvas::Frame) and wraps it in widgets.
//!
//! # Components
//!
//! - [`ChartProgram`]: canvas program that renders one chart
//! - [`chart`]: element helper that fills the width at the configured height
//! - [`FrameSurface`]: `Surface` implementation over an iced frame
//! - [`ChartViewer`]: standalone window with kind and legend controls

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types for GUI operations
pub mod error;

/// Canvas program and chart element
pub mod chart;

/// iced frame surface
pub mod surface;

/// Standalone viewer application
pub mod viewer;

pub use chart::{chart, ChartProgram};
pub use error::{GuiError, GuiResult};
pub use surface::{to_iced_color, FrameSurface};
pub use viewer::{ChartViewer, ViewerMessage};

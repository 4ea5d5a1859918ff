//! dashchart core - chart geometry and rendering for dashboard data
//!
//! This crate turns loosely typed dashboard data into bar, line, pie and
//! doughnut charts without a charting library.
//!
//! # Pipeline
//!
//! Every render pass runs the same three steps, start to finish:
//!
//! 1. **Normalize**: [`normalize`] coerces arbitrary JSON into
//!    [`DataPoint`]s. It never fails; bad values become `0` and missing
//!    labels become `"Item <n>"`.
//! 2. **Compute geometry**: [`geometry::compute`] maps points, a
//!    [`RenderConfig`] and a [`SurfaceSize`] to pixel coordinates.
//! 3. **Draw**: [`render::draw`] clears a [`Surface`] and issues fills,
//!    strokes and text for the geometry.
//!
//! Nothing is cached between passes. Upstream record shapes such as
//! `{day, hours}` go through a [`FieldMapping`] before normalization.
//!
//! # Surfaces
//!
//! - [`Recorder`]: records draw calls, for tests and inspection
//! - [`SvgSurface`]: writes an SVG document
//! - `dashchart-gui` provides an iced canvas surface

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types for configuration and I/O
pub mod error;

/// Colors and the fixed palette
pub mod color;

/// Data points and normalization
pub mod data;

/// Field mappings for upstream record shapes
pub mod adapt;

/// Chart kinds, render configuration and settings files
pub mod config;

/// Geometry calculators for each chart kind
pub mod geometry;

/// Legend rows and the empty-state message
pub mod legend;

/// Surface trait and renderers
pub mod render;

pub use adapt::{adapt, FieldMapping, SourceShape};
pub use color::{Color, PALETTE};
pub use config::{ChartKind, ChartSettings, RenderConfig, SurfaceSize};
pub use data::{normalize, normalize_points, DataPoint};
pub use error::{ChartError, ChartResult};
pub use geometry::{ChartGeometry, Plot};
pub use render::{draw, render, render_value, DrawCommand, Recorder, Surface, SvgSurface};

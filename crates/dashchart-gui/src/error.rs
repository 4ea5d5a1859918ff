//! Error types for the dashchart GUI

use thiserror::Error;

/// GUI-related errors
#[derive(Debug, Error)]
pub enum GuiError {
    /// Viewer window could not be sized from the given settings
    #[error("Invalid window size: {width}x{height}")]
    WindowSize { width: f32, height: f32 },

    /// Iced backend error
    #[error("Iced error: {0}")]
    Iced(String),
}

/// Result type alias for GUI operations
pub type GuiResult<T> = Result<T, GuiError>;

//! Error types for dashchart
//!
//! Rendering never fails; these errors only come from the configuration
//! boundary (settings files, chart kind names, field mappings).

use thiserror::Error;

/// Configuration and I/O errors
#[derive(Debug, Error)]
pub enum ChartError {
    /// Settings file could not be read or written
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid TOML for [`crate::ChartSettings`]
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// Settings could not be serialized
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Chart kind name not recognised
    #[error("unknown chart kind '{0}', expected one of: line, bar, pie, doughnut")]
    UnknownKind(String),

    /// Source shape name not recognised
    #[error("unknown source shape '{0}', expected one of: {1}")]
    UnknownShape(String, &'static str),

    /// Field mapping string is malformed
    #[error("invalid field mapping '{0}': expected label:value[:color]")]
    InvalidMapping(String),

    /// Width, height or scale factor out of range
    #[error("invalid {name}: {value} (must be finite and greater than zero)")]
    InvalidDimension { name: &'static str, value: f64 },
}

/// Result type alias for configuration operations
pub type ChartResult<T> = Result<T, ChartError>;

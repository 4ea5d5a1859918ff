//! Chart kinds, per-render configuration and persisted settings

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Default chart height in logical pixels.
pub const DEFAULT_HEIGHT: f32 = 300.0;
/// Default surface width when no container width is known.
pub const DEFAULT_WIDTH: f32 = 600.0;

/// The supported chart rendering modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Doughnut,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [Self::Line, Self::Bar, Self::Pie, Self::Doughnut];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Pie => "pie",
            Self::Doughnut => "doughnut",
        }
    }

    /// Pie and doughnut charts are drawn radially and may carry a legend.
    #[must_use]
    pub fn is_radial(self) -> bool {
        matches!(self, Self::Pie | Self::Doughnut)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => Ok(Self::Line),
            "bar" => Ok(Self::Bar),
            "pie" => Ok(Self::Pie),
            "doughnut" | "donut" => Ok(Self::Doughnut),
            _ => Err(ChartError::UnknownKind(s.to_string())),
        }
    }
}

/// Configuration for a single render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub kind: ChartKind,
    /// Surface height in logical pixels
    pub height: f32,
    /// Legend below pie/doughnut charts; ignored for bar and line
    pub show_legend: bool,
    pub title: Option<String>,
}

impl RenderConfig {
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            height: DEFAULT_HEIGHT,
            show_legend: true,
            title: None,
        }
    }

    #[must_use]
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Logical size of a drawing surface plus the display's pixel density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
    pub scale_factor: f32,
}

impl SurfaceSize {
    /// Size with non-finite or negative dimensions clamped to zero and the
    /// scale factor defaulted to 1.
    #[must_use]
    pub fn new(width: f32, height: f32, scale_factor: f32) -> Self {
        let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let scale_factor = if scale_factor.is_finite() && scale_factor > 0.0 {
            scale_factor
        } else {
            1.0
        };
        Self {
            width: sanitize(width),
            height: sanitize(height),
            scale_factor,
        }
    }

    /// Physical pixel size after applying the scale factor.
    #[must_use]
    pub fn physical(&self) -> (f32, f32) {
        (self.width * self.scale_factor, self.height * self.scale_factor)
    }
}

/// Persisted defaults, loaded from `dashchart.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartSettings {
    /// Surface width used when rendering outside a container.
    pub width: f32,
    /// Chart height.
    pub height: f32,
    /// Display pixel density.
    pub scale_factor: f32,
    /// Legend below pie/doughnut charts.
    pub show_legend: bool,
    /// Optional default title.
    pub title: Option<String>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale_factor: 1.0,
            show_legend: true,
            title: None,
        }
    }
}

impl ChartSettings {
    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ChartResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(content: &str) -> ChartResult<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> ChartResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that all dimensions are finite and positive.
    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("scale_factor", self.scale_factor),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidDimension {
                    name,
                    value: f64::from(value),
                });
            }
        }
        Ok(())
    }

    /// Render configuration for `kind` using these defaults.
    #[must_use]
    pub fn render_config(&self, kind: ChartKind) -> RenderConfig {
        RenderConfig {
            kind,
            height: self.height,
            show_legend: self.show_legend,
            title: self.title.clone(),
        }
    }

    #[must_use]
    pub fn surface_size(&self) -> SurfaceSize {
        SurfaceSize::new(self.width, self.height, self.scale_factor)
    }

    /// Commented default settings file.
    #[must_use]
    pub fn default_file_contents() -> String {
        let defaults = Self::default();
        format!(
            "# dashchart settings\n\
             \n\
             # Surface width in logical pixels\n\
             width = {:.1}\n\
             \n\
             # Chart height in logical pixels\n\
             height = {:.1}\n\
             \n\
             # Display pixel density (2.0 for high-DPI output)\n\
             scale_factor = {:.1}\n\
             \n\
             # Show a legend below pie and doughnut charts\n\
             show_legend = {}\n\
             \n\
             # Default chart title\n\
             # title = \"Weekly activity\"\n",
            defaults.width, defaults.height, defaults.scale_factor, defaults.show_legend,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_kind_parse() {
        assert_eq!("bar".parse::<ChartKind>().unwrap(), ChartKind::Bar);
        assert_eq!(" Pie ".parse::<ChartKind>().unwrap(), ChartKind::Pie);
        assert_eq!("donut".parse::<ChartKind>().unwrap(), ChartKind::Doughnut);
        assert!(matches!(
            "area".parse::<ChartKind>(),
            Err(ChartError::UnknownKind(name)) if name == "area"
        ));
    }

    #[test]
    fn test_chart_kind_display_matches_parse() {
        for kind in ChartKind::ALL {
            assert_eq!(kind.to_string().parse::<ChartKind>().unwrap(), kind);
        }
        assert!(ChartKind::Doughnut.is_radial());
        assert!(!ChartKind::Line.is_radial());
    }

    #[test]
    fn test_render_config_defaults() {
        let config = RenderConfig::new(ChartKind::Line);
        assert!((config.height - DEFAULT_HEIGHT).abs() < f32::EPSILON);
        assert!(config.show_legend);
        assert!(config.title.is_none());
    }

    #[test]
    fn test_surface_size_sanitizes() {
        let size = SurfaceSize::new(f32::NAN, -5.0, 0.0);
        assert_eq!(size.width, 0.0);
        assert_eq!(size.height, 0.0);
        assert_eq!(size.scale_factor, 1.0);
        assert_eq!(SurfaceSize::new(100.0, 50.0, 2.0).physical(), (200.0, 100.0));
    }

    #[test]
    fn test_settings_partial_file_uses_defaults() {
        let settings = ChartSettings::from_toml_str("height = 240.0\n").unwrap();
        assert!((settings.height - 240.0).abs() < f32::EPSILON);
        assert!((settings.width - DEFAULT_WIDTH).abs() < f32::EPSILON);
        assert!(settings.show_legend);
    }

    #[test]
    fn test_settings_rejects_bad_dimensions() {
        let err = ChartSettings::from_toml_str("width = 0.0\n").unwrap_err();
        assert!(matches!(err, ChartError::InvalidDimension { name: "width", .. }));
    }

    #[test]
    fn test_settings_rejects_unknown_fields() {
        assert!(matches!(
            ChartSettings::from_toml_str("colour = \"red\"\n"),
            Err(ChartError::Parse(_))
        ));
    }

    #[test]
    fn test_default_file_parses_to_defaults() {
        let parsed = ChartSettings::from_toml_str(&ChartSettings::default_file_contents()).unwrap();
        assert_eq!(parsed, ChartSettings::default());
    }

    #[test]
    fn test_settings_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashchart.toml");
        let settings = ChartSettings {
            title: Some("Scores".to_string()),
            scale_factor: 2.0,
            ..ChartSettings::default()
        };
        std::fs::write(&path, settings.to_toml_string().unwrap()).unwrap();
        assert_eq!(ChartSettings::load(&path).unwrap(), settings);
    }
}

//! Mappings from upstream record shapes to chart data
//!
//! Dashboard endpoints return records such as `{day, hours}` or
//! `{level, count}`. A [`FieldMapping`] names which fields carry the label,
//! value and color so every shape goes through one explicit adapter.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::data::{normalize, DataPoint};
use crate::error::{ChartError, ChartResult};

/// Field names to read label, value and color from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    pub label_field: String,
    pub value_field: String,
    pub color_field: Option<String>,
}

impl FieldMapping {
    #[must_use]
    pub fn new(label_field: impl Into<String>, value_field: impl Into<String>) -> Self {
        Self {
            label_field: label_field.into(),
            value_field: value_field.into(),
            color_field: None,
        }
    }

    #[must_use]
    pub fn with_color_field(mut self, color_field: impl Into<String>) -> Self {
        self.color_field = Some(color_field.into());
        self
    }

    /// Records already in `{label, value, color}` form.
    #[must_use]
    pub fn identity() -> Self {
        Self::new("label", "value").with_color_field("color")
    }

    /// Weekly activity records: `{day, hours}`.
    #[must_use]
    pub fn weekly_activity() -> Self {
        Self::new("day", "hours")
    }

    /// Distribution by category: `{level, count}`.
    #[must_use]
    pub fn level_distribution() -> Self {
        Self::new("level", "count")
    }

    /// Score history: `{month, score}`.
    #[must_use]
    pub fn monthly_scores() -> Self {
        Self::new("month", "score")
    }

    /// Reshape a single record into `{label, value, color}`.
    fn reshape(&self, record: &Map<String, Value>) -> Value {
        let mut out = Map::new();
        if let Some(label) = record.get(&self.label_field) {
            out.insert("label".to_string(), label.clone());
        }
        if let Some(value) = record.get(&self.value_field) {
            out.insert("value".to_string(), value.clone());
        }
        if let Some(color) = self
            .color_field
            .as_ref()
            .and_then(|field| record.get(field))
        {
            out.insert("color".to_string(), color.clone());
        }
        Value::Object(out)
    }
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for FieldMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.label_field, self.value_field)?;
        if let Some(color) = &self.color_field {
            write!(f, ":{color}")?;
        }
        Ok(())
    }
}

impl FromStr for FieldMapping {
    type Err = ChartError;

    /// Parse `label:value` or `label:value:color`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(ChartError::InvalidMapping(s.to_string()));
        }
        match parts.as_slice() {
            [label, value] => Ok(Self::new(*label, *value)),
            [label, value, color] => Ok(Self::new(*label, *value).with_color_field(*color)),
            _ => Err(ChartError::InvalidMapping(s.to_string())),
        }
    }
}

/// Named upstream record shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceShape {
    Points,
    WeeklyActivity,
    LevelDistribution,
    MonthlyScores,
}

const SHAPE_NAMES: &str = "points, weekly-activity, level-distribution, monthly-scores";

impl SourceShape {
    #[must_use]
    pub fn mapping(self) -> FieldMapping {
        match self {
            Self::Points => FieldMapping::identity(),
            Self::WeeklyActivity => FieldMapping::weekly_activity(),
            Self::LevelDistribution => FieldMapping::level_distribution(),
            Self::MonthlyScores => FieldMapping::monthly_scores(),
        }
    }
}

impl FromStr for SourceShape {
    type Err = ChartError;

    fn from_str(s: &str) -> ChartResult<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "points" => Ok(Self::Points),
            "weekly-activity" => Ok(Self::WeeklyActivity),
            "level-distribution" => Ok(Self::LevelDistribution),
            "monthly-scores" => Ok(Self::MonthlyScores),
            _ => Err(ChartError::UnknownShape(s.to_string(), SHAPE_NAMES)),
        }
    }
}

/// Reshape records through `mapping`, then normalize.
///
/// Non-object elements are passed through untouched so they normalize to
/// placeholders, keeping the output the same length as the input array.
#[must_use]
pub fn adapt(input: &Value, mapping: &FieldMapping) -> Vec<DataPoint> {
    let Value::Array(items) = input else {
        return normalize(input);
    };
    let reshaped: Vec<Value> = items
        .iter()
        .map(|item| match item {
            Value::Object(record) => mapping.reshape(record),
            other => other.clone(),
        })
        .collect();
    normalize(&Value::Array(reshaped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_weekly_activity_mapping() {
        let input = json!([{"day": "Mon", "hours": 4}, {"day": "Tue", "hours": "1.5"}]);
        let points = adapt(&input, &FieldMapping::weekly_activity());
        assert_eq!(points, vec![DataPoint::new("Mon", 4.0), DataPoint::new("Tue", 1.5)]);
    }

    #[test]
    fn test_missing_fields_use_normalizer_defaults() {
        let input = json!([{"level": "A"}, {"count": 3}, 5]);
        let points = adapt(&input, &FieldMapping::level_distribution());
        assert_eq!(points[0], DataPoint::new("A", 0.0));
        assert_eq!(points[1], DataPoint::new("Item 2", 3.0));
        assert_eq!(points[2], DataPoint::new("Item 3", 0.0));
    }

    #[test]
    fn test_color_field_is_optional() {
        let input = json!([{"month": "Jan", "score": 80, "tint": "#000"}]);
        let plain = adapt(&input, &FieldMapping::monthly_scores());
        assert_eq!(plain[0].color, None);

        let tinted = adapt(&input, &FieldMapping::monthly_scores().with_color_field("tint"));
        assert_eq!(tinted[0].color.as_deref(), Some("#000"));
    }

    #[test]
    fn test_non_array_adapts_to_empty() {
        assert!(adapt(&json!({"day": "Mon"}), &FieldMapping::weekly_activity()).is_empty());
    }

    #[test]
    fn test_parse_mapping() {
        let mapping: FieldMapping = "day:hours".parse().unwrap();
        assert_eq!(mapping, FieldMapping::weekly_activity());
        let with_color: FieldMapping = "a:b:c".parse().unwrap();
        assert_eq!(with_color.to_string(), "a:b:c");
        assert!("day".parse::<FieldMapping>().is_err());
        assert!("day::".parse::<FieldMapping>().is_err());
        assert!("a:b:c:d".parse::<FieldMapping>().is_err());
    }

    #[test]
    fn test_parse_shape() {
        assert_eq!(
            "weekly_activity".parse::<SourceShape>().unwrap(),
            SourceShape::WeeklyActivity
        );
        assert_eq!(
            "Level-Distribution".parse::<SourceShape>().unwrap().mapping(),
            FieldMapping::level_distribution()
        );
        assert!(matches!(
            "grades".parse::<SourceShape>(),
            Err(ChartError::UnknownShape(name, _)) if name == "grades"
        ));
    }
}

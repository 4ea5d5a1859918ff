//! Chart input data and its normalization
//!
//! Upstream data arrives as loosely typed JSON: fields may be missing, null,
//! strings where numbers are expected, and so on. [`normalize`] coerces any
//! such input into well-formed [`DataPoint`]s and never fails.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single labelled value, optionally with its own color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Category label. Never empty after normalization.
    pub label: String,
    /// Numeric value. Always finite after normalization.
    pub value: f64,
    /// CSS color string overriding the palette.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Placeholder label for the point at zero-based `index`.
#[must_use]
pub fn placeholder_label(index: usize) -> String {
    format!("Item {}", index + 1)
}

/// Normalize arbitrary JSON into data points.
///
/// Non-array input yields an empty vec; an array yields one point per
/// element. Values that do not convert to a finite number become `0`,
/// absent or empty labels become `"Item <n>"`.
#[must_use]
pub fn normalize(input: &Value) -> Vec<DataPoint> {
    let Value::Array(items) = input else {
        if !input.is_null() {
            log::debug!("chart input is not an array, normalizing to empty");
        }
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => normalize_object(fields, index),
            _ => DataPoint::new(placeholder_label(index), 0.0),
        })
        .collect()
}

fn normalize_object(fields: &Map<String, Value>, index: usize) -> DataPoint {
    DataPoint {
        label: coerce_label(fields.get("label"), index),
        value: coerce_number(fields.get("value")),
        color: coerce_color(fields.get("color")),
    }
}

/// Apply the normalization invariants to already-typed points.
#[must_use]
pub fn normalize_points<I>(points: I) -> Vec<DataPoint>
where
    I: IntoIterator<Item = DataPoint>,
{
    points
        .into_iter()
        .enumerate()
        .map(|(index, mut point)| {
            if point.label.is_empty() {
                point.label = placeholder_label(index);
            }
            if !point.value.is_finite() {
                point.value = 0.0;
            }
            if point.color.as_deref().is_some_and(str::is_empty) {
                point.color = None;
            }
            point
        })
        .collect()
}

/// Numeric conversion with `0` as the fallback.
#[must_use]
pub fn coerce_number(value: Option<&Value>) -> f64 {
    let n = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(0.0)
            }
        }
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        _ => 0.0,
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// String conversion with the positional placeholder as the fallback.
#[must_use]
pub fn coerce_label(value: Option<&Value>, index: usize) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => placeholder_label(index),
    }
}

fn coerce_color(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_array_input_is_empty() {
        assert!(normalize(&Value::Null).is_empty());
        assert!(normalize(&json!({"label": "x", "value": 1})).is_empty());
        assert!(normalize(&json!(42)).is_empty());
        assert!(normalize(&json!("data")).is_empty());
    }

    #[test]
    fn test_length_is_preserved() {
        let input = json!([null, 3, "x", [], {}, {"value": 1}]);
        assert_eq!(normalize(&input).len(), 6);
    }

    #[test]
    fn test_value_coercion() {
        let input = json!([
            {"value": 4},
            {"value": "2.5"},
            {"value": " 7 "},
            {"value": "abc"},
            {"value": ""},
            {"value": null},
            {"value": true},
            {"value": [1]},
            {}
        ]);
        let values: Vec<f64> = normalize(&input).iter().map(|p| p.value).collect();
        assert_eq!(values, vec![4.0, 2.5, 7.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_non_finite_strings_become_zero() {
        let input = json!([{"value": "inf"}, {"value": "NaN"}, {"value": "1e999"}]);
        assert!(normalize(&input).iter().all(|p| p.value == 0.0));
    }

    #[test]
    fn test_label_coercion() {
        let input = json!([
            {"label": "Mon"},
            {"label": ""},
            {"label": null},
            {"label": 7},
            {"label": false},
            {"label": {"nested": true}},
            "bare"
        ]);
        let labels: Vec<String> = normalize(&input).into_iter().map(|p| p.label).collect();
        assert_eq!(
            labels,
            vec!["Mon", "Item 2", "Item 3", "7", "false", "Item 6", "Item 7"]
        );
    }

    #[test]
    fn test_color_kept_only_when_non_empty_string() {
        let input = json!([
            {"color": "#fff"},
            {"color": ""},
            {"color": 12},
            {}
        ]);
        let colors: Vec<Option<String>> =
            normalize(&input).into_iter().map(|p| p.color).collect();
        assert_eq!(colors, vec![Some("#fff".to_string()), None, None, None]);
    }

    #[test]
    fn test_normalize_points_repairs_typed_input() {
        let points = normalize_points(vec![
            DataPoint::new("", f64::NAN),
            DataPoint::new("B", f64::INFINITY).with_color(""),
            DataPoint::new("C", 3.0).with_color("red"),
        ]);
        assert_eq!(points[0], DataPoint::new("Item 1", 0.0));
        assert_eq!(points[1], DataPoint::new("B", 0.0));
        assert_eq!(points[2].color.as_deref(), Some("red"));
    }
}

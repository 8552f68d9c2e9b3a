//! Declarative ROI configuration: input fields, output metrics, and the
//! formula map binding them together.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Mapping of output-metric id to its formula string. Formulas reference
/// inputs via `{field_id}` placeholders over a closed arithmetic grammar.
pub type FormulaConfig = HashMap<String, String>;

/// A declared numeric input to the ROI calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoiField {
    pub id: String,
    #[serde(default)]
    pub label: String,
    pub kind: RoiFieldKind,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub default: f64,
}

impl RoiField {
    /// Clamp a supplied value into the field's declared bounds.
    pub fn clamp(&self, value: f64) -> f64 {
        let mut value = value;
        if let Some(min) = self.min {
            value = value.max(min);
        }
        if let Some(max) = self.max {
            value = value.min(max);
        }
        value
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoiFieldKind {
    Currency,
    Percentage,
    Number,
}

/// A derived output metric and how to present it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoiMetric {
    pub id: String,
    #[serde(default)]
    pub label: String,
    pub format: MetricFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricFormat {
    Currency,
    Percentage,
    Number,
    /// Day counts rendered as days, months, or years.
    Time,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_respects_declared_bounds() {
        let field = RoiField {
            id: "seats".to_owned(),
            label: "Seats".to_owned(),
            kind: RoiFieldKind::Number,
            min: Some(1.0),
            max: Some(500.0),
            default: 10.0,
        };
        assert_eq!(field.clamp(0.0), 1.0);
        assert_eq!(field.clamp(250.0), 250.0);
        assert_eq!(field.clamp(10_000.0), 500.0);
    }

    #[test]
    fn unbounded_field_passes_values_through() {
        let field = RoiField {
            id: "revenue".to_owned(),
            label: String::new(),
            kind: RoiFieldKind::Currency,
            min: None,
            max: None,
            default: 0.0,
        };
        assert_eq!(field.clamp(-50.0), -50.0);
    }
}

//! Comparison template model: named, categorized, importance-tagged
//! features used to score a fixed product set.

use serde::{Deserialize, Serialize};

/// A named group of features comparing one product category (e.g. "crm").
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTemplate {
    pub id: String,
    pub name: String,
    pub features: Vec<ComparisonFeature>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonFeature {
    pub id: String,
    pub name: String,
    pub category: String,
    pub kind: FeatureKind,
    pub importance: Importance,
}

/// How a feature's raw value is interpreted when scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Boolean,
    Rating,
    Text,
    Number,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Low,
    Medium,
    High,
    Critical,
}

impl Importance {
    /// Scoring multiplier for this importance tier.
    pub fn multiplier(&self) -> f64 {
        match self {
            Importance::Low => 0.5,
            Importance::Medium => 1.0,
            Importance::High => 1.5,
            Importance::Critical => 2.0,
        }
    }
}

//! Types for the recommendation engine.

use serde::{Deserialize, Serialize};

/// Tuning knobs for recommendation scoring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecommendationConfig {
    /// Scales audience, technical-level, feature, and integration signals.
    pub feature_match_weight: f64,
    /// Scales budget-fit and free-tier signals.
    pub pricing_weight: f64,
    /// Scales rating and popularity signals.
    pub rating_weight: f64,
    /// Products scoring below this are excluded before ranking.
    pub min_score: f64,
    /// Ranked list is truncated to this many entries.
    pub max_results: usize,
    /// Enables the diversity post-pass over the sorted list.
    pub diversity_bonus: bool,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            feature_match_weight: 1.0,
            pricing_weight: 1.0,
            rating_weight: 1.0,
            min_score: 0.0,
            max_results: super::DEFAULT_MAX_RESULTS,
            diversity_bonus: false,
        }
    }
}

/// A ranked recommendation with its scoring rationale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub product_id: String,
    pub product_name: String,
    pub vendor: String,
    /// Coarse pricing-model label, consumed by the diversity pass.
    pub pricing_model: String,
    pub score: f64,
    /// One entry per fired scoring signal.
    pub reasons: Vec<String>,
    /// 0–100, derived from score ratio and quiz completion.
    pub confidence: u8,
}

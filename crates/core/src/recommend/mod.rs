//! Product recommendation engine.
//!
//! Scores every catalog product against the final quiz answers across
//! independent additive signals, attaches a human-readable reason per fired
//! signal, computes a confidence value, and returns a ranked list with an
//! optional diversity correction.

mod diversity;
mod engine;
mod types;

pub use diversity::apply_diversity_bonus;
pub use engine::RecommendationEngine;
pub use types::{Recommendation, RecommendationConfig};

/// Default number of recommendations returned.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Normalization constant for the confidence score ratio. Carried over
/// verbatim from the original scoring model; a configuration candidate, not
/// a derived value.
pub const MAX_POSSIBLE_SCORE: f64 = 150.0;

/// Well-known question ids the scoring signals read from the answer set.
/// The questionnaire layer aligns its question ids with these.
pub mod answer_keys {
    pub const COMPANY_SIZE: &str = "company_size";
    pub const TARGET_AUDIENCE: &str = "target_audience";
    pub const TECHNICAL_LEVEL: &str = "technical_level";
    pub const BUDGET: &str = "budget";
    pub const BUDGET_PRIORITY: &str = "budget_priority";
    pub const REQUIRED_FEATURES: &str = "required_features";
    pub const INTEGRATIONS: &str = "integrations";
}

//! Decision scoring and recommendation engine for a B2B SaaS product
//! catalog.
//!
//! Pure, synchronous, stateless functions over in-memory records: quiz
//! branching with weighted category accumulation, ranked and reasoned
//! product recommendations, weighted comparison matrices with a tie-aware
//! winner rule, and formula-driven ROI projections. The caller owns
//! persistence, rendering, and request lifecycles; this crate only turns
//! ready-made snapshots of questions, products, and formulas into result
//! records.

pub mod comparison;
pub mod domain;
pub mod errors;
pub mod formula;
pub mod quiz;
pub mod recommend;
pub mod roi;
pub mod scoring;

pub use comparison::{to_csv, ComparisonEngine, ComparisonMatrix, ProductScore};
pub use domain::comparison::{ComparisonFeature, ComparisonTemplate, FeatureKind, Importance};
pub use domain::product::{
    BillingPeriod, FeatureValue, Pricing, PricingTier, Product, TechnicalLevel,
};
pub use domain::question::{
    AnswerSet, AnswerValue, BranchCondition, BranchRule, BranchingLogic, ConditionOp, Question,
    QuestionOption, RuleJoin,
};
pub use domain::roi::{FormulaConfig, MetricFormat, RoiField, RoiFieldKind, RoiMetric};
pub use errors::DomainError;
pub use quiz::{next_question, question_path, resolve_prompt, QuizTransition};
pub use recommend::{
    apply_diversity_bonus, Recommendation, RecommendationConfig, RecommendationEngine,
};
pub use roi::{
    calculate_roi, compare_scenarios, format_metric_value, generate_scenarios,
    sensitivity_analysis, Scenario, ScenarioOutcome, SensitivityAnalysis, SensitivityPoint,
};
pub use scoring::accumulate;

//! Recommendation scoring and ranking.

use std::collections::HashMap;

use tracing::debug;

use super::answer_keys;
use super::diversity::apply_diversity_bonus;
use super::types::{Recommendation, RecommendationConfig};
use super::MAX_POSSIBLE_SCORE;
use crate::domain::product::Product;
use crate::domain::question::{AnswerSet, AnswerValue, Question};
use crate::scoring::accumulate;

/// Scores products against quiz answers and returns a ranked, reasoned
/// list. Pure over its inputs; safe to call concurrently.
#[derive(Clone, Debug, Default)]
pub struct RecommendationEngine {
    config: RecommendationConfig,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RecommendationConfig) -> Self {
        Self { config }
    }

    /// Rank the catalog for the given answer set.
    ///
    /// Products below `min_score` are dropped; ranking is descending by
    /// score with catalog order breaking ties (stable sort); the optional
    /// diversity pass then perturbs the order before truncation.
    pub fn recommend(
        &self,
        products: &[Product],
        questions: &[Question],
        answers: &AnswerSet,
    ) -> Vec<Recommendation> {
        let category_scores = accumulate(answers, questions);
        let answered = questions.iter().filter(|q| answers.contains_key(&q.id)).count();
        let total = questions.len();

        let mut ranked: Vec<Recommendation> = products
            .iter()
            .map(|product| {
                let (score, reasons) = self.score_product(product, answers, &category_scores);
                debug!(product = %product.id, score, "scored product");
                Recommendation {
                    product_id: product.id.clone(),
                    product_name: product.name.clone(),
                    vendor: product.vendor.clone(),
                    pricing_model: product.pricing_model().to_owned(),
                    score,
                    reasons,
                    confidence: confidence(score, answered, total),
                }
            })
            .filter(|rec| rec.score >= self.config.min_score)
            .collect();

        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

        if self.config.diversity_bonus {
            ranked = apply_diversity_bonus(ranked);
        }

        ranked.truncate(self.config.max_results);
        ranked
    }

    /// Additive scoring across independent signals; each fired signal also
    /// emits a reason string.
    fn score_product(
        &self,
        product: &Product,
        answers: &AnswerSet,
        category_scores: &HashMap<String, f64>,
    ) -> (f64, Vec<String>) {
        let feature_weight = self.config.feature_match_weight;
        let pricing_weight = self.config.pricing_weight;
        let rating_weight = self.config.rating_weight;

        let mut score = 0.0;
        let mut reasons = Vec::new();

        if let Some(audience) = answers
            .get(answer_keys::COMPANY_SIZE)
            .or_else(|| answers.get(answer_keys::TARGET_AUDIENCE))
        {
            if product.target_audience.iter().any(|tag| audience.matches_option(tag)) {
                score += 25.0 * feature_weight;
                reasons.push(format!("Designed for {} organizations", audience.display()));
            }
        }

        if let Some(level) = answers.get(answer_keys::TECHNICAL_LEVEL) {
            if level.matches_option(product.technical_level.as_str()) {
                score += 15.0 * feature_weight;
                reasons.push("Matches your team's technical expertise".to_owned());
            }
        }

        if let Some(budget) = answers.get(answer_keys::BUDGET).and_then(AnswerValue::as_number) {
            if product.fits_budget(budget) {
                score += 20.0 * pricing_weight;
                reasons.push("Has a plan within your budget".to_owned());
            }
        }

        if product.pricing.has_free_tier && low_budget_priority(answers) {
            score += 15.0 * pricing_weight;
            reasons.push("Offers a free tier to start on".to_owned());
        }

        // Accumulated quiz weights feed in directly, one contribution per
        // category key.
        for value in category_scores.values() {
            score += value;
        }

        score += (product.rating / 5.0) * 10.0 * rating_weight;
        if product.rating >= 4.0 {
            reasons.push(format!("Rated {:.1}/5 by users", product.rating));
        }

        if product.review_count > 1000 {
            score += 5.0 * rating_weight;
            reasons.push("Trusted by a large user base".to_owned());
        }

        if let Some(required) = answers.get(answer_keys::REQUIRED_FEATURES) {
            let wanted = required.as_list();
            if !wanted.is_empty() {
                let matched =
                    wanted.iter().filter(|f| product.features.contains_key(f.as_str())).count();
                score += (matched as f64 / wanted.len() as f64) * 20.0 * feature_weight;
                if matched > 0 {
                    reasons.push(format!(
                        "Covers {matched} of {} required features",
                        wanted.len()
                    ));
                }
            }
        }

        if let Some(integrations) = answers.get(answer_keys::INTEGRATIONS) {
            let matched: Vec<String> = integrations
                .as_list()
                .into_iter()
                .filter(|name| product.integrations.iter().any(|i| i == name))
                .collect();
            if !matched.is_empty() {
                score += 3.0 * feature_weight * matched.len() as f64;
                reasons.push(format!("Integrates with {}", matched.join(", ")));
            }
        }

        (score, reasons)
    }
}

/// Whether the answers indicate price sensitivity (a low-budget priority).
fn low_budget_priority(answers: &AnswerSet) -> bool {
    answers.get(answer_keys::BUDGET_PRIORITY).is_some_and(|priority| {
        priority.matches_option("low") || priority.matches_option("free")
    })
}

/// Confidence blends how much scoring signal fired with how complete the
/// quiz was: `round(min(100, (scoreRatio * 0.7 + completion * 0.3) * 100))`.
/// Always within 0..=100.
fn confidence(score: f64, answered: usize, total: usize) -> u8 {
    let score_ratio = (score / MAX_POSSIBLE_SCORE).clamp(0.0, 1.0);
    let completion = if total == 0 { 0.0 } else { answered as f64 / total as f64 };
    let blended = (score_ratio * 0.7 + completion * 0.3) * 100.0;
    blended.clamp(0.0, 100.0).round() as u8
}

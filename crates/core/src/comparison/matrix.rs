//! Matrix construction and per-feature scoring.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::TIE_MARGIN;
use crate::domain::comparison::{ComparisonFeature, ComparisonTemplate, FeatureKind};
use crate::domain::product::{FeatureValue, Product};
use crate::errors::DomainError;

/// A built comparison: formatted cell values, 0–100 product scores, and the
/// winner (if the margin rule resolves one).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMatrix {
    pub template_id: String,
    pub template_name: String,
    pub features: Vec<ComparisonFeature>,
    /// Feature-major: `values[feature_index][product_index]`, formatted for
    /// display. Missing values render as "-".
    pub values: Vec<Vec<String>>,
    /// One entry per product, in input order.
    pub scores: Vec<ProductScore>,
    /// Winning product id, or None when the top two are within the tie
    /// margin.
    pub winner: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductScore {
    pub product_id: String,
    pub product_name: String,
    /// Normalized to 0–100 regardless of template size.
    pub score: u32,
}

/// Holds the comparison templates and builds matrices from them.
pub struct ComparisonEngine {
    templates: Vec<ComparisonTemplate>,
}

impl ComparisonEngine {
    pub fn new(templates: Vec<ComparisonTemplate>) -> Self {
        Self { templates }
    }

    fn template(&self, template_id: &str) -> Result<&ComparisonTemplate, DomainError> {
        self.templates.iter().find(|t| t.id == template_id).ok_or_else(|| {
            DomainError::TemplateNotFound { template_id: template_id.to_owned() }
        })
    }

    /// Build the comparison matrix for a fixed product set.
    ///
    /// An unknown template id is the one hard failure of the engine layer;
    /// everything else (missing features, odd value types) degrades to a
    /// zero contribution.
    pub fn build(
        &self,
        products: &[Product],
        template_id: &str,
    ) -> Result<ComparisonMatrix, DomainError> {
        let template = self.template(template_id)?;

        let max_possible: f64 =
            template.features.iter().map(|f| 10.0 * f.importance.multiplier()).sum();

        let values = template
            .features
            .iter()
            .map(|feature| {
                products.iter().map(|product| format_cell(product, feature)).collect()
            })
            .collect();

        let scores: Vec<ProductScore> = products
            .iter()
            .map(|product| {
                let total: f64 = template
                    .features
                    .iter()
                    .map(|feature| score_feature(product, feature))
                    .sum();
                let score = if max_possible > 0.0 {
                    (100.0 * total / max_possible).round() as u32
                } else {
                    0
                };
                debug!(product = %product.id, score, "scored product against template");
                ProductScore {
                    product_id: product.id.clone(),
                    product_name: product.name.clone(),
                    score,
                }
            })
            .collect();

        Ok(ComparisonMatrix {
            template_id: template.id.clone(),
            template_name: template.name.clone(),
            features: template.features.clone(),
            values,
            winner: pick_winner(&scores),
            scores,
        })
    }
}

/// Winner rule: sole product wins outright; otherwise the top product wins
/// only when it leads the runner-up by at least the tie margin.
fn pick_winner(scores: &[ProductScore]) -> Option<String> {
    let mut sorted: Vec<&ProductScore> = scores.iter().collect();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));
    match sorted.as_slice() {
        [] => None,
        [only] => Some(only.product_id.clone()),
        [top, second, ..] => {
            if (top.score as f64 - second.score as f64) < TIE_MARGIN {
                None
            } else {
                Some(top.product_id.clone())
            }
        }
    }
}

/// Raw feature value: the product's feature map first, then a small set of
/// metadata fallbacks for well-known feature ids.
fn raw_value(product: &Product, feature: &ComparisonFeature) -> Option<FeatureValue> {
    if let Some(value) = product.features.get(&feature.id) {
        return Some(value.clone());
    }
    match feature.id.as_str() {
        "rating" => Some(FeatureValue::Number(product.rating)),
        "review_count" | "reviews" => Some(FeatureValue::Number(product.review_count as f64)),
        "free_tier" | "free_plan" => Some(FeatureValue::Flag(product.pricing.has_free_tier)),
        "starting_price" | "price" => product.starting_price().map(FeatureValue::Number),
        "integrations" => Some(FeatureValue::Number(product.integrations.len() as f64)),
        _ => None,
    }
}

/// Type- and importance-aware scoring of one product × feature cell.
fn score_feature(product: &Product, feature: &ComparisonFeature) -> f64 {
    let multiplier = feature.importance.multiplier();
    let Some(value) = raw_value(product, feature) else {
        return 0.0;
    };
    match feature.kind {
        FeatureKind::Boolean => {
            let truthy = match value {
                FeatureValue::Flag(flag) => flag,
                FeatureValue::Number(n) => n != 0.0,
                FeatureValue::Text(_) => false,
            };
            if truthy {
                10.0 * multiplier
            } else {
                0.0
            }
        }
        FeatureKind::Rating => value
            .as_number()
            .map(|v| (v.clamp(0.0, 5.0) / 5.0) * 10.0 * multiplier)
            .unwrap_or(0.0),
        FeatureKind::Number => {
            value.as_number().map(|v| (v / 10.0).min(10.0) * multiplier).unwrap_or(0.0)
        }
        FeatureKind::Text => {
            if value.display().trim().is_empty() {
                0.0
            } else {
                5.0 * multiplier
            }
        }
    }
}

fn format_cell(product: &Product, feature: &ComparisonFeature) -> String {
    match raw_value(product, feature) {
        Some(FeatureValue::Number(v)) if feature.kind == FeatureKind::Rating => {
            format!("{v:.1}/5")
        }
        Some(value) => value.display(),
        None => "-".to_owned(),
    }
}

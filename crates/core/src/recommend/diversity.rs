//! Diversity re-ranking: a pure post-pass over an already-sorted list.
//!
//! Deliberately perturbs pure-score order so the top of the list is not
//! dominated by a single vendor or pricing model. Kept separate from base
//! scoring so it can be tested and toggled independently.

use std::collections::HashSet;

use super::types::Recommendation;

/// Walk the sorted list once: the first product from each not-yet-seen
/// vendor gets +2, the first product using a not-yet-seen pricing model
/// gets +1; the list is then re-sorted (stable, descending).
pub fn apply_diversity_bonus(mut ranked: Vec<Recommendation>) -> Vec<Recommendation> {
    let mut seen_vendors: HashSet<String> = HashSet::new();
    let mut seen_models: HashSet<String> = HashSet::new();

    for rec in ranked.iter_mut() {
        if seen_vendors.insert(rec.vendor.clone()) {
            rec.score += 2.0;
        }
        if seen_models.insert(rec.pricing_model.clone()) {
            rec.score += 1.0;
        }
    }

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

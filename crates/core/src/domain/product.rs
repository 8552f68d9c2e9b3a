//! Catalog product model consumed by the recommendation and comparison
//! engines. Products are plain records fetched by the caller; the engine
//! never loads or persists them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub vendor: String,
    pub pricing: Pricing,
    /// Free-form feature map: feature id to typed value.
    #[serde(default)]
    pub features: HashMap<String, FeatureValue>,
    #[serde(default)]
    pub target_audience: Vec<String>,
    pub technical_level: TechnicalLevel,
    /// Average rating in [0, 5].
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub integrations: Vec<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl Product {
    /// Lowest tier price, if any tier is declared.
    pub fn starting_price(&self) -> Option<f64> {
        self.pricing.tiers.iter().map(|tier| tier.price).fold(None, |lowest, price| {
            Some(lowest.map_or(price, |l: f64| l.min(price)))
        })
    }

    /// Whether at least one tier fits the given budget.
    pub fn fits_budget(&self, budget: f64) -> bool {
        self.pricing.tiers.iter().any(|tier| tier.price <= budget)
    }

    /// Coarse pricing-model label used by the diversity re-ranking pass.
    pub fn pricing_model(&self) -> &'static str {
        if self.pricing.has_free_tier {
            "freemium"
        } else {
            match self.pricing.tiers.first() {
                Some(tier) => tier.billing.label(),
                None => "custom",
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Pricing {
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub has_free_tier: bool,
    /// Ordered from entry tier upward.
    #[serde(default)]
    pub tiers: Vec<PricingTier>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub price: f64,
    pub billing: BillingPeriod,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingPeriod {
    Monthly,
    Annual,
    OneTime,
}

impl BillingPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "monthly",
            BillingPeriod::Annual => "annual",
            BillingPeriod::OneTime => "one_time",
        }
    }
}

/// Technical sophistication the product expects of its users.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechnicalLevel {
    Low,
    Medium,
    High,
}

impl TechnicalLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TechnicalLevel::Low => "low",
            TechnicalLevel::Medium => "medium",
            TechnicalLevel::High => "high",
        }
    }
}

/// A typed feature-map value. Rating and numeric values share the `Number`
/// representation; the comparison template's feature kind decides how a
/// value is scored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl FeatureValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FeatureValue::Number(value) if value.is_finite() => Some(*value),
            _ => None,
        }
    }

    pub fn display(&self) -> String {
        match self {
            FeatureValue::Flag(true) => "Yes".to_owned(),
            FeatureValue::Flag(false) => "No".to_owned(),
            FeatureValue::Number(value) => format!("{value}"),
            FeatureValue::Text(text) => text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(name: &str, price: f64, billing: BillingPeriod) -> PricingTier {
        PricingTier { name: name.to_owned(), price, billing }
    }

    fn product_with_tiers(tiers: Vec<PricingTier>, has_free_tier: bool) -> Product {
        Product {
            id: "p1".to_owned(),
            name: "Helplane".to_owned(),
            vendor: "Helplane Inc".to_owned(),
            pricing: Pricing { currency: "USD".to_owned(), has_free_tier, tiers },
            features: HashMap::new(),
            target_audience: Vec::new(),
            technical_level: TechnicalLevel::Low,
            rating: 4.2,
            review_count: 120,
            integrations: Vec::new(),
            metadata: serde_json::Value::Null,
        }
    }

    #[test]
    fn starting_price_is_lowest_tier() {
        let product = product_with_tiers(
            vec![tier("Pro", 49.0, BillingPeriod::Monthly), tier("Basic", 19.0, BillingPeriod::Monthly)],
            false,
        );
        assert_eq!(product.starting_price(), Some(19.0));
    }

    #[test]
    fn budget_fit_requires_one_affordable_tier() {
        let product = product_with_tiers(vec![tier("Pro", 49.0, BillingPeriod::Monthly)], false);
        assert!(product.fits_budget(50.0));
        assert!(!product.fits_budget(48.0));
    }

    #[test]
    fn pricing_model_prefers_freemium_label() {
        let freemium = product_with_tiers(vec![tier("Pro", 49.0, BillingPeriod::Monthly)], true);
        assert_eq!(freemium.pricing_model(), "freemium");

        let paid = product_with_tiers(vec![tier("Pro", 49.0, BillingPeriod::Annual)], false);
        assert_eq!(paid.pricing_model(), "annual");

        let untiered = product_with_tiers(Vec::new(), false);
        assert_eq!(untiered.pricing_model(), "custom");
    }
}

//! End-to-end flow: a branching quiz feeds accumulated category weights
//! into the recommendation engine.

use std::collections::HashMap;

use stackfit_core::{
    accumulate, AnswerSet, AnswerValue, BillingPeriod, Pricing, PricingTier, Product, Question,
    QuestionOption, RecommendationEngine, TechnicalLevel,
};

fn question(id: &str, position: u32, weights: &[(&str, f64)]) -> Question {
    Question {
        id: id.to_owned(),
        prompt: String::new(),
        position,
        required: false,
        options: vec![QuestionOption {
            value: "yes".to_owned(),
            label: "Yes".to_owned(),
            weights: weights.iter().map(|(k, v)| ((*k).to_owned(), *v)).collect(),
            next_question_id: None,
        }],
        branching: None,
    }
}

fn product(id: &str, review_count: u32) -> Product {
    Product {
        id: id.to_owned(),
        name: id.to_uppercase(),
        vendor: format!("{id} Inc"),
        pricing: Pricing {
            currency: "USD".to_owned(),
            has_free_tier: false,
            tiers: vec![PricingTier {
                name: "Team".to_owned(),
                price: 49.0,
                billing: BillingPeriod::Monthly,
            }],
        },
        features: HashMap::new(),
        target_audience: vec!["smb".to_owned()],
        technical_level: TechnicalLevel::Medium,
        rating: 4.3,
        review_count,
        integrations: Vec::new(),
        metadata: serde_json::Value::Null,
    }
}

#[test]
fn quiz_weights_flow_into_recommendations() {
    let questions = vec![
        question("q1", 1, &[("budget", 2.0)]),
        question("q2", 2, &[("budget", 3.0)]),
        question("q3", 3, &[("budget", 10.0)]),
    ];
    // Q3 is skipped: it contributes nothing.
    let answers: AnswerSet = [
        ("q1".to_owned(), AnswerValue::Text("yes".to_owned())),
        ("q2".to_owned(), AnswerValue::Text("yes".to_owned())),
    ]
    .into_iter()
    .collect();

    let totals = accumulate(&answers, &questions);
    assert_eq!(totals, [("budget".to_owned(), 5.0)].into_iter().collect());

    // Two products differing only in review count: the popular one must
    // rank strictly higher.
    let popular = product("alpha", 4_200);
    let niche = product("beta", 400);

    let engine = RecommendationEngine::new();
    let ranked = engine.recommend(&[niche, popular], &questions, &answers);

    assert_eq!(ranked[0].product_id, "alpha");
    assert!(ranked[0].score > ranked[1].score);
    assert!(ranked[0].reasons.iter().any(|r| r.contains("user base")));
    for recommendation in &ranked {
        assert!(recommendation.confidence <= 100);
    }
}

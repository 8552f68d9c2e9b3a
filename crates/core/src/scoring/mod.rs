//! Weighted category-score accumulation over answered quiz options.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::question::{AnswerSet, Question};

/// Sum the per-category weight contributions of every selected option.
///
/// For each answered question, every option the answer matches contributes
/// its full weight map (a multi-select answer can match several options).
/// Unanswered questions and answers matching no option contribute nothing.
/// Pure summation, so the result is independent of iteration order.
pub fn accumulate(answers: &AnswerSet, questions: &[Question]) -> HashMap<String, f64> {
    let mut totals: HashMap<String, f64> = HashMap::new();
    for question in questions {
        let Some(answer) = answers.get(&question.id) else {
            continue;
        };
        for option in &question.options {
            if !answer.matches_option(&option.value) {
                continue;
            }
            for (category, weight) in &option.weights {
                let entry = totals.entry(category.clone()).or_insert(0.0);
                *entry += weight;
            }
            debug!(
                question = %question.id,
                option = %option.value,
                "accumulated option weights"
            );
        }
    }
    totals
}

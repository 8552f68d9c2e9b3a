//! Branching condition evaluation: a pure pattern-match over the condition
//! sum type against the answer set.

use regex::Regex;
use tracing::debug;

use crate::domain::question::{AnswerSet, BranchCondition, BranchRule, ConditionOp, RuleJoin};

/// Whether a rule's condition set is satisfied (And = all, Or = any).
/// A rule with no conditions never fires.
pub(super) fn rule_satisfied(rule: &BranchRule, answers: &AnswerSet) -> bool {
    if rule.conditions.is_empty() {
        return false;
    }
    match rule.join {
        RuleJoin::And => rule.conditions.iter().all(|c| condition_holds(c, answers)),
        RuleJoin::Or => rule.conditions.iter().any(|c| condition_holds(c, answers)),
    }
}

/// A condition referencing an unanswered question evaluates to false, as
/// does any condition whose answer has no usable view for the operator
/// (e.g. a numeric compare against a list answer).
pub(super) fn condition_holds(condition: &BranchCondition, answers: &AnswerSet) -> bool {
    let Some(answer) = answers.get(&condition.question_id) else {
        return false;
    };
    match &condition.op {
        ConditionOp::Equals { value } => answer == value,
        ConditionOp::Contains { value } => answer.contains_value(value),
        ConditionOp::GreaterThan { value } => {
            answer.as_number().is_some_and(|answered| answered > *value)
        }
        ConditionOp::LessThan { value } => {
            answer.as_number().is_some_and(|answered| answered < *value)
        }
        ConditionOp::InRange { min, max } => answer.as_number().is_some_and(|answered| {
            answered >= *min && max.map_or(true, |upper| answered <= upper)
        }),
        ConditionOp::MatchesRegex { pattern } => match Regex::new(pattern) {
            Ok(regex) => regex.is_match(&answer.display()),
            Err(error) => {
                debug!(%pattern, %error, "invalid branching regex, treating as unmatched");
                false
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::question::AnswerValue;

    fn answers(pairs: &[(&str, AnswerValue)]) -> AnswerSet {
        pairs.iter().map(|(k, v)| ((*k).to_owned(), v.clone())).collect()
    }

    fn condition(question_id: &str, op: ConditionOp) -> BranchCondition {
        BranchCondition { question_id: question_id.to_owned(), op }
    }

    #[test]
    fn equals_is_strict() {
        let set = answers(&[("size", AnswerValue::Text("smb".to_owned()))]);
        assert!(condition_holds(
            &condition("size", ConditionOp::Equals { value: AnswerValue::Text("smb".to_owned()) }),
            &set
        ));
        assert!(!condition_holds(
            &condition("size", ConditionOp::Equals { value: AnswerValue::Text("sm".to_owned()) }),
            &set
        ));
    }

    #[test]
    fn contains_checks_membership_and_substring() {
        let list = answers(&[(
            "features",
            AnswerValue::Many(vec!["crm".to_owned(), "email".to_owned()]),
        )]);
        assert!(condition_holds(
            &condition("features", ConditionOp::Contains { value: "crm".to_owned() }),
            &list
        ));

        let text = answers(&[("notes", AnswerValue::Text("needs crm badly".to_owned()))]);
        assert!(condition_holds(
            &condition("notes", ConditionOp::Contains { value: "crm".to_owned() }),
            &text
        ));
    }

    #[test]
    fn range_is_inclusive_with_open_top_by_default() {
        let set = answers(&[("seats", AnswerValue::Number(50.0))]);
        assert!(condition_holds(
            &condition("seats", ConditionOp::InRange { min: 50.0, max: Some(100.0) }),
            &set
        ));
        assert!(condition_holds(
            &condition("seats", ConditionOp::InRange { min: 0.0, max: None }),
            &set
        ));
        assert!(!condition_holds(
            &condition("seats", ConditionOp::InRange { min: 51.0, max: None }),
            &set
        ));
    }

    #[test]
    fn unanswered_question_evaluates_false() {
        let set = AnswerSet::new();
        assert!(!condition_holds(
            &condition("missing", ConditionOp::GreaterThan { value: 0.0 }),
            &set
        ));
    }

    #[test]
    fn invalid_regex_never_panics() {
        let set = answers(&[("email", AnswerValue::Text("a@b.co".to_owned()))]);
        assert!(!condition_holds(
            &condition("email", ConditionOp::MatchesRegex { pattern: "([unclosed".to_owned() }),
            &set
        ));
        assert!(condition_holds(
            &condition("email", ConditionOp::MatchesRegex { pattern: r".+@.+\..+".to_owned() }),
            &set
        ));
    }

    #[test]
    fn empty_rule_never_fires() {
        let rule = BranchRule {
            join: RuleJoin::And,
            conditions: Vec::new(),
            end_quiz: true,
            skip_to_question_id: None,
            next_question_id: None,
        };
        assert!(!rule_satisfied(&rule, &AnswerSet::new()));
    }

    #[test]
    fn or_join_needs_only_one_condition() {
        let set = answers(&[("seats", AnswerValue::Number(5.0))]);
        let rule = BranchRule {
            join: RuleJoin::Or,
            conditions: vec![
                condition("seats", ConditionOp::GreaterThan { value: 100.0 }),
                condition("seats", ConditionOp::LessThan { value: 10.0 }),
            ],
            end_quiz: false,
            skip_to_question_id: None,
            next_question_id: Some("q9".to_owned()),
        };
        assert!(rule_satisfied(&rule, &set));
    }
}

//! Questionnaire data model: questions, options, and declarative branching.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Answers recorded so far, keyed by question id.
pub type AnswerSet = HashMap<String, AnswerValue>;

/// A recorded answer. Questionnaires hand the engine heterogeneous values:
/// free text, numeric sliders, toggles, and multi-select lists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Flag(bool),
    Number(f64),
    Text(String),
    Many(Vec<String>),
}

impl AnswerValue {
    /// Numeric view of the answer, if one exists. Text answers parse when
    /// they hold a plain number; toggles and lists have no numeric view.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(value) if value.is_finite() => Some(*value),
            AnswerValue::Text(text) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        }
    }

    /// Whether this answer selects the option with the given value token.
    /// Multi-select answers select every option whose token they contain.
    pub fn matches_option(&self, option_value: &str) -> bool {
        match self {
            AnswerValue::Text(text) => text == option_value,
            AnswerValue::Many(values) => values.iter().any(|v| v == option_value),
            AnswerValue::Number(value) => {
                option_value.trim().parse::<f64>().is_ok_and(|v| v == *value)
            }
            AnswerValue::Flag(flag) => {
                option_value.eq_ignore_ascii_case(if *flag { "true" } else { "false" })
            }
        }
    }

    /// Containment check used by `contains` branching conditions: membership
    /// for list answers, substring for text answers.
    pub fn contains_value(&self, needle: &str) -> bool {
        match self {
            AnswerValue::Many(values) => values.iter().any(|v| v == needle),
            AnswerValue::Text(text) => text.contains(needle),
            _ => false,
        }
    }

    /// List view of the answer; a scalar answer is a one-element list.
    pub fn as_list(&self) -> Vec<String> {
        match self {
            AnswerValue::Many(values) => values.clone(),
            other => vec![other.display()],
        }
    }

    /// Human-readable rendering, used for prompt placeholders and regex
    /// conditions.
    pub fn display(&self) -> String {
        match self {
            AnswerValue::Text(text) => text.clone(),
            AnswerValue::Number(value) => format!("{value}"),
            AnswerValue::Flag(flag) => flag.to_string(),
            AnswerValue::Many(values) => values.join(", "),
        }
    }
}

/// One ordered step in a quiz.
///
/// `position` values are unique within a quiz and define the linear fallback
/// order when no branching rule fires.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    /// Prompt text; may contain `{{question_id}}` tokens resolved from
    /// prior answers.
    pub prompt: String,
    pub position: u32,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    #[serde(default)]
    pub branching: Option<BranchingLogic>,
}

impl Question {
    /// The option selected by the given answer, if any.
    pub fn selected_option(&self, answer: &AnswerValue) -> Option<&QuestionOption> {
        self.options.iter().find(|option| answer.matches_option(&option.value))
    }
}

/// One selectable answer to a question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub value: String,
    #[serde(default)]
    pub label: String,
    /// Per-category signed weight contributions accumulated when this option
    /// is selected.
    #[serde(default)]
    pub weights: HashMap<String, f64>,
    /// Explicit next-question link. Always wins over branching rules.
    #[serde(default)]
    pub next_question_id: Option<String>,
}

/// Declarative branching attached to a question: rules evaluated in
/// declaration order, first satisfied rule wins.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct BranchingLogic {
    pub rules: Vec<BranchRule>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BranchRule {
    #[serde(default)]
    pub join: RuleJoin,
    pub conditions: Vec<BranchCondition>,
    /// Terminates the quiz when the rule fires. Takes precedence over the
    /// skip-to and next targets.
    #[serde(default)]
    pub end_quiz: bool,
    #[serde(default)]
    pub skip_to_question_id: Option<String>,
    #[serde(default)]
    pub next_question_id: Option<String>,
}

/// How a rule's conditions combine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleJoin {
    #[default]
    And,
    Or,
}

/// A single condition referencing another question's answer. Branching is
/// stored as data, not code: the operator is a closed sum type evaluated by
/// pattern matching.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BranchCondition {
    pub question_id: String,
    #[serde(flatten)]
    pub op: ConditionOp,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConditionOp {
    Equals {
        value: AnswerValue,
    },
    Contains {
        value: String,
    },
    GreaterThan {
        value: f64,
    },
    LessThan {
        value: f64,
    },
    /// Inclusive numeric range; bounds default to 0 and +infinity.
    InRange {
        #[serde(default)]
        min: f64,
        #[serde(default)]
        max: Option<f64>,
    },
    MatchesRegex {
        pattern: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_answer_matches_exact_option_value() {
        let answer = AnswerValue::Text("startup".to_owned());
        assert!(answer.matches_option("startup"));
        assert!(!answer.matches_option("enterprise"));
    }

    #[test]
    fn multi_select_answer_matches_each_contained_option() {
        let answer = AnswerValue::Many(vec!["crm".to_owned(), "email".to_owned()]);
        assert!(answer.matches_option("crm"));
        assert!(answer.matches_option("email"));
        assert!(!answer.matches_option("billing"));
    }

    #[test]
    fn numeric_text_answer_has_numeric_view() {
        assert_eq!(AnswerValue::Text(" 250 ".to_owned()).as_number(), Some(250.0));
        assert_eq!(AnswerValue::Text("lots".to_owned()).as_number(), None);
        assert_eq!(AnswerValue::Number(3.5).as_number(), Some(3.5));
    }

    #[test]
    fn condition_op_round_trips_through_tagged_serde() {
        let condition = BranchCondition {
            question_id: "team_size".to_owned(),
            op: ConditionOp::InRange { min: 10.0, max: Some(50.0) },
        };
        let json = serde_json::to_value(&condition).expect("serialize condition");
        assert_eq!(json["kind"], "in_range");
        let back: BranchCondition = serde_json::from_value(json).expect("deserialize condition");
        assert_eq!(back, condition);
    }

    #[test]
    fn in_range_bounds_default_to_zero_and_open_top() {
        let json = serde_json::json!({ "question_id": "budget", "kind": "in_range" });
        let condition: BranchCondition = serde_json::from_value(json).expect("deserialize");
        assert_eq!(condition.op, ConditionOp::InRange { min: 0.0, max: None });
    }
}

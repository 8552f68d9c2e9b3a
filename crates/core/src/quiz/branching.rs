//! Transition function of the quiz state machine.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::conditions::rule_satisfied;
use crate::domain::question::{AnswerSet, Question, QuestionOption};

/// Outcome of one transition step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizTransition {
    /// Advance to the question with this id.
    Question(String),
    /// The quiz is finished; no further questions.
    Complete,
}

/// Determine the next question after answering `current` with `selected`.
///
/// Precedence:
/// 1. the option's explicit `next_question_id`;
/// 2. the first satisfied branching rule, acting by terminate > skip-to >
///    next;
/// 3. linear order by position;
/// 4. completion.
///
/// A transition target that names no existing question is treated as "no
/// transition" and falls through to linear order, never an error.
pub fn next_question(
    current: &Question,
    selected: &QuestionOption,
    questions: &[Question],
    answers: &AnswerSet,
) -> QuizTransition {
    if let Some(target) = &selected.next_question_id {
        if question_exists(questions, target) {
            debug!(from = %current.id, to = %target, "explicit option link");
            return QuizTransition::Question(target.clone());
        }
        debug!(from = %current.id, to = %target, "dangling option link, falling back");
    }

    if let Some(branching) = &current.branching {
        for rule in &branching.rules {
            if !rule_satisfied(rule, answers) {
                continue;
            }
            if rule.end_quiz {
                debug!(from = %current.id, "branching rule terminates quiz");
                return QuizTransition::Complete;
            }
            let target = rule.skip_to_question_id.as_ref().or(rule.next_question_id.as_ref());
            match target {
                Some(target) if question_exists(questions, target) => {
                    debug!(from = %current.id, to = %target, "branching rule matched");
                    return QuizTransition::Question(target.clone());
                }
                _ => {
                    debug!(from = %current.id, "matched rule has no valid target, falling back");
                    break;
                }
            }
        }
    }

    linear_next(current, questions)
}

/// Linear fallback: the next question by ordinal position, or completion.
pub(super) fn linear_next(current: &Question, questions: &[Question]) -> QuizTransition {
    questions
        .iter()
        .filter(|q| q.position > current.position)
        .min_by_key(|q| q.position)
        .map(|q| QuizTransition::Question(q.id.clone()))
        .unwrap_or(QuizTransition::Complete)
}

fn question_exists(questions: &[Question], id: &str) -> bool {
    questions.iter().any(|q| q.id == id)
}

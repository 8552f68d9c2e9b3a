//! Full-path walker: repeatedly applies the transition function from the
//! first question until the quiz completes or an unanswered question is
//! reached.

use tracing::debug;

use super::branching::{linear_next, next_question, QuizTransition};
use crate::domain::question::{AnswerSet, Question};

/// Walk the quiz from its first question, following the same transition
/// precedence as [`next_question`].
///
/// Stops at the first question with no recorded answer (it is still
/// included as the pending step), on completion, or once the path holds
/// more steps than the quiz has questions, which bounds traversal of
/// misconfigured rule graphs that cycle.
pub fn question_path(questions: &[Question], answers: &AnswerSet) -> Vec<String> {
    let mut path = Vec::new();
    let Some(first) = questions.iter().min_by_key(|q| q.position) else {
        return path;
    };

    let mut current = first;
    loop {
        path.push(current.id.clone());
        if path.len() > questions.len() {
            debug!(steps = path.len(), "path exceeded question count, stopping walk");
            break;
        }
        let Some(answer) = answers.get(&current.id) else {
            break;
        };

        // An answer matching no option cannot carry an option-level link;
        // only linear order applies.
        let transition = match current.selected_option(answer) {
            Some(option) => next_question(current, option, questions, answers),
            None => linear_next(current, questions),
        };

        match transition {
            QuizTransition::Question(next_id) => {
                match questions.iter().find(|q| q.id == next_id) {
                    Some(next) => current = next,
                    None => break,
                }
            }
            QuizTransition::Complete => break,
        }
    }
    path
}

//! Quiz branching engine.
//!
//! Questions form a state machine: the current question plus the chosen
//! option determine the next question via an explicit option-level link, a
//! declarative branching rule, or linear fallback by position. Terminal
//! state is quiz completion. Dangling references never fail; they degrade
//! to linear traversal.

mod branching;
mod conditions;
mod path;

pub use branching::{next_question, QuizTransition};
pub use path::question_path;

use crate::domain::question::AnswerSet;

/// Resolve `{{question_id}}` placeholders in a prompt from prior answers.
/// Unanswered placeholders are left intact so the caller can spot them.
pub fn resolve_prompt(prompt: &str, answers: &AnswerSet) -> String {
    let mut out = String::with_capacity(prompt.len());
    let mut rest = prompt;
    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        match after.find("}}") {
            Some(close) => {
                let name = after[..close].trim();
                match answers.get(name) {
                    Some(answer) => out.push_str(&answer.display()),
                    None => {
                        out.push_str(&rest[open..open + 2 + close + 2]);
                    }
                }
                rest = &after[close + 2..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

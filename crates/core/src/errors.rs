use thiserror::Error;

/// Errors surfaced by the decision engines.
///
/// The engines prefer silent degradation (a malformed rule or formula must
/// never abort scoring for the remaining inputs), so this enum stays small.
/// `TemplateNotFound` is the one deliberate hard failure: asking for an
/// unknown comparison template is a configuration bug, not incomplete user
/// data.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("comparison template not found: {template_id}")]
    TemplateNotFound { template_id: String },
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}

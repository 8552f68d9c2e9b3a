//! Restricted arithmetic formula evaluation.
//!
//! Formulas are templates like `({revenue} - {cost}) / {cost} * 100` with
//! `{field_id}` placeholders over the grammar
//! `number | ( expr ) | unary - | expr (+|-|*|/) expr`. Substituted values
//! are rendered as plain numeric literals and the result is parsed by a
//! recursive-descent parser, so substituted input can never inject
//! operators or calls. Every failure mode (unknown character, parse error,
//! division by zero, non-finite result) collapses to 0.0 at the public
//! boundary.

mod parser;

pub use parser::FormulaError;

use std::collections::HashMap;

use tracing::debug;

/// Evaluate a formula against a flat input map. Pure and deterministic;
/// never fails — see [`try_evaluate`] for the fallible variant.
pub fn evaluate(formula: &str, inputs: &HashMap<String, f64>) -> f64 {
    match try_evaluate(formula, inputs) {
        Ok(value) => value,
        Err(error) => {
            debug!(%formula, %error, "formula rejected, resolving to 0");
            0.0
        }
    }
}

/// Evaluate a formula, surfacing parse failures. A successfully parsed
/// formula still collapses non-finite results (division by zero, overflow)
/// to 0.0.
pub fn try_evaluate(
    formula: &str,
    inputs: &HashMap<String, f64>,
) -> Result<f64, FormulaError> {
    let substituted = substitute(formula, inputs);
    let value = parser::parse_and_eval(&substituted)?;
    Ok(if value.is_finite() { value } else { 0.0 })
}

/// Replace every `{name}` token with the numeric value of `inputs[name]`.
/// Missing or non-finite inputs substitute as 0. Unterminated braces are
/// left in place and rejected by the tokenizer.
fn substitute(formula: &str, inputs: &HashMap<String, f64>) -> String {
    let mut out = String::with_capacity(formula.len());
    let mut rest = formula;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                let value = inputs.get(name).copied().filter(|v| v.is_finite()).unwrap_or(0.0);
                out.push_str(&literal(value));
                rest = &after[close + 1..];
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

/// Render a value as a literal the tokenizer accepts. Negative values are
/// parenthesized so they read as unary minus; exponent notation is avoided.
fn literal(value: f64) -> String {
    let rendered = format!("{value}");
    let rendered =
        if rendered.contains('e') || rendered.contains('E') { format!("{value:.6}") } else { rendered };
    if value < 0.0 {
        format!("({rendered})")
    } else {
        rendered
    }
}

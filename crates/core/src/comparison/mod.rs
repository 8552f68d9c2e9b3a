//! Comparison matrix engine: scores a fixed product set against a named
//! feature template and declares a winner under a minimum-margin rule.

mod export;
mod matrix;

pub use export::to_csv;
pub use matrix::{ComparisonEngine, ComparisonMatrix, ProductScore};

/// Minimum score gap between the top two products for a winner to be
/// declared; below this the comparison is a tie. Carried over verbatim
/// from the original model; a configuration candidate, not a derived value.
pub const TIE_MARGIN: f64 = 5.0;

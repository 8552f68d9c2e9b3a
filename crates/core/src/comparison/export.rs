//! CSV export of a built comparison matrix.
//!
//! The one externally-facing wire format of the engine: double-quoted
//! fields, header row `Feature,Category,<product names...>`, one row per
//! feature grouped by category, trailing overall-score row.

use csv::{QuoteStyle, WriterBuilder};

use super::matrix::ComparisonMatrix;
use crate::errors::DomainError;

pub fn to_csv(matrix: &ComparisonMatrix) -> Result<String, DomainError> {
    let mut writer =
        WriterBuilder::new().quote_style(QuoteStyle::Always).from_writer(Vec::new());

    let mut header = vec!["Feature".to_owned(), "Category".to_owned()];
    header.extend(matrix.scores.iter().map(|s| s.product_name.clone()));
    writer.write_record(&header).map_err(export_error)?;

    // Group by category, preserving first-seen order.
    let mut categories: Vec<&str> = Vec::new();
    for feature in &matrix.features {
        if !categories.contains(&feature.category.as_str()) {
            categories.push(&feature.category);
        }
    }

    for category in categories {
        for (index, feature) in matrix.features.iter().enumerate() {
            if feature.category != category {
                continue;
            }
            let mut row = vec![feature.name.clone(), feature.category.clone()];
            row.extend(matrix.values[index].iter().cloned());
            writer.write_record(&row).map_err(export_error)?;
        }
    }

    let mut totals = vec!["Overall Score".to_owned(), String::new()];
    totals.extend(matrix.scores.iter().map(|s| s.score.to_string()));
    writer.write_record(&totals).map_err(export_error)?;

    let bytes = writer
        .into_inner()
        .map_err(|e| DomainError::InvariantViolation(format!("csv export failed: {}", e.error())))?;
    String::from_utf8(bytes).map_err(|e| DomainError::InvariantViolation(e.to_string()))
}

fn export_error(error: csv::Error) -> DomainError {
    DomainError::InvariantViolation(format!("csv export failed: {error}"))
}

//! Presentation-only formatting of computed metric values.

use crate::domain::roi::MetricFormat;

/// Render a metric value for display: grouped currency with no decimals,
/// one-decimal percentages, grouped plain numbers, and day counts bucketed
/// into days / months / years at the 30- and 365-day thresholds.
pub fn format_metric_value(value: f64, format: MetricFormat) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    match format {
        MetricFormat::Currency => format!("${}", group_thousands(value.round())),
        MetricFormat::Percentage => format!("{value:.1}%"),
        MetricFormat::Number => {
            if value.fract() == 0.0 {
                group_thousands(value)
            } else {
                format!("{value:.1}")
            }
        }
        MetricFormat::Time => format_days(value),
    }
}

fn format_days(days: f64) -> String {
    if days < 30.0 {
        format!("{days:.0} days")
    } else if days < 365.0 {
        format!("{:.1} months", days / 30.0)
    } else {
        format!("{:.1} years", days / 365.0)
    }
}

/// Comma-group the integer part of a value; used instead of a locale layer.
fn group_thousands(value: f64) -> String {
    let negative = value < 0.0;
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, c) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative && grouped != "0" {
        format!("-{grouped}")
    } else {
        grouped
    }
}

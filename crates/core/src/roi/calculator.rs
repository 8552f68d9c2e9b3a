//! Metric evaluation, scenarios, and sensitivity sweeps.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::roi::{FormulaConfig, RoiField};
use crate::formula;

/// Evaluate every formula in the config and return metric-id -> value.
///
/// Inputs are normalized against the field declarations first: a missing
/// input takes the field's default, and supplied values clamp to declared
/// bounds. An unresolvable formula yields 0 for that metric only; the rest
/// of the calculation always completes.
pub fn calculate_roi(
    fields: &[RoiField],
    config: &FormulaConfig,
    inputs: &HashMap<String, f64>,
) -> HashMap<String, f64> {
    let normalized = normalize_inputs(fields, inputs);
    config
        .iter()
        .map(|(metric_id, formula)| {
            let value = formula::evaluate(formula, &normalized);
            debug!(metric = %metric_id, value, "evaluated roi metric");
            (metric_id.clone(), value)
        })
        .collect()
}

fn normalize_inputs(fields: &[RoiField], inputs: &HashMap<String, f64>) -> HashMap<String, f64> {
    let mut normalized: HashMap<String, f64> = HashMap::new();
    for field in fields {
        let supplied = inputs.get(&field.id).copied().filter(|v| v.is_finite());
        normalized.insert(field.id.clone(), field.clamp(supplied.unwrap_or(field.default)));
    }
    // Undeclared inputs pass through untouched so ad-hoc formula fields
    // still resolve.
    for (key, value) in inputs {
        if value.is_finite() {
            normalized.entry(key.clone()).or_insert(*value);
        }
    }
    normalized
}

/// One what-if scenario: the base inputs with a single field overridden.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub label: String,
    pub field_id: String,
    pub inputs: HashMap<String, f64>,
}

/// A scenario with its evaluated metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub metrics: HashMap<String, f64>,
}

/// Produce one scenario per candidate value of `field_id`, each copying the
/// base inputs with only that field overridden.
pub fn generate_scenarios(
    base_inputs: &HashMap<String, f64>,
    field_id: &str,
    values: &[f64],
) -> Vec<Scenario> {
    values
        .iter()
        .map(|value| {
            let mut inputs = base_inputs.clone();
            inputs.insert(field_id.to_owned(), *value);
            Scenario {
                label: format!("{field_id} = {value}"),
                field_id: field_id.to_owned(),
                inputs,
            }
        })
        .collect()
}

/// Re-run the metric evaluation for each scenario.
pub fn compare_scenarios(
    scenarios: &[Scenario],
    fields: &[RoiField],
    config: &FormulaConfig,
) -> Vec<ScenarioOutcome> {
    scenarios
        .iter()
        .map(|scenario| ScenarioOutcome {
            scenario: scenario.clone(),
            metrics: calculate_roi(fields, config, &scenario.inputs),
        })
        .collect()
}

/// A five-point finite-difference sensitivity sweep around the base value
/// of one input. Not a derivative; each point is a full re-evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensitivityAnalysis {
    pub field_id: String,
    pub base_value: f64,
    pub points: Vec<SensitivityPoint>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    /// Percentage delta applied to the base value.
    pub delta_pct: f64,
    pub input_value: f64,
    pub metrics: HashMap<String, f64>,
}

/// Perturb `field_id` by {-pct, -pct/2, 0, +pct/2, +pct} percent and
/// re-evaluate every metric at each point.
pub fn sensitivity_analysis(
    base_inputs: &HashMap<String, f64>,
    field_id: &str,
    fields: &[RoiField],
    config: &FormulaConfig,
    pct: f64,
) -> SensitivityAnalysis {
    let base_value = normalize_inputs(fields, base_inputs)
        .get(field_id)
        .copied()
        .unwrap_or(0.0);

    let deltas = [-pct, -pct / 2.0, 0.0, pct / 2.0, pct];
    let points = deltas
        .iter()
        .map(|delta| {
            let input_value = base_value * (1.0 + delta / 100.0);
            let mut inputs = base_inputs.clone();
            inputs.insert(field_id.to_owned(), input_value);
            SensitivityPoint {
                delta_pct: *delta,
                input_value,
                metrics: calculate_roi(fields, config, &inputs),
            }
        })
        .collect();

    SensitivityAnalysis { field_id: field_id.to_owned(), base_value, points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roi::RoiFieldKind;

    fn field(id: &str, default: f64) -> RoiField {
        RoiField {
            id: id.to_owned(),
            label: id.to_owned(),
            kind: RoiFieldKind::Number,
            min: None,
            max: None,
            default,
        }
    }

    fn config(pairs: &[(&str, &str)]) -> FormulaConfig {
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
    }

    fn inputs(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| ((*k).to_owned(), *v)).collect()
    }

    #[test]
    fn evaluates_every_metric_in_the_config() {
        let fields = vec![field("revenue", 0.0), field("cost", 0.0)];
        let config = config(&[
            ("profit", "{revenue} - {cost}"),
            ("roi_pct", "({revenue} - {cost}) / {cost} * 100"),
        ]);
        let metrics =
            calculate_roi(&fields, &config, &inputs(&[("revenue", 1500.0), ("cost", 1000.0)]));

        assert_eq!(metrics.get("profit"), Some(&500.0));
        assert_eq!(metrics.get("roi_pct"), Some(&50.0));
    }

    #[test]
    fn broken_formula_zeroes_only_its_metric() {
        let fields = vec![field("revenue", 0.0)];
        let config = config(&[("good", "{revenue} * 2"), ("bad", "{revenue} ** oops")]);
        let metrics = calculate_roi(&fields, &config, &inputs(&[("revenue", 10.0)]));

        assert_eq!(metrics.get("good"), Some(&20.0));
        assert_eq!(metrics.get("bad"), Some(&0.0));
    }

    #[test]
    fn defaults_fill_missing_inputs() {
        let fields = vec![field("seats", 25.0)];
        let config = config(&[("licenses", "{seats} * 12")]);
        let metrics = calculate_roi(&fields, &config, &HashMap::new());
        assert_eq!(metrics.get("licenses"), Some(&300.0));
    }

    #[test]
    fn scenario_with_base_value_reproduces_baseline() {
        let fields = vec![field("cost", 0.0), field("revenue", 0.0)];
        let config = config(&[("profit", "{revenue} - {cost}")]);
        let base = inputs(&[("revenue", 2000.0), ("cost", 800.0)]);

        let baseline = calculate_roi(&fields, &config, &base);
        let scenarios = generate_scenarios(&base, "cost", &[800.0, 1200.0]);
        let outcomes = compare_scenarios(&scenarios, &fields, &config);

        assert_eq!(outcomes[0].metrics, baseline);
        assert_eq!(outcomes[1].metrics.get("profit"), Some(&800.0));
    }

    #[test]
    fn sensitivity_sweep_produces_five_symmetric_points() {
        let fields = vec![field("cost", 0.0), field("revenue", 0.0)];
        let config = config(&[("profit", "{revenue} - {cost}")]);
        let base = inputs(&[("revenue", 1000.0), ("cost", 400.0)]);

        let analysis = sensitivity_analysis(&base, "cost", &fields, &config, 20.0);

        assert_eq!(analysis.base_value, 400.0);
        let deltas: Vec<f64> = analysis.points.iter().map(|p| p.delta_pct).collect();
        assert_eq!(deltas, vec![-20.0, -10.0, 0.0, 10.0, 20.0]);
        assert_eq!(analysis.points[2].metrics.get("profit"), Some(&600.0));
        assert_eq!(analysis.points[0].metrics.get("profit"), Some(&680.0));
        assert_eq!(analysis.points[4].metrics.get("profit"), Some(&520.0));
    }
}

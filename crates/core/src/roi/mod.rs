//! ROI calculator: evaluates declarative formula sets over user inputs and
//! supports scenario generation and sensitivity sweeps by re-invoking the
//! same evaluation path.

mod calculator;
mod format;

pub use calculator::{
    calculate_roi, compare_scenarios, generate_scenarios, sensitivity_analysis, Scenario,
    ScenarioOutcome, SensitivityAnalysis, SensitivityPoint,
};
pub use format::format_metric_value;

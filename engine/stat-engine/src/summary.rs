//! Small distribution summaries used by the season reports.

use serde::{Deserialize, Serialize};

/// Arithmetic mean; an empty sample reads 0.0.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator).
///
/// Fewer than two observations have no spread to estimate, so the result
/// is pinned to 0.0 to keep report artifacts finite.
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = mean(values);
    let variance = values.iter().map(|value| (value - mean).powi(2)).sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Mean, spread and season total of one weekly delta series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DeltaSummary {
    pub average: f64,
    pub std: f64,
    pub total: f64,
}

impl DeltaSummary {
    pub fn describe(values: &[f64]) -> Self {
        Self { average: mean(values), std: sample_std(values), total: values.iter().sum() }
    }
}

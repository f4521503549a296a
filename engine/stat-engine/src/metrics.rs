//! The safe-ratio primitive and the normalized metric sheet it fills.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Names of the normalized metrics, shared by the normalizer and every
/// downstream consumer (aggregation, benchmarks, elite detection).
pub mod keys {
    pub const QBR: &str = "QBR";
    pub const PASSING_PCT: &str = "passing_pct";
    pub const COMPLETION_PCT: &str = "completion_pct";
    pub const INTERCEPTION_PCT: &str = "interception_pct";
    pub const PASSING_YDS_PER_GAME: &str = "passing_yds_per_game";
    pub const RUSHING_PCT: &str = "rushing_pct";
    pub const RUSH_YDS_PER_ATTEMPT: &str = "rush_yds_per_attempt";
    pub const RUSH_YDS_PER_GAME: &str = "rush_yds_per_game";
    pub const STUFFS_PCT: &str = "stuffs_pct";
    pub const RBR: &str = "RBR";
    pub const WRR: &str = "WRR";
    pub const PLAY_PCT: &str = "play_pct";
    pub const YDS_PER_GAME: &str = "yds_per_game";
    pub const RUSHING_YDS_PER_GAME: &str = "rushing_yds_per_game";
    pub const RUSHING_YDS_PER_ATTEMPT: &str = "rushing_yds_per_attempt";
    pub const RUSHING_FUMBLES_PCT: &str = "rushing_fumbles_pct";
    pub const RECEPTION_PCT: &str = "reception_pct";
    pub const YDS_PER_RECEPTION: &str = "yds_per_reception";
    pub const YDS_AFTER_CATCH: &str = "yds_after_catch";
    pub const RECEIVING_YDS_PER_GAME: &str = "receiving_yds_per_game";
    pub const FUMBLES: &str = "fumbles";
    pub const TACKLES: &str = "tackles";
    pub const INTERCEPTIONS: &str = "interceptions";
    pub const PASSES_DEFENDED: &str = "passes_defended";
    pub const SACKS: &str = "sacks";
    pub const QB_HITS: &str = "qb_hits";
    pub const TACKLES_FOR_LOSS: &str = "tackles_for_loss";
    pub const STUFFS: &str = "stuffs";
}

/// Total division over possibly-missing operands.
///
/// Returns `a / b` when both operands are present and the quotient is
/// finite; everything else (missing operand, zero denominator, non-finite
/// quotient) reads as 0.0. The result is always finite, so sheets built
/// from it always serialize.
pub fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> f64 {
    match (numerator, denominator) {
        (Some(a), Some(b)) => {
            let quotient = a / b;
            if quotient.is_finite() {
                quotient
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

/// One player's normalized, position-relative metric sheet.
///
/// Ratio-derived metrics are always present for the player's position
/// schema, degrading to 0.0 when inputs are missing. Raw pass-through
/// metrics (provider ratings, yards per game) are present only when the
/// provider reported the underlying stat, so their absence stays visible
/// to benchmarks and elite detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricSet {
    metrics: BTreeMap<String, f64>,
}

impl MetricSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, metric: &str) -> Option<f64> {
        self.metrics.get(metric).copied()
    }

    /// Missing metrics read as 0.0 for accumulation.
    pub fn get_or_zero(&self, metric: &str) -> f64 {
        self.get(metric).unwrap_or(0.0)
    }

    pub fn insert(&mut self, metric: impl Into<String>, value: f64) {
        self.metrics.insert(metric.into(), value);
    }

    /// Insert a raw pass-through metric; absent raw stats stay absent.
    pub fn insert_raw(&mut self, metric: impl Into<String>, value: Option<f64>) {
        if let Some(value) = value {
            self.metrics.insert(metric.into(), value);
        }
    }

    /// Builder-style insert, mostly for tests and fixtures.
    pub fn with(mut self, metric: impl Into<String>, value: f64) -> Self {
        self.insert(metric, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.metrics.iter().map(|(metric, value)| (metric.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

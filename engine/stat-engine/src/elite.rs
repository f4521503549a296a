//! Benchmark-beating athlete detection.

use crate::benchmark::BenchmarkTable;
use crate::metrics::MetricSet;
use league_model::{PlayerDetails, PlayerId, Position};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One flagged player under one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EliteEntry {
    pub name: String,
    pub position: Position,
    /// The metric value that beat the threshold
    pub stat: f64,
}

/// Flagged players grouped by metric name, then keyed by player id.
pub type EliteTable = BTreeMap<String, BTreeMap<PlayerId, EliteEntry>>;

/// Flag every player whose metric strictly beats their position's
/// benchmark threshold.
///
/// Meeting a threshold exactly is not enough, in either direction: the
/// comparison is `>` even for metrics where lower would be better. Players
/// whose position has no benchmark row, and metrics missing from the
/// benchmark row, are skipped rather than flagged.
pub fn find_elite(
    metrics: &BTreeMap<PlayerId, MetricSet>,
    benchmarks: &BenchmarkTable,
    details: &BTreeMap<PlayerId, PlayerDetails>,
) -> EliteTable {
    let mut table = EliteTable::new();
    for (id, sheet) in metrics {
        let Some(player) = details.get(id) else { continue };
        let Some(thresholds) = benchmarks.get(&player.position) else { continue };

        for (metric, value) in sheet.iter() {
            let Some(&threshold) = thresholds.get(metric) else { continue };
            if value > threshold {
                table.entry(metric.to_string()).or_default().insert(
                    id.clone(),
                    EliteEntry {
                        name: player.name.clone(),
                        position: player.position.clone(),
                        stat: value,
                    },
                );
            }
        }
    }
    table
}

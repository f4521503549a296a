//! League-wide percentile benchmarks per position.

use crate::metrics::MetricSet;
use league_model::{PlayerDetails, PlayerId, Position};
use std::collections::{BTreeMap, BTreeSet};

/// 90th-percentile thresholds: position, then metric name.
pub type BenchmarkTable = BTreeMap<Position, BTreeMap<String, f64>>;

/// Players at this depth rank or deeper never shape a benchmark pool.
const MAX_BENCHMARK_DEPTH: u32 = 4;

/// The percentile each benchmark threshold is drawn at.
const BENCHMARK_QUANTILE: f64 = 0.9;

/// Linear-interpolation quantile of a sample, NumPy style: the rank is
/// `q * (n - 1)` and fractional ranks interpolate between neighbors.
/// Returns `None` for an empty sample. Sorts in place.
pub fn quantile(values: &mut [f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let rank = q * (values.len() - 1) as f64;
    let below = rank.floor() as usize;
    let above = rank.ceil() as usize;
    if below == above {
        return Some(values[below]);
    }
    let fraction = rank - below as f64;
    Some(values[below] + (values[above] - values[below]) * fraction)
}

/// Compute per-position benchmark thresholds from the league's normalized
/// sheets.
///
/// Only players ranked inside the top of their depth chart contribute, so
/// thin garbage-time samples never drag thresholds down. A player missing
/// a particular metric is simply absent from that metric's pool, and a
/// position with no contributing players is absent from the table.
pub fn compute_benchmarks(
    metrics: &BTreeMap<PlayerId, MetricSet>,
    details: &BTreeMap<PlayerId, PlayerDetails>,
) -> BenchmarkTable {
    let mut pools: BTreeMap<&Position, Vec<&MetricSet>> = BTreeMap::new();
    for (id, sheet) in metrics {
        if sheet.is_empty() {
            continue;
        }
        let Some(player) = details.get(id) else { continue };
        if player.depth >= MAX_BENCHMARK_DEPTH {
            continue;
        }
        pools.entry(&player.position).or_default().push(sheet);
    }

    let mut table = BenchmarkTable::new();
    for (position, sheets) in pools {
        let names: BTreeSet<&str> =
            sheets.iter().flat_map(|sheet| sheet.iter().map(|(name, _)| name)).collect();

        let mut thresholds = BTreeMap::new();
        for name in names {
            let mut pool: Vec<f64> =
                sheets.iter().filter_map(|sheet| sheet.get(name)).collect();
            if let Some(threshold) = quantile(&mut pool, BENCHMARK_QUANTILE) {
                thresholds.insert(name.to_string(), threshold);
            }
        }
        table.insert(position.clone(), thresholds);
    }
    table
}

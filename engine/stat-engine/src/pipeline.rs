//! One full weekly processing pass over stored league data.

use crate::aggregate::{TeamAccumulator, TeamComposite};
use crate::benchmark::{compute_benchmarks, BenchmarkTable};
use crate::elite::{find_elite, EliteTable};
use crate::metrics::{keys, MetricSet};
use crate::normalize::{normalize, TeamContext};
use crate::rank::{rank_all, RankTable};
use crate::report::{
    defense_performance, offensive_line_performance, DefensePerformance, OffensiveLineReport,
};
use league_model::stat_sheet::stat_names as raw;
use league_model::{DepthChart, PlayerDetails, PlayerId, Position, SeasonResults, StatSnapshot, TeamName};
use std::collections::BTreeMap;
use tracing::info;

/// Everything one weekly pass reads. All inputs are taken as already
/// loaded; the pass itself never touches disk or network.
#[derive(Debug, Clone, Default)]
pub struct WeeklyInputs {
    pub week: u32,
    /// Cumulative raw sheets from the latest pull
    pub raw_stats: StatSnapshot,
    /// Flattened depth-chart rows for every rostered player
    pub details: BTreeMap<PlayerId, PlayerDetails>,
    /// The current league depth chart
    pub depth_chart: DepthChart,
    /// The chart frozen for `week`, used by the line report
    pub week_depth_chart: DepthChart,
    /// Season-to-date game results
    pub results: SeasonResults,
    /// Weekly raw-stat snapshots recorded so far, keyed by week
    pub season_snapshots: BTreeMap<u32, StatSnapshot>,
}

/// Everything one weekly pass produces.
#[derive(Debug, Clone, Default)]
pub struct WeeklyOutputs {
    pub normalized: BTreeMap<PlayerId, MetricSet>,
    pub benchmarks: BenchmarkTable,
    pub top_athletes: EliteTable,
    pub composites: BTreeMap<TeamName, TeamComposite>,
    pub ranks: RankTable,
    pub defense_performance: BTreeMap<TeamName, DefensePerformance>,
    pub offensive_line: BTreeMap<TeamName, OffensiveLineReport>,
}

/// Run the whole weekly pass: normalize, benchmark, flag, aggregate,
/// rank, then build the two delta reports.
pub fn run_week(inputs: &WeeklyInputs) -> WeeklyOutputs {
    info!("processing week {} ({} raw sheets)", inputs.week, inputs.raw_stats.len());

    let normalized = normalize_league(&inputs.raw_stats, &inputs.details, &inputs.depth_chart);
    info!("normalized {} metric sheets", normalized.len());

    let benchmarks = compute_benchmarks(&normalized, &inputs.details);
    let top_athletes = find_elite(&normalized, &benchmarks, &inputs.details);
    info!("benchmarked {} positions, {} metrics with standouts", benchmarks.len(), top_athletes.len());

    let composites = aggregate_teams(&inputs.depth_chart, &inputs.details, &normalized);
    let ranks = rank_all(&composites);
    info!("aggregated and ranked {} teams", composites.len());

    let offensive_line = offensive_line_performance(
        inputs.week,
        &inputs.week_depth_chart,
        &inputs.results,
        &inputs.season_snapshots,
    );
    let defense = defense_performance(&inputs.results, &inputs.depth_chart, &inputs.season_snapshots);
    info!("built delta reports for {} lines, {} defenses", offensive_line.len(), defense.len());

    WeeklyOutputs {
        normalized,
        benchmarks,
        top_athletes,
        composites,
        ranks,
        defense_performance: defense,
        offensive_line,
    }
}

/// Normalize every player the league knows about. Sheets without a
/// depth-chart row are dropped; their team and position are unknowable.
pub fn normalize_league(
    raw_stats: &StatSnapshot,
    details: &BTreeMap<PlayerId, PlayerDetails>,
    depth_chart: &DepthChart,
) -> BTreeMap<PlayerId, MetricSet> {
    let mut normalized = BTreeMap::new();
    for (id, sheet) in raw_stats {
        let Some(player) = details.get(id) else { continue };
        let context = team_context(&player.team, depth_chart, raw_stats);
        normalized.insert(id.clone(), normalize(sheet, &player.position, context));
    }
    normalized
}

/// Aggregate normalized sheets into per-team composite indices.
///
/// A player counts only while listed on the chart, available (healthy or
/// questionable) and carrying a non-empty metric sheet. Chart position
/// decides routing: backs rush, receivers receive, tight ends do both,
/// the rank-1 quarterback sets the passing game and every defender feeds
/// both defensive indices.
pub fn aggregate_teams(
    depth_chart: &DepthChart,
    details: &BTreeMap<PlayerId, PlayerDetails>,
    normalized: &BTreeMap<PlayerId, MetricSet>,
) -> BTreeMap<TeamName, TeamComposite> {
    let mut composites = BTreeMap::new();
    for (team, _) in depth_chart.teams() {
        let starter_interception_pct = depth_chart
            .starter(team, &Position::Quarterback)
            .and_then(|slot| normalized.get(&slot.id))
            .map(|sheet| sheet.get_or_zero(keys::INTERCEPTION_PCT))
            .unwrap_or(0.0);

        let mut accumulator =
            TeamAccumulator::new(team.clone(), normalized, starter_interception_pct);
        for (position, rank, slot) in depth_chart.team_slots(team) {
            let Some(player) = details.get(&slot.id) else { continue };
            if !player.status.is_available() {
                continue;
            }
            if !normalized.get(&slot.id).is_some_and(|sheet| !sheet.is_empty()) {
                continue;
            }

            match position {
                Position::RunningBack => accumulator.add_rushing(&slot.id),
                Position::WideReceiver => accumulator.add_receiving(&slot.id),
                Position::TightEnd => {
                    accumulator.add_rushing(&slot.id);
                    accumulator.add_receiving(&slot.id);
                }
                Position::Quarterback if rank == "1" => accumulator.set_quarterback(&slot.id),
                p if p.is_defense() => {
                    accumulator.add_passing_defense(&slot.id);
                    accumulator.add_rushing_defense(&slot.id);
                }
                _ => {}
            }
        }
        composites.insert(team.clone(), accumulator.composite());
    }
    composites
}

/// Offensive play shares are measured against the starting quarterback's
/// raw play count.
fn team_context(team: &str, depth_chart: &DepthChart, raw_stats: &StatSnapshot) -> TeamContext {
    let qb_total_plays = depth_chart
        .starter(team, &Position::Quarterback)
        .and_then(|slot| raw_stats.get(&slot.id))
        .and_then(|sheet| sheet.get(raw::TOTAL_OFFENSIVE_PLAYS));
    TeamContext::new(qb_total_plays)
}

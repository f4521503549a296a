//! Season reports built from week-over-week snapshot deltas.

use crate::delta::DeltaAccumulator;
use crate::summary::DeltaSummary;
use league_model::{DepthChart, PlayerId, Position, SeasonResults, StatSnapshot, TeamName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// What one team's defense has allowed, summarized over the season.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DefensePerformance {
    /// Ground yards allowed per week
    pub rushing: DeltaSummary,
    /// Receiving yards allowed per week
    pub passing: DeltaSummary,
}

/// One team's line play for a single week.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OffensiveLineReport {
    /// Starting linemen by position
    pub offensive_lineman: BTreeMap<Position, PlayerId>,
    /// Ground yards the whole roster produced behind this line
    pub offense_rushing: f64,
    /// Sacks the opposing front seven recorded
    pub qb_sacks: f64,
}

/// Summarize what every defense allowed, week by week.
///
/// For each game a team played, the opposing roster's rushing and
/// receiving growth that week is what the team's defense gave up. Weeks
/// whose snapshot pair is incomplete, and opponents with no depth chart,
/// are left out of the series instead of polluting it with zeros.
pub fn defense_performance(
    results: &SeasonResults,
    depth_chart: &DepthChart,
    snapshots: &BTreeMap<u32, StatSnapshot>,
) -> BTreeMap<TeamName, DefensePerformance> {
    let mut report = BTreeMap::new();
    for (team, weeks) in results {
        let mut rushing = Vec::new();
        let mut receiving = Vec::new();
        for (week, result) in weeks {
            let Some(pair) = snapshot_pair(snapshots, *week) else { continue };
            if depth_chart.team(&result.opponent).is_none() {
                warn!("no depth chart for {}, skipping week {} of {}", result.opponent, week, team);
                continue;
            }

            let mut deltas = DeltaAccumulator::new(pair.0, pair.1);
            for (_, _, slot) in depth_chart.team_slots(&result.opponent) {
                deltas.add_rushing(&slot.id);
                deltas.add_receiving(&slot.id);
            }
            let totals = deltas.totals();
            rushing.push(totals.rushing);
            receiving.push(totals.receiving);
        }

        report.insert(
            team.clone(),
            DefensePerformance {
                rushing: DeltaSummary::describe(&rushing),
                passing: DeltaSummary::describe(&receiving),
            },
        );
    }
    report
}

/// Measure every line's week: the roster's ground production and the
/// sacks the opposing front seven got through.
///
/// The chart must be the one frozen for this week; rosters shift, and a
/// later chart would credit the wrong starters. Teams on a bye are
/// absent from the result.
pub fn offensive_line_performance(
    week: u32,
    week_depth_chart: &DepthChart,
    results: &SeasonResults,
    snapshots: &BTreeMap<u32, StatSnapshot>,
) -> BTreeMap<TeamName, OffensiveLineReport> {
    let Some((previous, current)) = snapshot_pair(snapshots, week) else {
        warn!("missing stat snapshots around week {week}, skipping line report");
        return BTreeMap::new();
    };

    let mut report = BTreeMap::new();
    for (team, _) in week_depth_chart.teams() {
        let Some(result) = results.get(team).and_then(|weeks| weeks.get(&week)) else {
            continue;
        };

        let mut deltas = DeltaAccumulator::new(previous, current);
        let mut linemen = BTreeMap::new();
        for (position, rank, slot) in week_depth_chart.team_slots(team) {
            if position.is_offensive_line() && rank == "1" {
                linemen.insert(position.clone(), slot.id.clone());
            }
            deltas.add_rushing(&slot.id);
        }
        for (position, _, slot) in week_depth_chart.team_slots(&result.opponent) {
            if position.is_defensive_front() {
                deltas.add_sacks(&slot.id);
            }
        }

        let totals = deltas.totals();
        report.insert(
            team.clone(),
            OffensiveLineReport {
                offensive_lineman: linemen,
                offense_rushing: totals.rushing,
                qb_sacks: totals.sacks,
            },
        );
    }
    report
}

/// The snapshots either side of a week boundary, when both exist.
fn snapshot_pair(
    snapshots: &BTreeMap<u32, StatSnapshot>,
    week: u32,
) -> Option<(&StatSnapshot, &StatSnapshot)> {
    let previous = snapshots.get(&week.checked_sub(1)?)?;
    let current = snapshots.get(&week)?;
    Some((previous, current))
}

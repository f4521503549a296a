//! Roster-to-team composite accumulation.

use crate::metrics::{keys, MetricSet};
use league_model::{PlayerId, TeamName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The five composite indices computed per team each week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamComposite {
    pub quarterback: f64,
    pub receiving: f64,
    pub rushing: f64,
    pub passing_defense: f64,
    pub rushing_defense: f64,
}

impl TeamComposite {
    pub fn value(&self, metric: CompositeMetric) -> f64 {
        match metric {
            CompositeMetric::Quarterback => self.quarterback,
            CompositeMetric::Receiving => self.receiving,
            CompositeMetric::Rushing => self.rushing,
            CompositeMetric::PassingDefense => self.passing_defense,
            CompositeMetric::RushingDefense => self.rushing_defense,
        }
    }
}

/// Selector for one composite index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositeMetric {
    Quarterback,
    Receiving,
    Rushing,
    PassingDefense,
    RushingDefense,
}

impl CompositeMetric {
    pub const ALL: [CompositeMetric; 5] = [
        CompositeMetric::Quarterback,
        CompositeMetric::Receiving,
        CompositeMetric::Rushing,
        CompositeMetric::PassingDefense,
        CompositeMetric::RushingDefense,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompositeMetric::Quarterback => "quarterback",
            CompositeMetric::Receiving => "receiving",
            CompositeMetric::Rushing => "rushing",
            CompositeMetric::PassingDefense => "passing_defense",
            CompositeMetric::RushingDefense => "rushing_defense",
        }
    }
}

impl fmt::Display for CompositeMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accumulates one team's composite indices over its weekly roster.
///
/// Offensive contributions follow `impact * (1 - risk)`; defensive
/// contributions are plain per-game sums. The quarterback index is
/// single-assignment (last starter wins), the other four add across every
/// routed player. Players missing from the metric map contribute zero.
pub struct TeamAccumulator<'a> {
    team: TeamName,
    metrics: &'a BTreeMap<PlayerId, MetricSet>,
    starter_interception_pct: f64,
    composite: TeamComposite,
}

impl<'a> TeamAccumulator<'a> {
    /// `starter_interception_pct` is the starting quarterback's normalized
    /// interception share, which scales receiving risk for the whole team.
    pub fn new(
        team: impl Into<TeamName>,
        metrics: &'a BTreeMap<PlayerId, MetricSet>,
        starter_interception_pct: f64,
    ) -> Self {
        Self { team: team.into(), metrics, starter_interception_pct, composite: TeamComposite::default() }
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    /// The indices accumulated so far.
    pub fn composite(&self) -> TeamComposite {
        self.composite
    }

    fn metric(&self, id: &str, name: &str) -> f64 {
        self.metrics.get(id).map(|sheet| sheet.get_or_zero(name)).unwrap_or(0.0)
    }

    /// Set the quarterback index from the starter's sheet. Calling this
    /// again replaces the value rather than adding to it.
    pub fn set_quarterback(&mut self, id: &str) {
        let impact =
            self.metric(id, keys::PASSING_YDS_PER_GAME) + self.metric(id, keys::RUSH_YDS_PER_GAME);
        let risk = self.metric(id, keys::STUFFS_PCT) + self.metric(id, keys::INTERCEPTION_PCT);
        self.composite.quarterback = impact * (1.0 - risk);
    }

    pub fn add_rushing(&mut self, id: &str) {
        let impact = self.metric(id, keys::RUSHING_YDS_PER_GAME);
        let risk =
            self.metric(id, keys::RUSHING_FUMBLES_PCT) + self.metric(id, keys::STUFFS_PCT);
        self.composite.rushing += impact * (1.0 - risk);
    }

    pub fn add_receiving(&mut self, id: &str) {
        let impact = self.metric(id, keys::RECEIVING_YDS_PER_GAME);
        let risk = self.metric(id, keys::PLAY_PCT) * self.starter_interception_pct;
        self.composite.receiving += impact * (1.0 - risk);
    }

    pub fn add_passing_defense(&mut self, id: &str) {
        for name in [keys::INTERCEPTIONS, keys::SACKS, keys::QB_HITS, keys::PASSES_DEFENDED] {
            self.composite.passing_defense += self.metric(id, name);
        }
    }

    pub fn add_rushing_defense(&mut self, id: &str) {
        for name in [keys::FUMBLES, keys::TACKLES, keys::TACKLES_FOR_LOSS, keys::STUFFS] {
            self.composite.rushing_defense += self.metric(id, name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::keys;

    const EPSILON: f64 = 1e-9;

    fn metric_map(entries: Vec<(&str, MetricSet)>) -> BTreeMap<PlayerId, MetricSet> {
        entries.into_iter().map(|(id, sheet)| (id.to_string(), sheet)).collect()
    }

    #[test]
    fn test_quarterback_index_discounts_impact_by_risk() {
        let metrics = metric_map(vec![(
            "qb1",
            MetricSet::new()
                .with(keys::PASSING_YDS_PER_GAME, 250.0)
                .with(keys::RUSH_YDS_PER_GAME, 20.0)
                .with(keys::STUFFS_PCT, 0.05)
                .with(keys::INTERCEPTION_PCT, 0.03),
        )]);

        let mut accumulator = TeamAccumulator::new("chicago bears", &metrics, 0.03);
        accumulator.set_quarterback("qb1");

        // 270 yards of impact at 8% combined risk
        assert!((accumulator.composite().quarterback - 248.4).abs() < EPSILON);
    }

    #[test]
    fn test_quarterback_index_is_overwritten_not_added() {
        let metrics = metric_map(vec![
            ("qb1", MetricSet::new().with(keys::PASSING_YDS_PER_GAME, 300.0)),
            ("qb2", MetricSet::new().with(keys::PASSING_YDS_PER_GAME, 100.0)),
        ]);

        let mut accumulator = TeamAccumulator::new("chicago bears", &metrics, 0.0);
        accumulator.set_quarterback("qb1");
        accumulator.set_quarterback("qb2");

        assert!((accumulator.composite().quarterback - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_rushing_index_adds_across_backs() {
        let metrics = metric_map(vec![
            ("rb1", MetricSet::new().with(keys::RUSHING_YDS_PER_GAME, 80.0)),
            ("rb2", MetricSet::new().with(keys::RUSHING_YDS_PER_GAME, 40.0)),
        ]);

        let mut accumulator = TeamAccumulator::new("chicago bears", &metrics, 0.0);
        accumulator.add_rushing("rb1");
        accumulator.add_rushing("rb2");

        assert!((accumulator.composite().rushing - 120.0).abs() < EPSILON);
    }

    #[test]
    fn test_receiving_risk_scales_with_starter_interceptions() {
        let sheet = MetricSet::new()
            .with(keys::RECEIVING_YDS_PER_GAME, 100.0)
            .with(keys::PLAY_PCT, 0.5);
        let metrics = metric_map(vec![("wr1", sheet)]);

        let mut careful = TeamAccumulator::new("chicago bears", &metrics, 0.0);
        careful.add_receiving("wr1");
        assert!((careful.composite().receiving - 100.0).abs() < EPSILON);

        let mut turnover_prone = TeamAccumulator::new("chicago bears", &metrics, 0.1);
        turnover_prone.add_receiving("wr1");
        assert!((turnover_prone.composite().receiving - 95.0).abs() < EPSILON);
    }

    #[test]
    fn test_defense_indices_sum_the_per_game_counters() {
        let metrics = metric_map(vec![(
            "lb1",
            MetricSet::new()
                .with(keys::INTERCEPTIONS, 0.2)
                .with(keys::SACKS, 0.6)
                .with(keys::QB_HITS, 1.1)
                .with(keys::PASSES_DEFENDED, 0.4)
                .with(keys::FUMBLES, 0.1)
                .with(keys::TACKLES, 7.5)
                .with(keys::TACKLES_FOR_LOSS, 0.8)
                .with(keys::STUFFS, 0.3),
        )]);

        let mut accumulator = TeamAccumulator::new("chicago bears", &metrics, 0.0);
        accumulator.add_passing_defense("lb1");
        accumulator.add_rushing_defense("lb1");

        let composite = accumulator.composite();
        assert!((composite.passing_defense - 2.3).abs() < EPSILON);
        assert!((composite.rushing_defense - 8.7).abs() < EPSILON);
    }

    #[test]
    fn test_accumulation_order_does_not_matter() {
        let metrics = metric_map(vec![
            ("d1", MetricSet::new().with(keys::TACKLES, 5.0)),
            ("d2", MetricSet::new().with(keys::TACKLES, 3.0)),
            ("d3", MetricSet::new().with(keys::TACKLES, 1.5)),
        ]);

        let mut forward = TeamAccumulator::new("chicago bears", &metrics, 0.0);
        for id in ["d1", "d2", "d3"] {
            forward.add_rushing_defense(id);
        }
        let mut reverse = TeamAccumulator::new("chicago bears", &metrics, 0.0);
        for id in ["d3", "d2", "d1"] {
            reverse.add_rushing_defense(id);
        }

        assert!(
            (forward.composite().rushing_defense - reverse.composite().rushing_defense).abs()
                < EPSILON
        );
    }

    #[test]
    fn test_unknown_player_contributes_nothing() {
        let metrics = metric_map(vec![]);
        let mut accumulator = TeamAccumulator::new("chicago bears", &metrics, 0.0);
        accumulator.add_rushing("ghost");
        accumulator.add_passing_defense("ghost");
        accumulator.set_quarterback("ghost");

        assert_eq!(accumulator.composite(), TeamComposite::default());
    }
}

//! Dense team ranking over the composite indices.

use crate::aggregate::{CompositeMetric, TeamComposite};
use league_model::TeamName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One team's rank under one composite index, with the backing value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankEntry {
    /// Dense rank; 1 is the highest composite value
    pub rank: u32,
    /// The composite value the rank was assigned from
    pub stat: f64,
}

/// Ranks for every composite index: metric name, then team.
pub type RankTable = BTreeMap<String, BTreeMap<TeamName, RankEntry>>;

/// Rank every team on one composite index.
///
/// Ranks are the dense sequence 1..=n with rank 1 for the highest value.
/// The sort is stable over the alphabetical team order, so tied values
/// rank deterministically on every run.
pub fn rank_teams(
    composites: &BTreeMap<TeamName, TeamComposite>,
    metric: CompositeMetric,
) -> BTreeMap<TeamName, RankEntry> {
    let mut ordered: Vec<(&TeamName, f64)> =
        composites.iter().map(|(team, composite)| (team, composite.value(metric))).collect();
    ordered.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut table = BTreeMap::new();
    let mut rank = ordered.len() as u32;
    for (team, stat) in ordered {
        table.insert(team.clone(), RankEntry { rank, stat });
        rank -= 1;
    }
    table
}

/// Rank every team on all five composite indices.
pub fn rank_all(composites: &BTreeMap<TeamName, TeamComposite>) -> RankTable {
    CompositeMetric::ALL
        .iter()
        .map(|metric| (metric.as_str().to_string(), rank_teams(composites, *metric)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composites(rushing: Vec<(&str, f64)>) -> BTreeMap<TeamName, TeamComposite> {
        rushing
            .into_iter()
            .map(|(team, value)| {
                (team.to_string(), TeamComposite { rushing: value, ..TeamComposite::default() })
            })
            .collect()
    }

    #[test]
    fn test_highest_value_gets_rank_one() {
        let composites =
            composites(vec![("bears", 80.0), ("lions", 140.0), ("packers", 110.0)]);
        let ranks = rank_teams(&composites, CompositeMetric::Rushing);

        assert_eq!(ranks["lions"].rank, 1);
        assert_eq!(ranks["packers"].rank, 2);
        assert_eq!(ranks["bears"].rank, 3);
        assert_eq!(ranks["lions"].stat, 140.0);
    }

    #[test]
    fn test_ranks_are_a_dense_permutation() {
        let composites = composites(vec![
            ("a", 5.0),
            ("b", 3.0),
            ("c", 9.0),
            ("d", 1.0),
            ("e", 7.0),
        ]);
        let ranks = rank_teams(&composites, CompositeMetric::Rushing);

        let mut seen: Vec<u32> = ranks.values().map(|entry| entry.rank).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_ties_rank_deterministically() {
        let composites = composites(vec![("bears", 50.0), ("lions", 50.0), ("packers", 80.0)]);

        let first = rank_teams(&composites, CompositeMetric::Rushing);
        let second = rank_teams(&composites, CompositeMetric::Rushing);
        assert_eq!(first, second);

        // tied teams still occupy distinct dense ranks
        let mut tied: Vec<u32> =
            [&first["bears"], &first["lions"]].iter().map(|entry| entry.rank).collect();
        tied.sort_unstable();
        assert_eq!(tied, vec![2, 3]);
        assert_eq!(first["packers"].rank, 1);
    }

    #[test]
    fn test_every_composite_index_is_ranked() {
        let composites = composites(vec![("bears", 50.0), ("lions", 60.0)]);
        let table = rank_all(&composites);

        assert_eq!(table.len(), 5);
        for metric in CompositeMetric::ALL {
            assert_eq!(table[metric.as_str()].len(), 2);
        }
        // the zeroed quarterback index still ranks both teams
        assert!(table["quarterback"].contains_key("bears"));
    }
}

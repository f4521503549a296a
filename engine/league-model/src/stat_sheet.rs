use crate::PlayerId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Provider stat names the pipeline reads off raw sheets.
///
/// These are ESPN's camelCase field names, kept verbatim so stored sheets
/// stay directly comparable with the upstream API.
pub mod stat_names {
    pub const QBR: &str = "QBR";
    pub const PASSING_ATTEMPTS: &str = "passingAttempts";
    pub const TOTAL_OFFENSIVE_PLAYS: &str = "totalOffensivePlays";
    pub const COMPLETIONS: &str = "completions";
    pub const INTERCEPTION_PCT: &str = "interceptionPct";
    pub const PASSING_YARDS: &str = "passingYards";
    pub const GAMES_PLAYED: &str = "gamesPlayed";
    pub const RUSHING_ATTEMPTS: &str = "rushingAttempts";
    pub const RUSHING_YARDS: &str = "rushingYards";
    pub const STUFFS: &str = "stuffs";
    pub const RB_RATING: &str = "ESPNRBRating";
    pub const WR_RATING: &str = "ESPNWRRating";
    pub const RECEIVING_TARGETS: &str = "receivingTargets";
    pub const YARDS_PER_GAME: &str = "yardsPerGame";
    pub const RUSHING_FUMBLES: &str = "rushingFumbles";
    pub const RECEPTIONS: &str = "receptions";
    pub const RECEIVING_YARDS: &str = "receivingYards";
    pub const RECEIVING_YARDS_AFTER_CATCH: &str = "receivingYardsAfterCatch";
    pub const FUMBLES_FORCED: &str = "fumblesForced";
    pub const TOTAL_TACKLES: &str = "totalTackles";
    pub const INTERCEPTIONS: &str = "interceptions";
    pub const PASSES_DEFENDED: &str = "passesDefended";
    pub const SACKS: &str = "sacks";
    pub const QB_HITS: &str = "QBHits";
    pub const TACKLES_FOR_LOSS: &str = "tacklesForLoss";
}

/// One athlete's cumulative season-to-date stat line, keyed by provider
/// stat name. Absent keys mean the provider never reported the stat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatSheet {
    stats: BTreeMap<String, f64>,
}

impl StatSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one stat; `None` when the provider never reported it.
    pub fn get(&self, stat: &str) -> Option<f64> {
        self.stats.get(stat).copied()
    }

    pub fn insert(&mut self, stat: impl Into<String>, value: f64) {
        self.stats.insert(stat.into(), value);
    }

    /// Builder-style insert, mostly for tests and fixtures.
    pub fn with(mut self, stat: impl Into<String>, value: f64) -> Self {
        self.insert(stat, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.stats.iter().map(|(stat, value)| (stat.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

/// The league-wide stat sheets captured in one weekly pull.
pub type StatSnapshot = BTreeMap<PlayerId, StatSheet>;

//! Week-over-week growth of cumulative stat counters.
//!
//! Weekly snapshots hold season-to-date totals, so one week's production
//! is the difference between two consecutive snapshots. Presence is judged
//! per player and stat: a counter seen in both snapshots yields
//! `current - previous`, a counter debuting this week yields its full
//! current value, and anything else yields zero.

use league_model::stat_sheet::stat_names as raw;
use league_model::StatSnapshot;
use serde::{Deserialize, Serialize};

/// Summed weekly growth of the three counters the reports track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DeltaTotals {
    pub rushing: f64,
    pub receiving: f64,
    pub sacks: f64,
}

/// Accumulates roster-level weekly growth between two snapshots.
pub struct DeltaAccumulator<'a> {
    previous: &'a StatSnapshot,
    current: &'a StatSnapshot,
    totals: DeltaTotals,
}

impl<'a> DeltaAccumulator<'a> {
    pub fn new(previous: &'a StatSnapshot, current: &'a StatSnapshot) -> Self {
        Self { previous, current, totals: DeltaTotals::default() }
    }

    /// This week's growth of one cumulative counter for one player.
    pub fn delta(&self, stat: &str, id: &str) -> f64 {
        let current = self.current.get(id).and_then(|sheet| sheet.get(stat));
        let previous = self.previous.get(id).and_then(|sheet| sheet.get(stat));
        match (current, previous) {
            (Some(current), Some(previous)) => current - previous,
            (Some(current), None) => current,
            _ => 0.0,
        }
    }

    pub fn add_rushing(&mut self, id: &str) {
        self.totals.rushing += self.delta(raw::RUSHING_YARDS, id);
    }

    pub fn add_receiving(&mut self, id: &str) {
        self.totals.receiving += self.delta(raw::RECEIVING_YARDS, id);
    }

    pub fn add_sacks(&mut self, id: &str) {
        self.totals.sacks += self.delta(raw::SACKS, id);
    }

    pub fn totals(&self) -> DeltaTotals {
        self.totals
    }
}

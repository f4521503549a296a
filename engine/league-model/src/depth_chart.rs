use crate::player::PlayerStatus;
use crate::position::Position;
use crate::{DepthRank, PlayerId, TeamName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One depth-chart slot: a single athlete at one rank of one position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthSlot {
    /// Provider athlete id
    pub id: PlayerId,
    /// Player name, lowercased
    pub name: String,
    /// Health status for the week
    pub status: PlayerStatus,
    /// ISO-8601 date of the current injury, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injury_date: Option<String>,
    /// Provider API reference for this athlete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_ref: Option<String>,
}

/// One team's chart: position, then depth rank ("1", "2", ...), then slot.
pub type TeamDepthChart = BTreeMap<Position, BTreeMap<DepthRank, DepthSlot>>;

/// The full league depth chart, keyed by team name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepthChart {
    teams: BTreeMap<TeamName, TeamDepthChart>,
}

impl DepthChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team(&self, team: &str) -> Option<&TeamDepthChart> {
        self.teams.get(team)
    }

    pub fn teams(&self) -> impl Iterator<Item = (&TeamName, &TeamDepthChart)> {
        self.teams.iter()
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// The rank-1 athlete for a position, if the team lists one.
    pub fn starter(&self, team: &str, position: &Position) -> Option<&DepthSlot> {
        self.teams.get(team)?.get(position)?.get("1")
    }

    /// Every slot on one team's chart, in position order then rank order.
    pub fn team_slots<'a>(
        &'a self,
        team: &str,
    ) -> impl Iterator<Item = (&'a Position, &'a DepthRank, &'a DepthSlot)> {
        self.teams
            .get(team)
            .into_iter()
            .flatten()
            .flat_map(|(position, ranks)| {
                ranks.iter().map(move |(rank, slot)| (position, rank, slot))
            })
    }

    pub fn insert_slot(
        &mut self,
        team: impl Into<TeamName>,
        position: Position,
        rank: impl Into<DepthRank>,
        slot: DepthSlot,
    ) {
        self.teams
            .entry(team.into())
            .or_default()
            .entry(position)
            .or_default()
            .insert(rank.into(), slot);
    }
}

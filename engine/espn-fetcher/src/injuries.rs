//! Expanded injury report for sidelined players.
//!
//! Depth-chart pulls only capture a status label and a date. For anyone
//! not healthy, the athlete's overview payload adds the body part, the
//! expected return date, and the beat-writer comment.

use std::collections::BTreeMap;

use league_model::{PlayerDetails, PlayerId, Position, TeamName};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything known about one player's current injury.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjuryEntry {
    pub name: String,
    pub team: TeamName,
    pub position: Position,
    pub depth: u32,
    /// Fantasy status wording from the injury payload, lowercased
    pub status: Option<String>,
    /// Day the injury was reported, time component dropped
    pub injury_date: Option<String>,
    pub body_part: Option<String>,
    pub return_date: Option<String>,
    pub comments: Option<String>,
}

/// Injury entries keyed by athlete id.
pub type InjuryReport = BTreeMap<PlayerId, InjuryEntry>;

/// Combines a player's depth-chart details with the injury object from
/// their overview payload. Absent fields stay `None` so a sparse payload
/// still produces an entry.
pub fn injury_entry(details: &PlayerDetails, injury: &Value) -> InjuryEntry {
    InjuryEntry {
        name: details.name.clone(),
        team: details.team.clone(),
        position: details.position.clone(),
        depth: details.depth,
        status: injury
            .pointer("/details/fantasyStatus/description")
            .and_then(Value::as_str)
            .map(|status| status.to_lowercase()),
        injury_date: details.injury_day().map(str::to_string),
        body_part: injury.pointer("/details/type").and_then(Value::as_str).map(str::to_string),
        return_date: injury
            .pointer("/details/returnDate")
            .and_then(Value::as_str)
            .map(str::to_string),
        comments: injury.get("longComment").and_then(Value::as_str).map(str::to_string),
    }
}

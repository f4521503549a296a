use crate::position::Position;
use crate::TeamName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Health status as listed on the provider depth chart.
///
/// Anything beyond the two playable states (out, injured reserve,
/// suspended, ...) lands in `Other` with the provider's wording kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlayerStatus {
    Healthy,
    Questionable,
    Other(String),
}

impl PlayerStatus {
    /// Whether the player counts toward team scores this week.
    pub fn is_available(&self) -> bool {
        matches!(self, PlayerStatus::Healthy | PlayerStatus::Questionable)
    }
}

impl From<&str> for PlayerStatus {
    fn from(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "healthy" => PlayerStatus::Healthy,
            "questionable" => PlayerStatus::Questionable,
            other => PlayerStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for PlayerStatus {
    fn from(label: String) -> Self {
        PlayerStatus::from(label.as_str())
    }
}

impl From<PlayerStatus> for String {
    fn from(status: PlayerStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerStatus::Healthy => f.write_str("healthy"),
            PlayerStatus::Questionable => f.write_str("questionable"),
            PlayerStatus::Other(label) => f.write_str(label),
        }
    }
}

/// One flattened depth-chart row: everything known about a rostered player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDetails {
    /// Player name, lowercased (e.g. "bijan robinson")
    pub name: String,
    /// Full lowercase team name (e.g. "atlanta falcons")
    pub team: TeamName,
    /// Depth-chart position
    pub position: Position,
    /// 1-based depth rank (1 = starter)
    pub depth: u32,
    /// Health status from the depth chart
    pub status: PlayerStatus,
    /// ISO-8601 date of the current injury, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injury_date: Option<String>,
    /// Provider API reference for this athlete, used for detail lookups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_ref: Option<String>,
}

impl PlayerDetails {
    /// Calendar day of the injury date, with any time component dropped.
    pub fn injury_day(&self) -> Option<&str> {
        self.injury_date.as_deref().map(|date| date.split('T').next().unwrap_or(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_availability() {
        assert!(PlayerStatus::Healthy.is_available());
        assert!(PlayerStatus::Questionable.is_available());
        assert!(!PlayerStatus::from("Out").is_available());
        assert!(!PlayerStatus::from("Injured Reserve").is_available());
    }

    #[test]
    fn test_status_parse_normalizes_case() {
        assert_eq!(PlayerStatus::from("Healthy"), PlayerStatus::Healthy);
        assert_eq!(PlayerStatus::from(" QUESTIONABLE "), PlayerStatus::Questionable);
        assert_eq!(PlayerStatus::from("Doubtful"), PlayerStatus::Other("doubtful".to_string()));
    }

    #[test]
    fn test_injury_day_strips_time() {
        let details = PlayerDetails {
            name: "test player".to_string(),
            team: "atlanta falcons".to_string(),
            position: Position::RunningBack,
            depth: 1,
            status: PlayerStatus::Questionable,
            injury_date: Some("2025-11-09T20:15Z".to_string()),
            api_ref: None,
        };
        assert_eq!(details.injury_day(), Some("2025-11-09"));
    }

    #[test]
    fn test_details_serde_round_trip() {
        let details = PlayerDetails {
            name: "test player".to_string(),
            team: "chicago bears".to_string(),
            position: Position::FreeSafety,
            depth: 2,
            status: PlayerStatus::Healthy,
            injury_date: None,
            api_ref: Some("http://example.invalid/athletes/1".to_string()),
        };
        let json = serde_json::to_string(&details).unwrap();
        assert!(!json.contains("injury_date"));
        let back: PlayerDetails = serde_json::from_str(&json).unwrap();
        assert_eq!(back, details);
    }
}

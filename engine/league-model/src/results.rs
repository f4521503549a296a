use crate::TeamName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Win-loss record strings as the provider reports them ("8-2", "5-0").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecords {
    pub overall: String,
    pub home: String,
    pub away: String,
}

/// Points scored in one period of a game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineScore {
    pub value: f64,
}

/// One team's side of a final score line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    /// Full lowercase name of the opposing team
    pub opponent: TeamName,
    /// "home" or "away", as reported
    pub home_away: String,
    /// Final score for this team, kept as the provider's string
    pub score: String,
    /// Records after this game
    pub records: TeamRecords,
    /// Per-period scoring
    #[serde(default)]
    pub linescores: Vec<LineScore>,
}

/// One team's results keyed by week number.
pub type TeamResults = BTreeMap<u32, GameResult>;

/// Season-to-date results for every team.
pub type SeasonResults = BTreeMap<TeamName, TeamResults>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_keys_serialize_as_strings() {
        let result = GameResult {
            opponent: "green bay packers".to_string(),
            home_away: "home".to_string(),
            score: "24".to_string(),
            records: TeamRecords {
                overall: "8-2".to_string(),
                home: "4-1".to_string(),
                away: "4-1".to_string(),
            },
            linescores: vec![LineScore { value: 7.0 }, LineScore { value: 17.0 }],
        };

        let mut weeks = TeamResults::new();
        weeks.insert(11, result);

        let json = serde_json::to_string(&weeks).unwrap();
        assert!(json.starts_with("{\"11\":"));

        let back: TeamResults = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(&11).unwrap().opponent, "green bay packers");
    }
}

use serde::{Deserialize, Serialize};

/// Where the feed pulls from and which slice of the season it pulls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Core API root, already scoped to NFL seasons
    pub core_api_url: String,
    /// Site API scoreboard endpoint for the current week
    pub scoreboard_url: String,
    /// CBS schedule page root
    pub schedule_url: String,
    /// Season year
    pub year: u16,
    /// Week being recorded
    pub week: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            core_api_url: "https://sports.core.api.espn.com/v2/sports/football/leagues/nfl/seasons/".to_string(),
            scoreboard_url: "https://site.api.espn.com/apis/site/v2/sports/football/nfl/scoreboard".to_string(),
            schedule_url: "https://www.cbssports.com/nfl/schedule/".to_string(),
            year: 2025,
            week: 1,
        }
    }
}

impl FeedConfig {
    /// Build a config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(year) = std::env::var("LEAGUE_YEAR").ok().and_then(|v| v.parse().ok()) {
            config.year = year;
        }
        if let Some(week) = std::env::var("LEAGUE_WEEK").ok().and_then(|v| v.parse().ok()) {
            config.week = week;
        }
        config
    }

    /// Season phase label; weeks past 17 belong to the postseason.
    pub fn season(&self) -> &'static str {
        if self.week > 17 {
            "postseason"
        } else {
            "regular"
        }
    }

    /// ESPN's numeric season type (2 = regular, 3 = postseason).
    pub fn season_type(&self) -> u8 {
        if self.week > 17 {
            3
        } else {
            2
        }
    }

    pub fn is_postseason(&self) -> bool {
        self.week > 17
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_espn() {
        let config = FeedConfig::default();
        assert!(config.core_api_url.contains("sports.core.api.espn.com"));
        assert!(config.scoreboard_url.ends_with("/scoreboard"));
        assert_eq!(config.week, 1);
    }

    #[test]
    fn test_season_flips_after_week_17() {
        let mut config = FeedConfig { week: 17, ..FeedConfig::default() };
        assert_eq!(config.season(), "regular");
        assert_eq!(config.season_type(), 2);
        assert!(!config.is_postseason());

        config.week = 18;
        assert_eq!(config.season(), "postseason");
        assert_eq!(config.season_type(), 3);
        assert!(config.is_postseason());
    }
}

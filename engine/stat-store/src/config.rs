//! Configuration for the artifact store

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Filesystem layout of the league database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base directory for all artifacts
    pub data_dir: PathBuf,

    /// Season year, which names the weekly snapshot directories
    pub year: u16,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { data_dir: PathBuf::from("./db"), year: 2025 }
    }
}

impl StoreConfig {
    /// Create a configuration with a custom data directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into(), ..Default::default() }
    }

    /// Load configuration from environment variables, falling back to
    /// defaults (LEAGUE_DATA_DIR, LEAGUE_YEAR)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let data_dir = std::env::var("LEAGUE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let year = std::env::var("LEAGUE_YEAR")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.year);
        Self { data_dir, year }
    }

    /// Directory holding the weekly raw-stat snapshots
    pub fn stats_snapshot_dir(&self) -> PathBuf {
        self.data_dir.join(format!("{}_stats", self.year))
    }

    /// Directory holding the weekly depth-chart snapshots
    pub fn depth_chart_snapshot_dir(&self) -> PathBuf {
        self.data_dir.join(format!("{}_depth_charts", self.year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_dirs_carry_the_year() {
        let config = StoreConfig { data_dir: PathBuf::from("/tmp/league"), year: 2024 };
        assert_eq!(config.stats_snapshot_dir(), PathBuf::from("/tmp/league/2024_stats"));
        assert_eq!(
            config.depth_chart_snapshot_dir(),
            PathBuf::from("/tmp/league/2024_depth_charts")
        );
    }
}

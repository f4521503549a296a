//! The JSON artifact store backing the weekly pipeline.

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use chrono::Utc;
use league_model::{DepthChart, StatSnapshot, TeamName};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Names of the flat artifacts, without their `.json` extension.
pub mod artifact {
    pub const STATS: &str = "stats";
    pub const PLAYER_DETAILS: &str = "player_details";
    pub const DEPTH_CHART: &str = "depth_chart";
    pub const FILTERED_STATS: &str = "filtered_stats";
    pub const PROCESSED_STATS: &str = "processed_stats";
    pub const BENCHMARK_STATS: &str = "benchmark_stats";
    pub const TOP_ATHLETES: &str = "top_athletes";
    pub const WEEKLY_RANKS: &str = "weekly_ranks";
    pub const RESULTS: &str = "results";
    pub const DEFENSE_PERFORMANCE: &str = "defense_performance";
    pub const OFFENSIVE_LINE_PERFORMANCE: &str = "offensive_line_performance";
    pub const SCHEDULE: &str = "schedule";
    pub const INJURIES: &str = "injuries";
    pub const TIMESTAMPS: &str = "timestamps";
}

/// Filesystem store for every artifact the pipeline touches.
///
/// Flat artifacts live as `<name>.json` under the data directory and are
/// replaced wholesale on save. Weekly snapshots live in per-season
/// subdirectories. Every write updates the timestamp ledger so staleness
/// is always inspectable.
pub struct LeagueStore {
    config: StoreConfig,
}

impl LeagueStore {
    /// Open the store, creating the data directory if needed.
    pub fn open(config: StoreConfig) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Load one flat artifact.
    pub fn load<T: DeserializeOwned>(&self, artifact: &str) -> Result<T> {
        let path = self.artifact_path(artifact);
        if !path.exists() {
            return Err(StoreError::not_found(artifact));
        }
        read_json(&path)
    }

    /// Load one flat artifact, or its default if it was never written.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, artifact: &str) -> Result<T> {
        match self.load(artifact) {
            Ok(value) => Ok(value),
            Err(StoreError::NotFound(_)) => Ok(T::default()),
            Err(err) => Err(err),
        }
    }

    /// Replace one flat artifact and stamp its write time.
    pub fn save<T: Serialize>(&self, artifact: &str, value: &T) -> Result<()> {
        write_json(&self.artifact_path(artifact), value)?;
        self.stamp(artifact)?;
        debug!("saved {artifact}");
        Ok(())
    }

    /// Append one week to an artifact keyed week-then-team.
    ///
    /// A week that already holds data is never touched; re-recording it
    /// is an error and leaves the file as it was.
    pub fn record_week<T>(
        &self,
        artifact: &str,
        week: u32,
        per_team: BTreeMap<TeamName, T>,
    ) -> Result<()>
    where
        T: Serialize + DeserializeOwned,
    {
        let mut stored: BTreeMap<u32, BTreeMap<TeamName, T>> = self.load_or_default(artifact)?;
        if stored.contains_key(&week) {
            return Err(StoreError::week_already_recorded(artifact, week));
        }
        stored.insert(week, per_team);
        self.save(artifact, &stored)
    }

    /// Merge one week into an artifact keyed team-then-week, with the
    /// same no-overwrite guard applied per team.
    pub fn record_team_week<T>(
        &self,
        artifact: &str,
        week: u32,
        per_team: BTreeMap<TeamName, T>,
    ) -> Result<()>
    where
        T: Serialize + DeserializeOwned,
    {
        let mut stored: BTreeMap<TeamName, BTreeMap<u32, T>> = self.load_or_default(artifact)?;
        for team in per_team.keys() {
            if stored.get(team).is_some_and(|weeks| weeks.contains_key(&week)) {
                return Err(StoreError::week_already_recorded(artifact, week));
            }
        }
        for (team, value) in per_team {
            stored.entry(team).or_default().insert(week, value);
        }
        self.save(artifact, &stored)
    }

    /// Write this week's raw-stat snapshot. The update workflow may
    /// refresh a snapshot while its window is still open, so snapshots
    /// are not overwrite-guarded.
    pub fn save_week_snapshot(&self, week: u32, snapshot: &StatSnapshot) -> Result<()> {
        let path = week_file(&self.config.stats_snapshot_dir(), week);
        write_json(&path, snapshot)?;
        self.stamp(&format!("{}_stats/week_{week}", self.config.year))
    }

    pub fn load_week_snapshot(&self, week: u32) -> Result<StatSnapshot> {
        let path = week_file(&self.config.stats_snapshot_dir(), week);
        if !path.exists() {
            return Err(StoreError::MissingSnapshot(week));
        }
        read_json(&path)
    }

    /// Every weekly raw-stat snapshot on disk, keyed by week number.
    /// Files that do not match the `week_<n>.json` pattern are ignored.
    pub fn load_snapshots(&self) -> Result<BTreeMap<u32, StatSnapshot>> {
        let dir = self.config.stats_snapshot_dir();
        let mut snapshots = BTreeMap::new();
        if !dir.exists() {
            return Ok(snapshots);
        }
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let Some(week) = week_number(&path) else { continue };
            snapshots.insert(week, read_json(&path)?);
        }
        Ok(snapshots)
    }

    pub fn save_week_depth_chart(&self, week: u32, chart: &DepthChart) -> Result<()> {
        let path = week_file(&self.config.depth_chart_snapshot_dir(), week);
        write_json(&path, chart)?;
        self.stamp(&format!("{}_depth_charts/week_{week}", self.config.year))
    }

    pub fn load_week_depth_chart(&self, week: u32) -> Result<DepthChart> {
        let path = week_file(&self.config.depth_chart_snapshot_dir(), week);
        if !path.exists() {
            return Err(StoreError::MissingSnapshot(week));
        }
        read_json(&path)
    }

    /// When each artifact was last written, RFC 3339 in UTC.
    pub fn timestamps(&self) -> Result<BTreeMap<String, String>> {
        self.load_or_default(artifact::TIMESTAMPS)
    }

    fn artifact_path(&self, artifact: &str) -> PathBuf {
        self.config.data_dir.join(format!("{artifact}.json"))
    }

    fn stamp(&self, name: &str) -> Result<()> {
        let mut stamps: BTreeMap<String, String> = self.load_or_default(artifact::TIMESTAMPS)?;
        stamps.insert(name.to_string(), Utc::now().to_rfc3339());
        write_json(&self.artifact_path(artifact::TIMESTAMPS), &stamps)
    }
}

fn week_file(dir: &Path, week: u32) -> PathBuf {
    dir.join(format!("week_{week}.json"))
}

fn week_number(path: &Path) -> Option<u32> {
    path.file_name()?.to_str()?.strip_prefix("week_")?.strip_suffix(".json")?.parse().ok()
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::{Context, Result};
use league_model::{DepthChart, GameResult, PlayerDetails, PlayerId, PlayerStatus, StatSnapshot, TeamName};
use reqwest::Client;
use serde_json::Value;
use tracing::{info, warn};

use crate::config::FeedConfig;
use crate::format::{self, Schedule};
use crate::injuries::{self, InjuryReport};
use crate::teams;

/// HTTP client for ESPN's public NFL feeds.
pub struct EspnFeed {
    client: Client,
    config: FeedConfig,
}

impl EspnFeed {
    /// Create a feed client with a browser user agent, which the schedule
    /// page requires.
    pub fn new(config: FeedConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Pulls every team's depth chart and resolves each athlete ref into
    /// a full slot. A failed athlete lookup drops that slot, not the pull.
    pub async fn fetch_depth_charts(&self) -> Result<DepthChart> {
        let mut charts = DepthChart::new();
        let total = teams::TEAM_IDS.len();
        for (index, (team, id)) in teams::TEAM_IDS.iter().enumerate() {
            info!("Fetching depth chart {} of {}: {}", index + 1, total, team);
            let url = format!(
                "{}{}/teams/{}/depthcharts",
                self.config.core_api_url, self.config.year, id
            );
            let payload = self.get_json(&url).await?;
            for slot in format::depth_chart_slots(&payload) {
                let athlete = match self.get_json(&slot.athlete_ref).await {
                    Ok(athlete) => athlete,
                    Err(e) => {
                        warn!("Skipping athlete at {}: {}", slot.athlete_ref, e);
                        continue;
                    }
                };
                match format::depth_slot(&athlete) {
                    Some(entry) => charts.insert_slot(*team, slot.position, slot.rank, entry),
                    None => warn!("Unreadable athlete payload at {}", slot.athlete_ref),
                }
            }
        }
        info!("Fetched depth charts for {} teams", charts.team_count());
        Ok(charts)
    }

    /// Pulls season-to-date stat sheets for every player in the details
    /// map. Athletes the stats endpoint rejects are skipped.
    pub async fn fetch_player_stats(
        &self,
        details: &BTreeMap<PlayerId, PlayerDetails>,
    ) -> Result<StatSnapshot> {
        let mut snapshot = StatSnapshot::new();
        let total = details.len();
        for (index, id) in details.keys().enumerate() {
            if index % 50 == 0 {
                info!("Player stats {} of {} complete", index, total);
            }
            let url = format!(
                "{}{}/types/{}/athletes/{}/statistics/0",
                self.config.core_api_url,
                self.config.year,
                self.config.season_type(),
                id
            );
            match self.get_json(&url).await {
                Ok(payload) => {
                    snapshot.insert(id.clone(), format::stat_sheet(&payload));
                }
                Err(e) => warn!("No stats for athlete {}: {}", id, e),
            }
        }
        info!("Fetched stat sheets for {} of {} players", snapshot.len(), total);
        Ok(snapshot)
    }

    /// Pulls the current scoreboard and splits every game into a result
    /// entry for each side. One call covers one week.
    pub async fn fetch_week_results(&self) -> Result<BTreeMap<TeamName, GameResult>> {
        let payload = self.get_json(&self.config.scoreboard_url).await?;
        let mut results = BTreeMap::new();
        let events = payload.get("events").and_then(Value::as_array);
        for event in events.into_iter().flatten() {
            let competitions = event.get("competitions").and_then(Value::as_array);
            for competition in competitions.into_iter().flatten() {
                results.extend(format::game_results(competition));
            }
        }
        info!("Fetched results for {} teams", results.len());
        Ok(results)
    }

    /// Pulls the CBS schedule page for the week after the one being
    /// recorded and parses it into day-grouped matchups.
    pub async fn fetch_schedule(&self) -> Result<Schedule> {
        let url = format!(
            "{}{}/{}/{}/",
            self.config.schedule_url,
            self.config.year,
            self.config.season(),
            self.config.week + 1
        );
        info!("Fetching schedule from: {}", url);

        let response =
            self.client.get(&url).send().await.context("Failed to fetch the schedule page")?;
        if !response.status().is_success() {
            anyhow::bail!("Schedule request failed with status: {}", response.status());
        }
        let html = response.text().await.context("Failed to read the schedule page body")?;

        format::schedule(&html, self.config.is_postseason())
    }

    /// Builds the expanded injury report for every player who is not
    /// healthy, using each athlete's overview payload.
    pub async fn fetch_injury_report(
        &self,
        details: &BTreeMap<PlayerId, PlayerDetails>,
    ) -> Result<InjuryReport> {
        let hurt: Vec<_> = details
            .iter()
            .filter(|(_, player)| player.status != PlayerStatus::Healthy)
            .collect();
        info!("Expanding injury details for {} players", hurt.len());

        let mut report = InjuryReport::new();
        for (id, player) in hurt {
            let Some(api_ref) = player.api_ref.as_deref() else {
                warn!("No api ref for injured player {}", player.name);
                continue;
            };
            let payload = match self.get_json(api_ref).await {
                Ok(payload) => payload,
                Err(e) => {
                    warn!("Skipping injury details for {}: {}", player.name, e);
                    continue;
                }
            };
            let injury = payload.pointer("/injuries/0").cloned().unwrap_or(Value::Null);
            report.insert(id.clone(), injuries::injury_entry(player, &injury));
        }
        info!("Injury report covers {} players", report.len());
        Ok(report)
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        let response =
            self.client.get(url).send().await.with_context(|| format!("Failed to fetch {url}"))?;
        if !response.status().is_success() {
            anyhow::bail!("Request to {} failed with status: {}", url, response.status());
        }
        response.json().await.with_context(|| format!("Failed to parse the response from {url}"))
    }
}

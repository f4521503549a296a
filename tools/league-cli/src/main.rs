//! League Pulse CLI
//!
//! Weekly driver for the stat pipeline with three commands:
//! - update: pull the week's league data from the provider into the store
//! - process: aggregate stored data into the weekly analysis artifacts
//! - status: show when each stored artifact was last written

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::warn;

use espn_fetcher::{ensure_update_window, format, EspnFeed, FeedConfig};
use league_model::{DepthChart, PlayerDetails, PlayerId, SeasonResults, StatSnapshot};
use stat_engine::{run_week, WeeklyInputs};
use stat_store::{artifact, LeagueStore, StoreConfig, StoreError};

#[derive(Parser)]
#[command(name = "league-cli")]
#[command(about = "Weekly NFL stat pipeline - update, process, and status")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding the stored artifacts
    #[arg(long, default_value = "./db")]
    data_dir: PathBuf,

    /// Season year
    #[arg(long, default_value = "2025")]
    year: u16,
}

#[derive(Subcommand)]
enum Commands {
    /// Pull the week's results, schedule, depth charts, stats, and injuries
    Update {
        /// Week being recorded
        #[arg(short, long)]
        week: u32,

        /// Skip the Monday night / Tuesday window check
        #[arg(long)]
        force: bool,
    },

    /// Build the weekly analysis artifacts from stored data
    Process {
        /// Week to process
        #[arg(short, long)]
        week: u32,
    },

    /// Show when each stored artifact was last written
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let store = LeagueStore::open(StoreConfig { data_dir: cli.data_dir.clone(), year: cli.year })?;

    match cli.command {
        Commands::Update { week, force } => update(&store, cli.year, week, force).await,
        Commands::Process { week } => process(&store, week),
        Commands::Status => status(&store),
    }
}

/// Pull one week of league data into the store. Results settle after the
/// Monday night game, so everything records in a single pass.
async fn update(store: &LeagueStore, year: u16, week: u32, force: bool) -> anyhow::Result<()> {
    if force {
        warn!("Skipping the update window check");
    } else {
        ensure_update_window(&Local::now())?;
    }

    let feed = EspnFeed::new(FeedConfig { year, week, ..FeedConfig::default() })?;

    let results = feed.fetch_week_results().await?;
    store.record_team_week(artifact::RESULTS, week, results)?;
    println!("Results updated");

    let schedule = feed.fetch_schedule().await?;
    store.save(artifact::SCHEDULE, &schedule)?;
    println!("Schedule updated");

    let charts = feed.fetch_depth_charts().await?;
    store.save(artifact::DEPTH_CHART, &charts)?;
    store.save_week_depth_chart(week, &charts)?;
    println!("Depth charts updated");

    let details = format::player_details(&charts);
    store.save(artifact::PLAYER_DETAILS, &details)?;
    println!("Player details updated");

    let stats = feed.fetch_player_stats(&details).await?;
    store.save(artifact::STATS, &stats)?;
    store.save_week_snapshot(week, &stats)?;
    println!("Stats updated");

    let injuries = feed.fetch_injury_report(&details).await?;
    store.save(artifact::INJURIES, &injuries)?;
    println!("Injuries updated");

    Ok(())
}

/// Run the weekly computation pass over stored data and write every
/// derived artifact.
fn process(store: &LeagueStore, week: u32) -> anyhow::Result<()> {
    let details: BTreeMap<PlayerId, PlayerDetails> = store.load(artifact::PLAYER_DETAILS)?;
    let raw_stats: StatSnapshot = store.load(artifact::STATS)?;
    let depth_chart: DepthChart = store.load(artifact::DEPTH_CHART)?;
    let results: SeasonResults = store.load_or_default(artifact::RESULTS)?;
    let season_snapshots = store.load_snapshots()?;

    // The line report reads the chart frozen at the start of the week so
    // mid-week roster moves do not shift the numbers.
    let week_depth_chart = match store.load_week_depth_chart(week) {
        Ok(chart) => chart,
        Err(StoreError::MissingSnapshot(_)) => {
            warn!("No depth chart snapshot for week {}, using the current chart", week);
            depth_chart.clone()
        }
        Err(err) => return Err(err.into()),
    };

    let inputs = WeeklyInputs {
        week,
        raw_stats,
        details,
        depth_chart,
        week_depth_chart,
        results,
        season_snapshots,
    };
    let outputs = run_week(&inputs);

    store.save(artifact::FILTERED_STATS, &outputs.normalized)?;
    println!("Stats filtered");

    store.save(artifact::BENCHMARK_STATS, &outputs.benchmarks)?;
    println!("Benchmarks processed");

    store.save(artifact::TOP_ATHLETES, &outputs.top_athletes)?;
    println!("Top athletes identified");

    store.record_week(artifact::PROCESSED_STATS, week, outputs.composites)?;
    println!("Stats processed");

    store.record_week(artifact::OFFENSIVE_LINE_PERFORMANCE, week, outputs.offensive_line)?;
    println!("Offensive line performance processed");

    store.save(artifact::DEFENSE_PERFORMANCE, &outputs.defense_performance)?;
    println!("Defense performance processed");

    store.save(artifact::WEEKLY_RANKS, &outputs.ranks)?;
    println!("Teams ranked");

    Ok(())
}

/// Print the write-time ledger, one artifact per line.
fn status(store: &LeagueStore) -> anyhow::Result<()> {
    let stamps = store.timestamps()?;
    if stamps.is_empty() {
        println!("No artifacts recorded yet");
        return Ok(());
    }
    for (name, stamp) in &stamps {
        println!("{name:<40} {stamp}");
    }
    Ok(())
}

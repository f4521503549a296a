use espn_fetcher::{EspnFeed, FeedConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Testing ESPN feed");

    let config = FeedConfig::from_env();
    info!("Season {} week {}", config.year, config.week);

    let feed = EspnFeed::new(config)?;

    info!("Testing scoreboard fetch...");
    match feed.fetch_week_results().await {
        Ok(results) => {
            info!("✅ Successfully fetched results for {} teams", results.len());
            for (team, result) in results.iter().take(3) {
                info!("  {} {} vs {} ({})", team, result.score, result.opponent, result.home_away);
            }
        }
        Err(e) => {
            error!("❌ Failed to fetch results: {}", e);
        }
    }

    info!("Testing schedule fetch...");
    match feed.fetch_schedule().await {
        Ok(schedule) => {
            let games: usize = schedule.values().map(Vec::len).sum();
            info!("✅ Successfully fetched {} games across {} days", games, schedule.len());
        }
        Err(e) => {
            error!("❌ Failed to fetch the schedule: {}", e);
        }
    }

    info!("Test completed!");
    Ok(())
}

//! ESPN Feed Service
//!
//! Pulls NFL depth charts, athlete statistics, game results, and the weekly
//! schedule from ESPN's public APIs (plus the CBS schedule page) and formats
//! everything into the shared league model.

pub mod config;
pub mod fetch;
pub mod format;
pub mod injuries;
pub mod teams;
pub mod window;

pub use config::FeedConfig;
pub use fetch::EspnFeed;
pub use format::{Matchup, Schedule};
pub use injuries::{InjuryEntry, InjuryReport};
pub use window::{ensure_update_window, MONDAY_OPEN_HOUR};

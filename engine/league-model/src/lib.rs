//! # League Model
//!
//! Shared data model for the weekly NFL stat pipeline: positions and their
//! schema groups, player health statuses, depth charts, raw stat sheets and
//! game results. Provider quirks (unknown position labels, missing fields,
//! string-typed depth ranks) are absorbed at this layer so downstream
//! computation never fails on malformed league data.

pub mod depth_chart;
pub mod player;
pub mod position;
pub mod results;
pub mod stat_sheet;

pub use depth_chart::{DepthChart, DepthSlot, TeamDepthChart};
pub use player::{PlayerDetails, PlayerStatus};
pub use position::Position;
pub use results::{GameResult, LineScore, SeasonResults, TeamRecords, TeamResults};
pub use stat_sheet::{StatSheet, StatSnapshot};

/// Provider-assigned athlete id, kept opaque (e.g. "3139477").
pub type PlayerId = String;

/// Full lowercase team name, e.g. "atlanta falcons".
pub type TeamName = String;

/// 1-based depth-chart rank as the provider reports it ("1" is the starter).
pub type DepthRank = String;

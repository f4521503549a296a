//! # Stat Store
//!
//! Filesystem-backed store for the pipeline's JSON artifacts: raw pulls,
//! derived weekly outputs, immutable weekly snapshots and the write
//! timestamps that track freshness. Week-keyed artifacts refuse to
//! overwrite a week that already has data; everything else is
//! replace-on-write.

pub mod config;
pub mod error;
pub mod store;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use store::{artifact, LeagueStore};

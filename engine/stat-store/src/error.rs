//! Error types for the artifact store

use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur reading or writing league artifacts
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O errors (file operations, directory creation)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Artifact has never been written
    #[error("Artifact not found: {0}")]
    NotFound(String),

    /// A week-keyed artifact already holds data for this week
    #[error("Week {week} already recorded in {artifact}")]
    WeekAlreadyRecorded { artifact: String, week: u32 },

    /// No weekly snapshot exists for this week
    #[error("No stat snapshot recorded for week {0}")]
    MissingSnapshot(u32),
}

impl StoreError {
    /// Create a new not found error
    pub fn not_found(artifact: impl Into<String>) -> Self {
        Self::NotFound(artifact.into())
    }

    /// Create a new overwrite-guard error
    pub fn week_already_recorded(artifact: impl Into<String>, week: u32) -> Self {
        Self::WeekAlreadyRecorded { artifact: artifact.into(), week }
    }
}

//! Error types for the valuerank framework.
//!
//! The ranking core itself never fails: missing metrics, incomplete rows and
//! join misses are all recovered locally. These errors cover the edges of the
//! system, such as loading snapshots, parsing configuration and rendering the
//! delimited report.

use thiserror::Error;

/// The main error type for valuerank operations.
#[derive(Debug, Error)]
pub enum RankError {
    /// Error due to invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error when a factor name does not match any registered factor.
    #[error("Unknown factor: {0}")]
    UnknownFactor(String),

    /// Error reading or writing a record snapshot.
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Error from the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from JSON (de)serialization.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the CSV writer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for RankError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for RankError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for valuerank operations.
pub type Result<T> = std::result::Result<T, RankError>;

//! Error types for the Yahoo Finance client and constituent source.

use thiserror::Error;

/// Errors that can occur when fetching quotes or constituents.
#[derive(Debug, Error)]
pub enum YahooError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error.
    #[error("Yahoo API error: {0}")]
    Api(String),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Symbol not found.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// HTML could not be parsed into a constituent list.
    #[error("Failed to parse constituents page: {0}")]
    Parse(String),

    /// Cache file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

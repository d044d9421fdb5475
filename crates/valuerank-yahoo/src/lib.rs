//! Data collaborators for valuerank.
//!
//! This crate fetches the inputs of a ranking run:
//!
//! - the S&P 500 constituent list, scraped from Wikipedia and cached on disk
//!   for a day ([`ConstituentSource`], [`ConstituentCache`])
//! - per-symbol metric records from the Yahoo Finance `quoteSummary`
//!   endpoint ([`YahooClient`])
//!
//! # Usage
//!
//! ```rust,ignore
//! use valuerank_yahoo::{ConstituentCache, ConstituentSource, YahooClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = ConstituentSource::new(reqwest::Client::new());
//!     let tickers = source.load_or_refresh(&ConstituentCache::new("splist.json")).await?;
//!
//!     let client = YahooClient::from_env()?;
//!     let records = client.quotes(&tickers).await;
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! `VALUERANK_QUOTE_URL` overrides the quote endpoint, in your environment
//! or a `.env` file.

mod client;
mod constituents;
mod error;
mod types;

pub use client::{YahooClient, parse_quote};
pub use constituents::{
    ConstituentCache, ConstituentSource, DEFAULT_MAX_AGE, WIKIPEDIA_SP500_URL, parse_constituents,
    to_quote_symbol,
};
pub use error::YahooError;
pub use types::*;

/// Result type for Yahoo and constituent operations.
pub type Result<T> = std::result::Result<T, YahooError>;

//! Yahoo Finance quote client implementation.

use crate::{
    Result,
    error::YahooError,
    types::QuoteSummaryResponse,
};
use reqwest::Client;
use std::env;
use valuerank_traits::MetricRecord;

/// Base URL for the quoteSummary endpoint.
const YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com/v10/finance/quoteSummary";

/// Modules requested for every symbol.
const MODULES: &str = "defaultKeyStatistics,summaryDetail,recommendationTrend,earnings,summaryProfile";

/// Yahoo rejects requests that carry no user agent.
const USER_AGENT: &str = concat!("valuerank/", env!("CARGO_PKG_VERSION"));

/// Yahoo Finance quote client.
#[derive(Debug, Clone)]
pub struct YahooClient {
    client: Client,
    base_url: String,
}

impl YahooClient {
    /// Create a client against the public endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self> {
        Self::with_base_url(YAHOO_BASE_URL)
    }

    /// Create a client against a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Create a client, honoring `VALUERANK_QUOTE_URL` if set.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        match env::var("VALUERANK_QUOTE_URL") {
            Ok(url) => Self::with_base_url(url),
            Err(_) => Self::new(),
        }
    }

    /// Build the request URL for a symbol.
    fn url(&self, symbol: &str) -> String {
        format!(
            "{}/{}?modules={MODULES}&formatted=false",
            self.base_url.trim_end_matches('/'),
            symbol.to_uppercase()
        )
    }

    /// Fetch the metric record for one symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API reports an error, or
    /// the symbol has no result.
    pub async fn quote(&self, symbol: &str) -> Result<MetricRecord> {
        let response = self.client.get(self.url(symbol)).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(YahooError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(YahooError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;
        parse_quote(symbol, &text)
    }

    /// Fetch records for many symbols, one request at a time.
    ///
    /// Per-symbol failures are logged and skipped so one bad ticker does not
    /// abort the batch.
    pub async fn quotes(&self, symbols: &[String]) -> Vec<MetricRecord> {
        let mut records = Vec::with_capacity(symbols.len());

        for (i, symbol) in symbols.iter().enumerate() {
            match self.quote(symbol).await {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!(%symbol, error = %e, "failed to fetch quote"),
            }
            if (i + 1) % 50 == 0 {
                tracing::info!(done = i + 1, total = symbols.len(), "fetching quotes");
            }
        }

        records
    }
}

/// Parse a quoteSummary body into a record for `symbol`.
///
/// # Errors
///
/// Returns an error for malformed JSON, an API error object, or an empty
/// result list.
pub fn parse_quote(symbol: &str, body: &str) -> Result<MetricRecord> {
    let response: QuoteSummaryResponse = serde_json::from_str(body)?;
    let summary = response.quote_summary;

    if let Some(error) = summary.error.filter(|e| !e.is_null()) {
        return Err(YahooError::Api(error.to_string()));
    }

    summary
        .result
        .and_then(|r| r.into_iter().next())
        .map(|result| result.into_record(&symbol.to_uppercase()))
        .ok_or_else(|| YahooError::SymbolNotFound(symbol.to_string()))
}

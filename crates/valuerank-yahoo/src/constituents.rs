//! S&P 500 constituent list: Wikipedia scrape plus an on-disk cache.

use crate::{Result, error::YahooError};
use reqwest::Client;
use scraper::{Html, Selector};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Wikipedia page listing the index members.
pub const WIKIPEDIA_SP500_URL: &str = "https://en.wikipedia.org/wiki/List_of_S%26P_500_companies";

/// Cached lists older than this are refetched.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| YahooError::Parse(e.to_string()))
}

/// Extract tickers from the constituents table of the Wikipedia page.
///
/// The first cell of every data row is the ticker. A header whose first
/// cell is not `Symbol` means the page layout changed; that is logged but
/// parsing continues.
///
/// # Errors
///
/// Returns an error when the page has no `#constituents` table.
pub fn parse_constituents(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let table_sel = selector("table#constituents")?;
    let th_sel = selector("th")?;
    let tr_sel = selector("tr")?;
    let td_sel = selector("td")?;

    let table = document
        .select(&table_sel)
        .next()
        .ok_or_else(|| YahooError::Parse("constituents table not found".to_string()))?;

    let first_header = table
        .select(&th_sel)
        .next()
        .map(|th| th.text().collect::<String>().trim().to_string())
        .unwrap_or_default();
    if first_header != "Symbol" {
        tracing::warn!(header = %first_header, "unexpected constituents table layout");
    }

    let tickers: Vec<String> = table
        .select(&tr_sel)
        .filter_map(|row| row.select(&td_sel).next())
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .filter(|ticker| !ticker.is_empty())
        .collect();

    tracing::info!(count = tickers.len(), "parsed constituents");
    Ok(tickers)
}

/// Wikipedia writes class shares with a dot (`BRK.B`); Yahoo uses a dash.
#[must_use]
pub fn to_quote_symbol(ticker: &str) -> String {
    ticker.replace('.', "-")
}

/// Fetches the constituent page.
#[derive(Debug, Clone)]
pub struct ConstituentSource {
    client: Client,
    url: String,
}

impl ConstituentSource {
    /// Source pointing at the Wikipedia page.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self::with_url(client, WIKIPEDIA_SP500_URL)
    }

    /// Source pointing at a custom URL.
    pub fn with_url(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Download and parse the constituent list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the page cannot be parsed.
    pub async fn fetch(&self) -> Result<Vec<String>> {
        tracing::info!(url = %self.url, "querying constituent list");
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(YahooError::Api(format!("HTTP {}", response.status())));
        }

        let body = response.text().await?;
        parse_constituents(&body)
    }

    /// Return the cached list when fresh, otherwise fetch and refresh it.
    ///
    /// # Errors
    ///
    /// Returns an error if fetching fails or the cache cannot be written.
    pub async fn load_or_refresh(&self, cache: &ConstituentCache) -> Result<Vec<String>> {
        if !cache.is_stale() {
            match cache.load() {
                Ok(tickers) if !tickers.is_empty() => return Ok(tickers),
                Ok(_) => tracing::warn!("cached constituent list is empty, refetching"),
                Err(e) => tracing::warn!(error = %e, "unreadable constituent cache, refetching"),
            }
        }

        let tickers = self.fetch().await?;
        cache.save(&tickers)?;
        Ok(tickers)
    }
}

/// JSON file holding the last fetched constituent list.
#[derive(Debug, Clone)]
pub struct ConstituentCache {
    path: PathBuf,
    max_age: Duration,
}

impl ConstituentCache {
    /// Cache at `path` with the default one-day lifetime.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_age: DEFAULT_MAX_AGE,
        }
    }

    /// Override the lifetime.
    #[must_use]
    pub const fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    /// Cache file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stale when missing, unreadable, or last modified before `max_age` ago.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        let modified = match std::fs::metadata(&self.path).and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(_) => return true,
        };
        SystemTime::now()
            .duration_since(modified)
            .unwrap_or_default()
            > self.max_age
    }

    /// Read the cached list.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or not a JSON string array.
    pub fn load(&self) -> Result<Vec<String>> {
        let text = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Write the list, replacing the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, tickers: &[String]) -> Result<()> {
        std::fs::write(&self.path, serde_json::to_string(tickers)?)?;
        tracing::info!(path = %self.path.display(), count = tickers.len(), "saved constituent list");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <table class="wikitable" id="other"><tr><td>NOPE</td></tr></table>
        <table class="wikitable sortable" id="constituents">
          <tbody>
            <tr><th>Symbol</th><th>Security</th><th>GICS Sector</th></tr>
            <tr><td><a href="/x">MMM</a>
                </td><td>3M</td><td>Industrials</td></tr>
            <tr><td><a href="/y">AOS</a></td><td>A. O. Smith</td><td>Industrials</td></tr>
            <tr><td><a href="/z">BRK.B</a></td><td>Berkshire Hathaway</td><td>Financials</td></tr>
          </tbody>
        </table>
    </body></html>"#;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("valuerank-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_parse_constituents() {
        let tickers = parse_constituents(PAGE).unwrap();
        assert_eq!(tickers, vec!["MMM", "AOS", "BRK.B"]);
    }

    #[test]
    fn test_parse_constituents_missing_table() {
        let result = parse_constituents("<html><table id=\"x\"></table></html>");
        assert!(matches!(result, Err(YahooError::Parse(_))));
    }

    #[test]
    fn test_quote_symbol() {
        assert_eq!(to_quote_symbol("BRK.B"), "BRK-B");
        assert_eq!(to_quote_symbol("AAPL"), "AAPL");
    }

    #[test]
    fn test_missing_cache_is_stale() {
        let cache = ConstituentCache::new(temp_path("missing.json"));
        assert!(cache.is_stale());
        assert!(cache.load().is_err());
    }

    #[test]
    fn test_cache_round_trip_and_freshness() {
        let path = temp_path("splist.json");
        let cache = ConstituentCache::new(&path);
        cache.save(&["MMM".to_string(), "AOS".to_string()]).unwrap();

        assert!(!cache.is_stale());
        assert_eq!(cache.load().unwrap(), vec!["MMM", "AOS"]);

        let expired = cache.clone().with_max_age(Duration::ZERO);
        std::thread::sleep(Duration::from_millis(10));
        assert!(expired.is_stale());

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_load_or_refresh_prefers_fresh_cache() {
        let path = temp_path("fresh.json");
        let cache = ConstituentCache::new(&path);
        cache.save(&["XOM".to_string()]).unwrap();

        // The URL is unreachable, so a fetch would fail.
        let source = ConstituentSource::with_url(Client::new(), "http://127.0.0.1:9/none");
        let tickers = source.load_or_refresh(&cache).await.unwrap();
        assert_eq!(tickers, vec!["XOM"]);

        std::fs::remove_file(&path).unwrap();
    }
}

//! Fetch command implementation.

use anyhow::Result;
use std::path::Path;
use valuerank::save_snapshot;
use valuerank::yahoo::{ConstituentCache, ConstituentSource, YahooClient, to_quote_symbol};

/// Fetch quotes for the constituent list (or `symbols`) and save a snapshot.
pub(crate) async fn fetch(snapshot: &Path, universe: &Path, symbols: &[String]) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Fetch Quotes                              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let tickers = if symbols.is_empty() {
        let source = ConstituentSource::new(reqwest::Client::new());
        source.load_or_refresh(&ConstituentCache::new(universe)).await?
    } else {
        symbols.to_vec()
    };
    let tickers: Vec<String> = tickers.iter().map(|t| to_quote_symbol(t)).collect();

    println!("Fetching {} symbol(s), one request at a time...", tickers.len());

    let client = YahooClient::from_env()?;
    let records = client.quotes(&tickers).await;

    save_snapshot(snapshot, &records)?;

    println!();
    println!("Fetched:  {}", records.len());
    println!("Skipped:  {}", tickers.len() - records.len());
    println!("Saved to: {}", snapshot.display());
    println!();

    Ok(())
}

//! Universe command implementation.

use anyhow::Result;
use std::path::Path;
use valuerank::yahoo::{ConstituentCache, ConstituentSource};

/// Print the constituent list, refreshing the cache when stale or asked to.
pub(crate) async fn show_universe(path: &Path, refresh: bool) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    S&P 500 Constituents                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let cache = ConstituentCache::new(path);
    let source = ConstituentSource::new(reqwest::Client::new());

    let tickers = if refresh {
        let tickers = source.fetch().await?;
        cache.save(&tickers)?;
        tickers
    } else {
        let stale = cache.is_stale();
        let tickers = source.load_or_refresh(&cache).await?;
        println!("Cache:   {} ({})", path.display(), if stale { "refreshed" } else { "fresh" });
        tickers
    };

    println!("Count:   {}", tickers.len());
    println!();

    for chunk in tickers.chunks(10) {
        let line: Vec<String> = chunk.iter().map(|t| format!("{t:<6}")).collect();
        println!("  {}", line.join(" "));
    }
    println!();

    Ok(())
}

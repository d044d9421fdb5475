//! Screen command implementation.

use super::cell;
use anyhow::Result;
use std::path::Path;
use valuerank::factors::Screen;
use valuerank::load_snapshot;

/// Run one screen over a snapshot and print the matches.
pub(crate) fn screen(name: &str, snapshot: &Path, limit: Option<usize>) -> Result<()> {
    let screen: Screen = match name.parse() {
        Ok(s) => s,
        Err(e) => {
            println!("Error: {e}");
            println!("Available screens:");
            for s in Screen::ALL {
                println!("  {:15} - {}", s.name(), s.description());
            }
            return Ok(());
        }
    };

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Stock Screen                              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let records = load_snapshot(snapshot)?;
    let hits = screen.apply(&records);

    println!("Screen:   {screen}");
    println!("Rule:     {}", screen.description());
    println!("Matches:  {} of {}", hits.len(), records.len());
    println!();

    println!(
        "{:<8} {:>9} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "Symbol", "EQ Growth", "P/B", "52wk", "Margin", "Fwd EPS", "Trl EPS"
    );
    println!("{}", "─".repeat(64));

    for record in hits.iter().take(limit.unwrap_or(usize::MAX)) {
        println!(
            "{:<8} {:>9} {:>8} {:>8} {:>8} {:>8} {:>8}",
            record.symbol,
            cell(record.earnings_quarterly_growth),
            cell(record.price_to_book),
            cell(record.fifty_two_week_change),
            cell(record.profit_margins),
            cell(record.forward_eps),
            cell(record.trailing_eps),
        );
    }

    println!();
    Ok(())
}

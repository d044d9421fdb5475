//! Rank command implementation.

use super::cell;
use anyhow::Result;
use std::path::Path;
use valuerank::{Pipeline, PipelineConfig, load_snapshot};

/// Rank a snapshot, write the report, and print the best rows.
pub(crate) fn rank(
    config: &PipelineConfig,
    snapshot: &Path,
    output: &Path,
    top: usize,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Value Ranking                             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let records = load_snapshot(snapshot)?;
    println!("Snapshot: {} ({} records)", snapshot.display(), records.len());

    let output_data = Pipeline::new(config.clone()).run(records);
    output_data.report.write_file(output)?;

    println!("Report:   {} ({} rows)", output.display(), output_data.report.len());
    println!(
        "Ranked:   {} with a positive total, {} hidden as incomplete",
        output_data.report.ranked(),
        output_data.report.ranked() - output_data.report.len()
    );
    if output_data.normalization.total() > 0 {
        println!("Filled:   {} missing or invalid metrics", output_data.normalization.total());
    }
    println!();

    if output_data.report.is_empty() {
        println!("Nothing to show.\n");
        return Ok(());
    }

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("TOP {} (lower total is better)", top.min(output_data.report.len()));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    println!(
        "{:<4} {:<8} {:>7} {:>6} {:>6} {:>6} {:>9} {:>8}",
        "#", "Symbol", "Total", "Prof", "Give", "Best", "Fwd P/E", "Price"
    );
    println!("{}", "─".repeat(60));

    for (i, row) in output_data.report.rows().iter().take(top).enumerate() {
        println!(
            "{:<4} {:<8} {:>7} {:>6} {:>6} {:>6} {:>9} {:>8}",
            i + 1,
            row.symbol,
            row.total_value,
            row.profitable_value,
            row.giveaway_value,
            row.best_future_value,
            cell(row.forward_pe),
            cell(row.market_price),
        );
    }

    println!();
    Ok(())
}

//! Factors command implementation.

use anyhow::Result;
use valuerank::Factor;
use valuerank::factors::{FactorCategory, RankConfig, factor_table};

/// List the ranking factors, grouped by category.
pub(crate) fn list_factors(category: Option<&str>, detailed: bool) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Ranking Factors                           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let table = factor_table(&RankConfig::default());
    let categories = [
        (FactorCategory::Value, "Value"),
        (FactorCategory::Growth, "Growth"),
        (FactorCategory::Reversion, "Reversion"),
    ];

    for (cat, cat_name) in categories {
        if let Some(filter) = category
            && !cat_name.to_lowercase().contains(&filter.to_lowercase())
        {
            continue;
        }

        let factors: Vec<_> = table.iter().filter(|f| f.kind().category() == cat).collect();
        if factors.is_empty() {
            continue;
        }

        println!("{cat_name}: {}", cat.description());
        println!("{}", "-".repeat(60));

        for factor in factors {
            if detailed {
                println!(
                    "  {:16} {:24} {:10} sentinel {:>6}",
                    factor.name(),
                    factor.metric().field_name(),
                    factor.order().as_str(),
                    factor.sentinel()
                );
                println!("  {:16} {}", "", factor.kind().description());
            } else {
                println!("  {}", factor.name());
            }
        }
        println!();
    }

    if !detailed {
        println!("Use --detailed for metric, order and sentinel.\n");
    }

    Ok(())
}

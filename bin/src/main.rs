//! valuerank CLI binary.
//!
//! Provides the command-line interface for fetching S&P 500 data and ranking
//! it.

mod cmd;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "valuerank")]
#[command(about = "Multi-factor value ranking of S&P 500 constituents", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON file with ranking and report settings
    #[arg(long, global = true, env = "VALUERANK_CONFIG")]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank a snapshot and write the report
    Rank {
        /// Snapshot to rank
        #[arg(short, long, env = "VALUERANK_SNAPSHOT", default_value = valuerank::DEFAULT_SNAPSHOT)]
        snapshot: PathBuf,

        /// Report destination
        #[arg(short, long, env = "VALUERANK_OUTPUT", default_value = "undervalued.csv")]
        output: PathBuf,

        /// Rows to print to the console
        #[arg(short, long, default_value = "25")]
        top: usize,
    },

    /// Fetch quotes for every constituent and save a snapshot
    Fetch {
        /// Snapshot destination
        #[arg(short, long, env = "VALUERANK_SNAPSHOT", default_value = valuerank::DEFAULT_SNAPSHOT)]
        snapshot: PathBuf,

        /// Constituent cache file
        #[arg(short, long, env = "VALUERANK_UNIVERSE", default_value = "splist.json")]
        universe: PathBuf,

        /// Only fetch these symbols
        #[arg(long, value_delimiter = ',')]
        symbols: Vec<String>,
    },

    /// Show or refresh the constituent list
    Universe {
        /// Constituent cache file
        #[arg(short, long, env = "VALUERANK_UNIVERSE", default_value = "splist.json")]
        universe: PathBuf,

        /// Refetch even if the cache is fresh
        #[arg(long)]
        refresh: bool,
    },

    /// Run a standalone screen over a snapshot
    Screen {
        /// Screen name (profitable, giveaway, best-future, bright-future, dark-future)
        name: String,

        /// Snapshot to screen
        #[arg(short, long, env = "VALUERANK_SNAPSHOT", default_value = valuerank::DEFAULT_SNAPSHOT)]
        snapshot: PathBuf,

        /// Maximum rows to print
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List the ranking factors
    Factors {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,

        /// Show detailed information
        #[arg(short, long)]
        detailed: bool,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Rank {
            snapshot,
            output,
            top,
        } => cmd::rank::rank(&config, &snapshot, &output, top)?,
        Commands::Fetch {
            snapshot,
            universe,
            symbols,
        } => cmd::fetch::fetch(&snapshot, &universe, &symbols).await?,
        Commands::Universe { universe, refresh } => {
            cmd::universe::show_universe(&universe, refresh).await?;
        }
        Commands::Screen {
            name,
            snapshot,
            limit,
        } => cmd::screen::screen(&name, &snapshot, limit)?,
        Commands::Factors { category, detailed } => {
            cmd::factors::list_factors(category.as_deref(), detailed)?;
        }
    }

    Ok(())
}

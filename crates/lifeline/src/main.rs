//! Lifeline CLI - infrastructure failure analysis from the command line.
//!
//! Loads unit/edge datasets, builds an in-memory dependency snapshot, and
//! answers root-cause, region, and criticality queries against it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

/// Lifeline: infrastructure dependency analysis.
#[derive(Parser)]
#[command(name = "lifeline")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Dataset directory containing units.jsonl and edges.jsonl
    #[arg(short, long, global = true, default_value = ".")]
    data_dir: PathBuf,

    /// Emit results as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the root cause of a failure by kind and affected locations
    RootCause {
        /// Failure kind (power, water, telecom, transport)
        #[arg(short, long)]
        kind: String,

        /// Comma-separated location names
        #[arg(short, long)]
        locations: String,

        /// Maximum impact-chain length
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Rank the critical units of a region
    Region {
        /// Comma-separated location names
        #[arg(short, long)]
        locations: String,
    },

    /// Rank all units globally by direct dependent count
    Rank,

    /// Show dataset statistics
    Stats,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Controlled via RUST_LOG, e.g. RUST_LOG=lifeline_core=debug lifeline rank
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lifeline=info,lifeline_dataset=info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    tracing::debug!("Starting lifeline CLI");

    let result = match &cli.command {
        Commands::RootCause {
            kind,
            locations,
            limit,
        } => cli::root_cause::run(&cli.data_dir, kind, locations, *limit, cli.json).await,
        Commands::Region { locations } => {
            cli::region::run(&cli.data_dir, locations, cli.json).await
        }
        Commands::Rank => cli::rank::run(&cli.data_dir, cli.json).await,
        Commands::Stats => cli::stats::run(&cli.data_dir, cli.json).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

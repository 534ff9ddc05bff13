//! Art royalties registry — scenario runner.
//!
//! Drives the registry core against in-memory stores and a simulated value
//! ledger: artists register listings, subscribers pay to follow them, and
//! every rejected call is shown to leave balances untouched.

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod scenarios;

#[derive(Parser)]
#[command(
    name = "royalty-sim",
    about = "Artwork registry and paid subscription scenarios",
    version
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the canonical register-and-subscribe scenario
    Canonical,

    /// Run a randomized gallery of artists and subscribers
    Gallery {
        /// Number of artists
        #[arg(short, long, default_value = "3")]
        artists: usize,

        /// Number of subscribers (every second one underfunded)
        #[arg(short, long, default_value = "8")]
        subscribers: usize,

        /// Number of random subscribe attempts
        #[arg(long, default_value = "20")]
        attempts: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Canonical => {
            scenarios::run_canonical_scenario()?;
        }
        Commands::Gallery {
            artists,
            subscribers,
            attempts,
        } => {
            scenarios::run_gallery_scenario(artists, subscribers, attempts)?;
        }
    }

    Ok(())
}

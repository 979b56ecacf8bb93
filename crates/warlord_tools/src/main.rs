//! Warlord - Development Tools
//!
//! ```bash
//! # One kingdom's orders as JSON
//! warlord-tools decide --snapshot world.ron --kingdom wei
//!
//! # Every AI kingdom, kingdoms spread over threads
//! warlord-tools plan --snapshot world.json --parallel
//!
//! # Record a turn, then replay it later
//! warlord-tools record --snapshot world.ron --kingdom wei --out wei.turn
//! warlord-tools verify wei.turn
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use warlord_core::error::Result;
use warlord_core::ids::{GeneralId, KingdomId};
use warlord_core::scheduler::DecisionEngine;
use warlord_tools::commands;
use warlord_tools::io::{load_config, load_snapshot, render, OutputFormat};
use warlord_tools::validate::validate_snapshot_file;

#[derive(Parser)]
#[command(name = "warlord-tools")]
#[command(about = "Development tools for the Warlord decision engine")]
#[command(version)]
struct Cli {
    /// RON file overriding the default decision config
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide one kingdom's turn
    Decide {
        /// World snapshot (.ron or .json)
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Kingdom to decide for
        #[arg(short, long)]
        kingdom: String,
    },

    /// Plan every AI kingdom's turn
    Plan {
        /// World snapshot (.ron or .json)
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Decide kingdoms in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Check a snapshot for dangling references and hp bounds
    Validate {
        /// World snapshot (.ron or .json)
        path: PathBuf,
    },

    /// Classify what a captor does with a captured general
    Disposition {
        /// World snapshot (.ron or .json)
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Captured general
        #[arg(short, long)]
        general: String,

        /// Capturing kingdom
        #[arg(long)]
        captor: String,
    },

    /// Decide a turn and write a replayable record
    Record {
        /// World snapshot (.ron or .json)
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Kingdom to decide for
        #[arg(short, long)]
        kingdom: String,

        /// Record file to write
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Replay a turn record and check the orders are identical
    Verify {
        /// Record file
        path: PathBuf,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let engine = || -> Result<DecisionEngine> {
        Ok(DecisionEngine::new(load_config(cli.config.as_deref())?))
    };

    match cli.command {
        Commands::Decide { snapshot, kingdom } => {
            let world = load_snapshot(&snapshot)?;
            let orders = commands::decide(&world, &KingdomId::new(kingdom), &engine()?)?;
            println!("{}", render(&orders, cli.format)?);
        }
        Commands::Plan { snapshot, parallel } => {
            let world = load_snapshot(&snapshot)?;
            let plan = commands::plan(&world, &engine()?, parallel);
            println!("{}", render(&plan, cli.format)?);
        }
        Commands::Validate { path } => {
            tracing::info!("Validating snapshot: {}", path.display());
            validate_snapshot_file(&path)?;
        }
        Commands::Disposition {
            snapshot,
            general,
            captor,
        } => {
            let world = load_snapshot(&snapshot)?;
            let disposition = commands::disposition(
                &world,
                &GeneralId::new(general),
                &KingdomId::new(captor),
                &engine()?,
            )?;
            println!("{disposition}");
        }
        Commands::Record {
            snapshot,
            kingdom,
            out,
        } => {
            let world = load_snapshot(&snapshot)?;
            commands::record(&world, &KingdomId::new(kingdom), &engine()?, &out)?;
        }
        Commands::Verify { path } => {
            verify(&path)?;
        }
    }
    Ok(())
}

fn verify(path: &Path) -> Result<()> {
    let record = commands::verify(path)?;
    println!(
        "{}: {} order(s), hash {:#018x}",
        record.kingdom,
        record.orders.len(),
        record.orders_hash
    );
    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::AppState;

const LOG_ENV: &str = "WAYPOINT_LOG";

#[derive(Parser)]
#[command(name = "waypoint")]
#[command(
    about = "Waypoint - cruise budget, packing, itinerary, pricing and destination planner",
    long_about = None
)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "WAYPOINT_CONFIG")]
    config: Option<PathBuf>,

    /// Keep plans in memory only; nothing is read from or written to disk
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cruise budget planner
    Budget {
        #[command(subcommand)]
        action: commands::budget::BudgetAction,
    },
    /// Packing checklist
    Packing {
        #[command(subcommand)]
        action: commands::packing::PackingAction,
    },
    /// Itinerary builder
    Itinerary {
        #[command(subcommand)]
        action: commands::itinerary::ItineraryAction,
    },
    /// Destination comparison
    Compare {
        #[command(subcommand)]
        action: commands::compare::CompareAction,
    },
    /// Cruise price calculator
    Price {
        #[command(subcommand)]
        action: commands::price::PriceAction,
    },
    /// Countdown to departure with planning milestones
    Countdown {
        #[command(subcommand)]
        action: commands::countdown::CountdownAction,
    },
    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let state = AppState::load(cli.config, cli.ephemeral)?;

    match cli.command {
        Commands::Budget { action } => commands::budget::run(&state, action).await,
        Commands::Packing { action } => commands::packing::run(&state, action).await,
        Commands::Itinerary { action } => commands::itinerary::run(&state, action).await,
        Commands::Compare { action } => commands::compare::run(&state, action).await,
        Commands::Price { action } => commands::price::run(&state, action).await,
        Commands::Countdown { action } => commands::countdown::run(&state, action).await,
        Commands::Config { action } => commands::config::run(&state, action),
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

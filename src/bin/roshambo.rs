//! roshambo CLI - rock-paper-scissors against adaptive computer strategies
//!
//! This CLI provides:
//! - Interactive play against the random, reddit or psychology strategy
//! - Headless simulations of scripted players
//! - Inspection of the sequence predictor for a given history

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "roshambo")]
#[command(version, about = "Rock-paper-scissors with an adaptive opponent", long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively on the terminal
    Play(roshambo::cli::commands::play::PlayArgs),

    /// Simulate a scripted player against a computer strategy
    Simulate(roshambo::cli::commands::simulate::SimulateArgs),

    /// Show the predictor's reasoning for a history
    Inspect(roshambo::cli::commands::inspect::InspectArgs),
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Commands::Play(args) => roshambo::cli::commands::play::execute(args),
        Commands::Simulate(args) => roshambo::cli::commands::simulate::execute(args).map(|_| ()),
        Commands::Inspect(args) => roshambo::cli::commands::inspect::execute(args),
    }
}

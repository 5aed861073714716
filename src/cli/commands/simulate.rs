//! Simulate command - pit a scripted player against a computer strategy

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::App,
    cli::output::{format_rate, print_kv, print_section},
    players::PlayerKind,
    session::{
        JsonlObserver, MetricsObserver, ProgressObserver, SimulationConfig, SimulationResult,
        TracingObserver,
    },
    strategies::GameMode,
};

#[derive(Parser, Debug)]
#[command(about = "Simulate a scripted player against a computer strategy")]
pub struct SimulateArgs {
    /// Scripted player (rock, paper, scissors, cycle, random, win-stay, copy)
    #[arg(long, short = 'p', default_value = "random")]
    pub player: PlayerKind,

    /// Computer strategy (random, reddit, psychology)
    #[arg(long, short = 'm', default_value = "psychology")]
    pub mode: GameMode,

    /// Number of rounds
    #[arg(long, short = 'r', default_value_t = 300)]
    pub rounds: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the summary as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Write every round as JSON Lines
    #[arg(long)]
    pub rounds_log: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

pub fn execute(args: SimulateArgs) -> Result<SimulationResult> {
    let app = App::new();
    let config = SimulationConfig {
        rounds: args.rounds,
        seed: args.seed,
        mode: args.mode,
        player: args.player,
    };

    print_section("Simulation");
    print_kv("Player", &args.player.to_string());
    print_kv("Computer", args.mode.as_str());
    print_kv("Rounds", &args.rounds.to_string());
    if let Some(seed) = args.seed {
        print_kv("Seed", &seed.to_string());
    }

    let mut simulation = app
        .create_simulation(config)
        .with_observer(Box::new(MetricsObserver::new()))
        .with_observer(Box::new(TracingObserver));
    if !args.no_progress {
        simulation = simulation.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.rounds_log {
        let observer = JsonlObserver::new(path)
            .with_context(|| format!("failed to open round log {}", path.display()))?;
        simulation = simulation.with_observer(Box::new(observer));
    }

    let mut player = app.create_player(args.player, args.seed);
    let computer = app.create_strategy(args.mode, args.seed);
    let result = simulation.run(player.as_mut(), computer)?;

    print_section("Results (computer perspective)");
    print_kv(
        "Wins",
        &format!("{} ({})", result.computer_wins, format_rate(result.computer_win_rate)),
    );
    print_kv("Ties", &format!("{} ({})", result.ties, format_rate(result.tie_rate)));
    print_kv(
        "Losses",
        &format!("{} ({})", result.player_wins, format_rate(result.player_win_rate)),
    );
    print_kv("Longest lose streak", &result.longest_lose_streak.to_string());

    if let Some(path) = &args.export {
        result
            .save(path)
            .with_context(|| format!("failed to export summary to {}", path.display()))?;
        println!("\nSummary exported to: {}", path.display());
    }
    if let Some(path) = &args.rounds_log {
        println!("Round log written to: {}", path.display());
    }

    Ok(result)
}

//! Play command - interactive game on the terminal

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::{App, SessionConfig},
    cli::output::{write_round_report, write_scoreboard},
    rps::Move,
    strategies::GameMode,
};

#[derive(Parser, Debug)]
#[command(about = "Play rock-paper-scissors against the computer")]
pub struct PlayArgs {
    /// Computer strategy (random, reddit, psychology)
    #[arg(long, short = 'm', default_value = "psychology")]
    pub mode: GameMode,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&args, stdin.lock(), stdout.lock())
}

/// Game loop over arbitrary input and output, one command per line.
///
/// `r`/`p`/`s` or a full move name plays a round; `q` or end of input quits.
pub fn run<R: BufRead, W: Write>(args: &PlayArgs, input: R, mut out: W) -> Result<()> {
    let mut config = SessionConfig::new(args.mode);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut session = App::new().create_session(config);
    session.start(None)?;

    writeln!(out, "Mode: {}. Enter r, p or s (q to quit).", args.mode)?;
    for line in input.lines() {
        let line = line.context("failed to read input")?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if command.eq_ignore_ascii_case("q") || command.eq_ignore_ascii_case("quit") {
            break;
        }
        match command.parse::<Move>() {
            Ok(player_move) => {
                let report = session.play_round(player_move)?;
                writeln!(out, "\nRound {}", report.round_num + 1)?;
                write_round_report(&mut out, &report)?;
            }
            Err(err) => writeln!(out, "{err}")?,
        }
    }

    let scoreboard = session.finish()?;
    writeln!(out)?;
    write_scoreboard(&mut out, scoreboard)?;
    Ok(())
}

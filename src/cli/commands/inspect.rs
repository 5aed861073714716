//! Inspect command - show what the predictor makes of a given history

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{format_performance, print_kv, print_section, print_subsection},
    predictor::{Performance, SequencePredictor},
    rps::{History, Move},
};

#[derive(Parser, Debug)]
#[command(about = "Replay a history into a fresh predictor and show its reasoning")]
pub struct InspectArgs {
    /// Round labels, player move first, e.g. "rp,rr,ps"
    #[arg(long)]
    pub history: String,
}

/// What the predictor concluded for a history.
#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    pub performances: Vec<Performance>,
    pub average: Performance,
    pub prediction: Move,
}

/// Train a fresh predictor round by round on `history`, then query it.
pub fn inspect(history: &History) -> (SequencePredictor, Inspection) {
    let mut predictor = SequencePredictor::new();
    let mut played = History::new();
    for round in history.iter() {
        played.push(*round);
        predictor.record_round(&played);
    }

    let performances = predictor.relevant_performances(history);
    let average = Performance::mean(&performances).unwrap_or_else(Performance::uniform_prior);
    let prediction = predictor.predict_next_opponent_move(history);
    (
        predictor,
        Inspection {
            performances,
            average,
            prediction,
        },
    )
}

pub fn execute(args: InspectArgs) -> Result<()> {
    let history: History = args
        .history
        .parse()
        .with_context(|| format!("failed to parse history '{}'", args.history))?;
    let (predictor, inspection) = inspect(&history);

    print_section("Predictor inspection");
    print_kv("Rounds", &history.len().to_string());

    print_subsection("Performance by context length");
    for (length, perf) in inspection.performances.iter().enumerate() {
        let context = if length == 0 {
            "(none)".to_string()
        } else {
            History::from(history.suffix(length).to_vec()).to_labels()
        };
        println!("  {length:>3} {context:<24} {}", format_performance(perf));
    }

    print_subsection("Decision");
    print_kv("Average", &format_performance(&inspection.average));
    print_kv("Next computer move", inspection.prediction.name());

    let stats = predictor.stats();
    print_subsection("Tree");
    print_kv("Nodes", &stats.nodes.to_string());
    print_kv("Max depth", &stats.max_depth.to_string());
    print_kv("Root samples", &stats.root_games.to_string());
    Ok(())
}

//! The simulate and inspect commands driven through their clap arguments.

mod common;

use clap::Parser;
use common::history;
use roshambo::{
    Move,
    cli::commands::{
        inspect::{InspectArgs, inspect},
        simulate::{self, SimulateArgs},
    },
    players::PlayerKind,
    session::SimulationResult,
    strategies::GameMode,
};

#[test]
fn simulate_exports_summary_and_round_log() {
    let dir = tempfile::tempdir().unwrap();
    let summary = dir.path().join("summary.json");
    let rounds = dir.path().join("rounds.jsonl");

    let args = SimulateArgs::parse_from([
        "simulate",
        "--player",
        "win-stay",
        "--mode",
        "psychology",
        "--rounds",
        "60",
        "--seed",
        "8",
        "--no-progress",
        "--export",
        summary.to_str().unwrap(),
        "--rounds-log",
        rounds.to_str().unwrap(),
    ]);
    assert_eq!(args.player, PlayerKind::WinStay);
    assert_eq!(args.mode, GameMode::Psychology);

    let result = simulate::execute(args).unwrap();
    let loaded = SimulationResult::load(&summary).unwrap();
    assert_eq!(loaded.total_rounds, 60);
    assert_eq!(loaded.computer_wins, result.computer_wins);
    assert_eq!(loaded.history, result.history);
    assert!((loaded.computer_win_rate - result.computer_win_rate).abs() < 1e-9);

    let log = std::fs::read_to_string(&rounds).unwrap();
    assert_eq!(log.lines().count(), 60);
}

#[test]
fn simulate_defaults() {
    let args = SimulateArgs::parse_from(["simulate"]);
    assert_eq!(args.player, PlayerKind::Random);
    assert_eq!(args.mode, GameMode::Psychology);
    assert_eq!(args.rounds, 300);
    assert!(args.seed.is_none());
    assert!(args.export.is_none());
    assert!(!args.no_progress);
}

#[test]
fn simulate_rejects_unknown_names() {
    assert!(SimulateArgs::try_parse_from(["simulate", "--mode", "telepathy"]).is_err());
    assert!(SimulateArgs::try_parse_from(["simulate", "--player", "lizard"]).is_err());
}

#[test]
fn constant_player_parses_from_move_names() {
    let args = SimulateArgs::parse_from(["simulate", "-p", "scissors", "-r", "10"]);
    assert_eq!(args.player, PlayerKind::Constant(Move::Scissors));
    assert_eq!(args.rounds, 10);
}

#[test]
fn simulate_reports_missing_export_directory() {
    let dir = tempfile::tempdir().unwrap();
    let summary = dir.path().join("missing").join("summary.json");
    let args = SimulateArgs::parse_from([
        "simulate",
        "--rounds",
        "5",
        "--no-progress",
        "--export",
        summary.to_str().unwrap(),
    ]);
    let err = simulate::execute(args).unwrap_err();
    assert!(err.to_string().contains("failed to export summary"));
}

#[test]
fn inspect_replays_history() {
    let args = InspectArgs::parse_from(["inspect", "--history", "sr,sr,sr"]);
    let (predictor, inspection) = inspect(&history(&args.history));

    // [], [sr] and [sr, sr] are known; [sr, sr, sr] is not.
    assert_eq!(inspection.performances.len(), 3);
    assert_eq!(inspection.prediction, Move::Rock);
    assert_eq!(predictor.stats().rounds_recorded, 3);
}

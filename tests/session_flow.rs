//! End-to-end sessions and simulations built through the app container.

use roshambo::{
    Move, Outcome,
    app::{App, SessionConfig},
    players::PlayerKind,
    session::{JsonlObserver, MetricsObserver, RoundObservation, SimulationConfig},
    strategies::{GameMode, PsychologyStrategy, RedditStrategy},
};

fn simulate(app: &App, config: SimulationConfig) -> roshambo::session::SimulationResult {
    let mut player = app.create_player(config.player, config.seed);
    let computer = app.create_strategy(config.mode, config.seed);
    app.create_simulation(config)
        .run(player.as_mut(), computer)
        .unwrap()
}

#[test]
fn seeded_simulation_is_reproducible() {
    let app = App::new();
    for mode in GameMode::ALL {
        let config = SimulationConfig {
            rounds: 120,
            seed: Some(2024),
            mode,
            player: PlayerKind::Random,
        };
        let first = simulate(&app, config.clone());
        let second = simulate(&app, config);
        assert_eq!(first, second, "{mode} run was not reproducible");
    }
}

#[test]
fn container_default_seed_makes_runs_reproducible() {
    let app = App::for_testing().with_default_seed(99).build();
    let config = SimulationConfig {
        rounds: 80,
        seed: None,
        mode: GameMode::Reddit,
        player: PlayerKind::Random,
    };
    assert_eq!(simulate(&app, config.clone()), simulate(&app, config));
}

#[test]
fn psychology_exploits_predictable_players() {
    let app = App::new();
    let players = [
        PlayerKind::Constant(Move::Paper),
        PlayerKind::Cycle,
        PlayerKind::WinStay,
        PlayerKind::Copy,
    ];
    for player in players {
        let result = simulate(
            &app,
            SimulationConfig {
                rounds: 300,
                seed: Some(5),
                mode: GameMode::Psychology,
                player,
            },
        );
        assert_eq!(result.total_rounds, 300);
        assert!(
            result.computer_win_rate > 0.8,
            "psychology only won {:.1}% against {player}",
            result.computer_win_rate * 100.0
        );
    }
}

#[test]
fn reddit_session_follows_the_heuristic() {
    let app = App::new();
    let mut session = app.create_session(SessionConfig::new(GameMode::Reddit).with_seed(11));
    let moves = [
        Move::Rock,
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Scissors,
        Move::Paper,
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Rock,
    ];
    for mv in moves.iter().cycle().take(60) {
        session.play_round(*mv).unwrap();
    }

    let rounds = session.history().rounds();
    for pair in rounds.windows(2) {
        if let Some(expected) = RedditStrategy::respond_to(&pair[0]) {
            assert_eq!(pair[1].opponent, expected, "after {}", pair[0]);
        }
    }
}

#[test]
fn psychology_session_trains_its_predictor() {
    let app = App::new();
    let mut session = app.create_session(SessionConfig::new(GameMode::Psychology));
    for _ in 0..10 {
        session.play_round(Move::Scissors).unwrap();
    }
    let strategy = session
        .strategy()
        .as_any()
        .downcast_ref::<PsychologyStrategy>()
        .unwrap();
    let stats = strategy.predictor().stats();
    assert_eq!(stats.rounds_recorded, 10);
    assert_eq!(stats.root_games, 10);
    assert_eq!(session.scoreboard().computer_wins, 10);
}

#[test]
fn session_reports_follow_the_scoreboard() {
    let app = App::new();
    let mut session = app.create_session(SessionConfig::new(GameMode::Psychology));
    session.start(None).unwrap();

    // A fresh predictor opens with rock, then keeps rock while it wins.
    let first = session.play_round(Move::Scissors).unwrap();
    assert_eq!(first.outcome, Outcome::Loss);
    assert_eq!(first.computer_win_rate, 100);
    assert_eq!(first.lose_streak, None);

    let second = session.play_round(Move::Scissors).unwrap();
    assert_eq!(second.lose_streak, Some(2));

    let third = session.play_round(Move::Rock).unwrap();
    assert_eq!(third.round.opponent, Move::Rock);
    assert_eq!(third.outcome, Outcome::Tie);
    assert_eq!(third.lose_streak, None);
    // Ties leave the rates untouched.
    assert_eq!(third.player_win_rate, 0);
    assert_eq!(third.computer_win_rate, 100);

    let scoreboard = session.finish().unwrap();
    assert_eq!(scoreboard.rounds, 3);
    assert_eq!(scoreboard.decisive_rounds(), 2);
}

#[test]
fn observers_see_every_round() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("rounds.jsonl");

    let app = App::for_testing().with_default_seed(3).build();
    let config = SimulationConfig {
        rounds: 25,
        seed: None,
        mode: GameMode::Random,
        player: PlayerKind::Cycle,
    };
    let mut player = app.create_player(config.player, None);
    let computer = app.create_strategy(config.mode, None);
    let result = app
        .create_simulation(config)
        .with_observer(Box::new(MetricsObserver::new()))
        .with_observer(Box::new(JsonlObserver::new(&log_path).unwrap()))
        .run(player.as_mut(), computer)
        .unwrap();

    let log = std::fs::read_to_string(&log_path).unwrap();
    let observations: Vec<RoundObservation> = log
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(observations.len(), 25);

    let labels: Vec<&str> = result.history.split(',').collect();
    for (i, observation) in observations.iter().enumerate() {
        assert_eq!(observation.round_num, i);
        assert_eq!(observation.label, labels[i]);
        assert_eq!(observation.player, Move::from_index(i));
    }
    let last = observations.last().unwrap();
    assert_eq!(last.computer_wins, result.computer_wins);
    assert_eq!(last.player_wins, result.player_wins);
    assert_eq!(last.ties, result.ties);
}

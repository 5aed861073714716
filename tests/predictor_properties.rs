//! Properties of the sequence-performance predictor.

mod common;

use common::{history, replay};
use roshambo::{Move, SequencePredictor};

const EPS: f64 = 1e-12;

#[test]
fn root_is_known_after_any_round() {
    for labels in ["rr", "ps", "sp,rr", "rp,rp,ss,pr"] {
        let (predictor, _) = replay(labels);
        assert!(
            predictor.query_performance(&[]).is_some(),
            "root unknown after '{labels}'"
        );
    }
}

#[test]
fn untrained_path_is_unknown_until_trained() {
    let mut predictor = SequencePredictor::new();
    let path = history("rp,ss");
    assert!(predictor.query_performance(&path).is_none());

    // A training path extending [rp, ss] resolves the prefix.
    predictor.add_path(&history("rp,ss,pr"));
    assert!(predictor.query_performance(&path).is_some());
    assert!(predictor.query_performance(&history("rp")).is_some());
    assert!(predictor.query_performance(&history("rp,ss,pr")).is_none());
}

#[test]
fn estimates_stay_strictly_inside_unit_interval() {
    let (predictor, played) = replay("rp,rp,rp,rp,rp,rp,rp,rp,sr,sr,sr,sr,pp,pp,pp,pp,pp");
    for start in 0..=played.len() {
        if let Some(perf) = predictor.query_performance(&played[start..]) {
            for mv in Move::ALL {
                let estimate = perf.get(mv);
                assert!(estimate > 0.0 && estimate < 1.0, "{estimate} out of range");
            }
        }
    }
}

#[test]
fn single_opponent_win_at_root() {
    let (predictor, _) = replay("rp");
    let root = predictor.query_performance(&[]).unwrap();
    assert!((root.get(Move::Paper) - 2.0 / 3.0).abs() < EPS);
    assert!((root.get(Move::Rock) - 0.5).abs() < EPS);
    assert!((root.get(Move::Scissors) - 0.5).abs() < EPS);
}

#[test]
fn two_ties_at_root() {
    let (predictor, _) = replay("rr,rr");
    let stats = predictor.root().stats(Move::Rock);
    assert_eq!(stats.games, 2);
    assert!((stats.wins - 0.9).abs() < EPS);

    let root = predictor.query_performance(&[]).unwrap();
    assert!((root.get(Move::Rock) - 0.475).abs() < EPS);
}

#[test]
fn empty_history_prediction_is_fixed() {
    let predictor = SequencePredictor::new();
    for _ in 0..5 {
        assert_eq!(predictor.predict_next_opponent_move(&[]), Move::Rock);
    }

    // Still deterministic once the root carries data.
    let (predictor, _) = replay("sp,sp");
    let first = predictor.predict_next_opponent_move(&[]);
    for _ in 0..5 {
        assert_eq!(predictor.predict_next_opponent_move(&[]), first);
    }
}

#[test]
fn unrelated_training_leaves_path_statistics_alone() {
    let (mut predictor, _) = replay("rp,ss,pr");
    let path = history("rp");
    let before = predictor.query_performance(&path).unwrap();

    // Only paths that do not start with rp.
    predictor.add_path(&history("ss,ss,ss"));
    predictor.add_path(&history("pr,sp"));
    predictor.add_path(&history("sr,rr"));

    assert_eq!(predictor.query_performance(&path).unwrap(), before);
}

#[test]
fn unweighted_mean_across_contexts() {
    // Root has lots of paper wins; the [sr] context has seen one scissors win.
    let mut predictor = SequencePredictor::new();
    for _ in 0..20 {
        predictor.add_path(&history("rp"));
    }
    predictor.add_path(&history("sr,ps"));

    let played = history("sr");
    let perfs = predictor.relevant_performances(&played);
    assert_eq!(perfs.len(), 2);

    // root: paper 21/22, others 0.5; [sr]: scissors 2/3, others 0.5
    let paper = (21.0 / 22.0 + 0.5) / 2.0;
    let scissors = (0.5 + 2.0 / 3.0) / 2.0;
    assert!(paper > scissors);
    assert_eq!(predictor.predict_next_opponent_move(&played), Move::Paper);
}

#[test]
fn learns_to_counter_a_cycling_player() {
    // Player cycles rock, paper, scissors; the computer always loses to a
    // naive guess but the context after each player move becomes predictive.
    let mut predictor = SequencePredictor::new();
    let mut played = roshambo::History::new();
    let mut late_wins = 0;
    for i in 0..120 {
        let player = Move::from_index(i);
        let computer = predictor.predict_next_opponent_move(&played);
        let round = roshambo::Round::new(player, computer);
        if i >= 60 && round.opponent_outcome() == roshambo::Outcome::Win {
            late_wins += 1;
        }
        played.push(round);
        predictor.record_round(&played);
    }
    assert!(late_wins > 40, "only {late_wins} wins in the last 60 rounds");
}

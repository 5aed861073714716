//! Shared helpers for the integration tests.

use roshambo::{History, SequencePredictor};

/// Parse a comma-separated list of round labels.
pub fn history(labels: &str) -> History {
    labels.parse().expect("valid round labels")
}

/// Feed `labels` into a fresh predictor one round at a time, the way a
/// session does after every played round.
#[allow(dead_code)]
pub fn replay(labels: &str) -> (SequencePredictor, History) {
    let mut predictor = SequencePredictor::new();
    let mut played = History::new();
    for round in history(labels).iter() {
        played.push(*round);
        predictor.record_round(&played);
    }
    (predictor, played)
}

//! Per-move success estimates

use serde::{Deserialize, Serialize};

use crate::rps::Move;

/// Estimated success probability of each computer move, indexed by
/// [`Move::index`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    estimates: [f64; 3],
}

impl Performance {
    pub fn new(estimates: [f64; 3]) -> Self {
        Self { estimates }
    }

    /// Estimates with no observations at all.
    pub fn uniform_prior() -> Self {
        Self::new([0.5; 3])
    }

    pub fn get(&self, mv: Move) -> f64 {
        self.estimates[mv.index()]
    }

    pub fn estimates(&self) -> [f64; 3] {
        self.estimates
    }

    /// Elementwise arithmetic mean, unweighted by sample counts.
    ///
    /// Returns `None` for an empty input.
    pub fn mean<'a, I>(performances: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Performance>,
    {
        let mut sum = [0.0; 3];
        let mut count = 0usize;
        for perf in performances {
            for (total, estimate) in sum.iter_mut().zip(perf.estimates) {
                *total += estimate;
            }
            count += 1;
        }
        if count == 0 {
            return None;
        }
        Some(Self::new(sum.map(|total| total / count as f64)))
    }

    /// Move with the highest estimate.
    ///
    /// Ties resolve to the earliest move in rock, paper, scissors order: a later
    /// move only wins when strictly greater.
    pub fn best_move(&self) -> Move {
        let mut best = Move::Rock;
        for mv in [Move::Paper, Move::Scissors] {
            if self.get(mv) > self.get(best) {
                best = mv;
            }
        }
        best
    }
}

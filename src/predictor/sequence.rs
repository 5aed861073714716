//! Round-history trie with Laplace-smoothed move statistics.
//!
//! Every node stands for a path of rounds and counts how each computer move
//! fared in the round that *followed* that path. Recording a round therefore
//! credits the latest round to every trailing context that preceded it, and a
//! query for the current history asks what tends to work next.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{node::PredictorNode, performance::Performance};
use crate::rps::{Move, Round};

/// Online move predictor for the computer side.
///
/// Owned by the caller for the lifetime of one session; the tree only grows.
#[derive(Debug, Default)]
pub struct SequencePredictor {
    root: PredictorNode,
    rounds_recorded: usize,
}

/// Size summary of a predictor tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictorStats {
    pub nodes: usize,
    pub max_depth: usize,
    pub root_games: u64,
    pub rounds_recorded: usize,
}

impl SequencePredictor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &PredictorNode {
        &self.root
    }

    /// Credit the last round of `path` to the node reached by the rest of it.
    ///
    /// Intermediate nodes are created as needed. An empty path is ignored.
    pub fn add_path(&mut self, path: &[Round]) {
        let Some((tail, prefix)) = path.split_last() else {
            return;
        };
        let mut node = &mut self.root;
        for &round in prefix {
            node = node.child_or_insert(round);
        }
        node.record(tail.opponent, tail.score());
    }

    /// Train on a history whose last entry is the round just played.
    ///
    /// Adds every suffix of `history` as a training path, so the new round is
    /// recorded once per preceding context length.
    pub fn record_round(&mut self, history: &[Round]) {
        for start in 0..history.len() {
            self.add_path(&history[start..]);
        }
        self.rounds_recorded += 1;
        debug!(
            rounds = history.len(),
            nodes = self.root.node_count(),
            "predictor recorded round"
        );
    }

    /// Estimates at the node for `path`, or `None` if that path was never
    /// trained.
    pub fn query_performance(&self, path: &[Round]) -> Option<Performance> {
        let mut node = &self.root;
        for &round in path {
            node = node.child(round)?;
        }
        Some(node.performance())
    }

    /// Performances for the empty suffix and then ever longer suffixes of
    /// `history`, up to the first one that is unknown.
    ///
    /// An unknown suffix means no longer suffix can be known either, so the
    /// scan stops there.
    pub fn relevant_performances(&self, history: &[Round]) -> Vec<Performance> {
        let mut performances = Vec::with_capacity(history.len() + 1);
        performances.push(self.root.performance());
        for start in (0..history.len()).rev() {
            match self.query_performance(&history[start..]) {
                Some(perf) => performances.push(perf),
                None => break,
            }
        }
        performances
    }

    /// Computer move most likely to succeed next.
    ///
    /// Averages the relevant performances without weighting and takes the
    /// best move (rock, paper, scissors priority on ties). Because the
    /// statistics score the computer's own moves, this is the move expected to
    /// beat the player's likeliest next move.
    pub fn predict_next_opponent_move(&self, history: &[Round]) -> Move {
        let performances = self.relevant_performances(history);
        let average =
            Performance::mean(&performances).unwrap_or_else(Performance::uniform_prior);
        let prediction = average.best_move();
        debug!(
            contexts = performances.len(),
            rock = average.get(Move::Rock),
            paper = average.get(Move::Paper),
            scissors = average.get(Move::Scissors),
            %prediction,
            "predictor chose move"
        );
        prediction
    }

    pub fn stats(&self) -> PredictorStats {
        PredictorStats {
            nodes: self.root.node_count(),
            max_depth: self.root.depth(),
            root_games: self.root.total_games(),
            rounds_recorded: self.rounds_recorded,
        }
    }

    /// Forget everything learned so far.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

//! Trie node for the sequence predictor

use serde::{Deserialize, Serialize};

use super::performance::Performance;
use crate::rps::{Move, Round};

/// Observed results of one computer move after a given path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveStats {
    /// Times the move was played after the path
    pub games: u32,
    /// Accumulated score (win 1, tie 0.45, loss 0)
    pub wins: f64,
}

impl MoveStats {
    pub fn record(&mut self, score: f64) {
        self.games += 1;
        self.wins += score;
    }

    /// Laplace's rule of succession: `(wins + 1) / (games + 2)`.
    pub fn estimate(&self) -> f64 {
        (self.wins + 1.0) / (f64::from(self.games) + 2.0)
    }
}

/// A node in the round-history trie.
///
/// Children are indexed by [`Round::index`], so the shape is fixed: three move
/// counters and at most nine children.
#[derive(Debug, Default)]
pub struct PredictorNode {
    stats: [MoveStats; 3],
    children: [Option<Box<PredictorNode>>; Round::COUNT],
}

impl PredictorNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self, mv: Move) -> &MoveStats {
        &self.stats[mv.index()]
    }

    pub(crate) fn record(&mut self, mv: Move, score: f64) {
        self.stats[mv.index()].record(score);
    }

    pub fn child(&self, round: Round) -> Option<&PredictorNode> {
        self.children[round.index()].as_deref()
    }

    /// Child for `round`, created on first use.
    pub(crate) fn child_or_insert(&mut self, round: Round) -> &mut PredictorNode {
        self.children[round.index()].get_or_insert_with(Box::default)
    }

    pub fn children(&self) -> impl Iterator<Item = (Round, &PredictorNode)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(index, child)| child.as_deref().map(|c| (Round::from_index(index), c)))
    }

    /// Smoothed success estimate of each move at this node.
    pub fn performance(&self) -> Performance {
        Performance::new(self.stats.map(|s| s.estimate()))
    }

    /// Total samples across the three moves.
    pub fn total_games(&self) -> u64 {
        self.stats.iter().map(|s| u64::from(s.games)).sum()
    }

    /// Number of nodes in this subtree, this one included.
    pub fn node_count(&self) -> usize {
        1 + self.children().map(|(_, c)| c.node_count()).sum::<usize>()
    }

    /// Longest path below this node (0 for a leaf).
    pub fn depth(&self) -> usize {
        self.children()
            .map(|(_, c)| 1 + c.depth())
            .max()
            .unwrap_or(0)
    }
}

//! A single played round and its outcome

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::moves::Move;
use crate::Error;

/// Score credited to a move that tied.
///
/// Kept below the 0.5 Laplace prior so an untried move is preferred over one
/// that has only ever tied.
pub const TIE_SCORE: f64 = 0.45;

/// Result of a round from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Tie,
    Loss,
}

impl Outcome {
    /// Flip the perspective.
    pub fn reverse(self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Tie => Outcome::Tie,
            Outcome::Loss => Outcome::Win,
        }
    }

    /// Scalar used to train the predictor: win 1, tie 0.45, loss 0.
    pub fn score(self) -> f64 {
        match self {
            Outcome::Win => 1.0,
            Outcome::Tie => TIE_SCORE,
            Outcome::Loss => 0.0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Win => "win",
            Outcome::Tie => "tie",
            Outcome::Loss => "lose",
        })
    }
}

/// One round: the human player's move and the computer opponent's move.
///
/// The two-character label (`"rp"` = player rock, opponent paper) is both the
/// display form and the parse form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Round {
    pub player: Move,
    pub opponent: Move,
}

impl Round {
    /// Number of distinct rounds.
    pub const COUNT: usize = 9;

    pub fn new(player: Move, opponent: Move) -> Self {
        Self { player, opponent }
    }

    /// Outcome for the opponent (the computer side).
    pub fn opponent_outcome(&self) -> Outcome {
        if self.player == self.opponent {
            Outcome::Tie
        } else if self.opponent.beats() == self.player {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }

    /// Outcome for the player.
    pub fn player_outcome(&self) -> Outcome {
        self.opponent_outcome().reverse()
    }

    /// How good the opponent's choice was in this round.
    pub fn score(&self) -> f64 {
        self.opponent_outcome().score()
    }

    /// Dense index in `0..9`: `player * 3 + opponent`.
    pub fn index(&self) -> usize {
        self.player.index() * 3 + self.opponent.index()
    }

    /// Inverse of [`Round::index`].
    pub fn from_index(index: usize) -> Self {
        let index = index % Self::COUNT;
        Self::new(Move::from_index(index / 3), Move::from_index(index % 3))
    }

    /// The two-character label.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.player.code(), self.opponent.code())
    }
}

impl FromStr for Round {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidRoundLabel {
            label: s.to_string(),
        };
        let mut chars = s.trim().chars();
        let (Some(p), Some(o), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let player = Move::from_code(p).ok_or_else(invalid)?;
        let opponent = Move::from_code(o).ok_or_else(invalid)?;
        Ok(Round::new(player, opponent))
    }
}

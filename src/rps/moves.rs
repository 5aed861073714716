//! The three moves and their cyclic dominance relation

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// One of the three game symbols.
///
/// The declaration order (rock, paper, scissors) is the canonical order used
/// for indexing statistics and for breaking ties between equal estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves in canonical order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Dense index in `0..3` following [`Move::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }

    /// Inverse of [`Move::index`]; indices wrap modulo 3.
    pub const fn from_index(index: usize) -> Move {
        Move::ALL[index % 3]
    }

    /// The move this one defeats.
    pub const fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// The move that defeats this one.
    pub const fn beaten_by(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// Single-character code used in round labels.
    pub const fn code(self) -> char {
        match self {
            Move::Rock => 'r',
            Move::Paper => 'p',
            Move::Scissors => 's',
        }
    }

    /// Parse a single-character code (case-insensitive).
    pub fn from_code(code: char) -> Option<Move> {
        match code.to_ascii_lowercase() {
            'r' => Some(Move::Rock),
            'p' => Some(Move::Paper),
            's' => Some(Move::Scissors),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Accepts either the single-letter code or the full name.
impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Some(mv) = Move::from_code(c)
        {
            return Ok(mv);
        }
        Move::ALL
            .into_iter()
            .find(|mv| mv.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::InvalidMoveCode {
                code: trimmed.to_string(),
            })
    }
}

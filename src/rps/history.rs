//! Append-only record of every round played in a session

use std::{fmt, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};

use super::round::Round;
use crate::Error;

/// Ordered rounds of the current session, oldest first.
///
/// Derefs to `[Round]` so it can be handed straight to the predictor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    rounds: Vec<Round>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed round.
    pub fn push(&mut self, round: Round) {
        self.rounds.push(round);
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// The trailing `n` rounds (all of them when `n` exceeds the length).
    pub fn suffix(&self, n: usize) -> &[Round] {
        let start = self.rounds.len().saturating_sub(n);
        &self.rounds[start..]
    }

    /// Labels joined with commas, e.g. `"rr,ps"`.
    pub fn to_labels(&self) -> String {
        self.to_string()
    }
}

impl Deref for History {
    type Target = [Round];

    fn deref(&self) -> &Self::Target {
        &self.rounds
    }
}

impl From<Vec<Round>> for History {
    fn from(rounds: Vec<Round>) -> Self {
        Self { rounds }
    }
}

impl FromIterator<Round> for History {
    fn from_iter<I: IntoIterator<Item = Round>>(iter: I) -> Self {
        Self {
            rounds: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, round) in self.rounds.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{round}")?;
        }
        Ok(())
    }
}

/// Parses labels separated by commas and/or whitespace.
impl FromStr for History {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(str::parse::<Round>)
            .collect()
    }
}

//! Heuristic opponent based on the folk advice for beating humans at
//! rock-paper-scissors: winners repeat, losers copy the winning move.

use rand::{SeedableRng, random, rngs::StdRng};

use super::random::random_move;
use crate::{
    Result,
    ports::Strategy,
    rps::{Move, Outcome, Round},
};

/// Reacts to the previous round only.
///
/// - first round or a tie: random
/// - computer won: the player is expected to copy the computer's move, so play
///   the move the player's last move beats
/// - computer lost: the player is expected to repeat, so play the move the
///   computer's last move beats (which beats the player's last move)
pub struct RedditStrategy {
    name: String,
    rng: StdRng,
}

impl RedditStrategy {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_seed(name, random())
    }

    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The deterministic response to `previous`, or `None` when the heuristic
    /// falls back to a random move.
    pub fn respond_to(previous: &Round) -> Option<Move> {
        match previous.opponent_outcome() {
            Outcome::Tie => None,
            Outcome::Win => Some(previous.player.beats()),
            Outcome::Loss => Some(previous.opponent.beats()),
        }
    }
}

impl Strategy for RedditStrategy {
    fn select_move(&mut self, history: &[Round]) -> Result<Move> {
        let response = history.last().and_then(Self::respond_to);
        Ok(response.unwrap_or_else(|| random_move(&mut self.rng)))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

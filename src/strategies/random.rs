//! Uniformly random computer opponent

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Result,
    ports::Strategy,
    rps::{Move, Round},
};

/// Draw a move uniformly at random.
pub(crate) fn random_move(rng: &mut impl Rng) -> Move {
    Move::from_index(rng.random_range(0..3))
}

/// Random policy (baseline)
pub struct RandomStrategy {
    name: String,
    rng: StdRng,
}

impl RandomStrategy {
    /// Create a new random strategy seeded from entropy
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a new random strategy with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn select_move(&mut self, _history: &[Round]) -> Result<Move> {
        Ok(random_move(&mut self.rng))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_moves() {
        let mut a = RandomStrategy::with_seed("a", 9);
        let mut b = RandomStrategy::with_seed("b", 9);
        for _ in 0..50 {
            assert_eq!(a.select_move(&[]).unwrap(), b.select_move(&[]).unwrap());
        }
    }

    #[test]
    fn covers_every_move() {
        let mut strategy = RandomStrategy::with_seed("random", 3);
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[strategy.select_move(&[]).unwrap().index()] = true;
        }
        assert_eq!(seen, [true; 3]);
    }
}

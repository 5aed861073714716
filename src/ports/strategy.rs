//! Strategy port - abstraction over anything that chooses moves from history
//!
//! Both the computer opponents (random, reddit, psychology) and the scripted
//! players used by simulations implement this trait.

use crate::{
    Result,
    rps::{Move, Round},
};

/// Strategy trait - unified interface for move selection
///
/// History is always recorded as `(player, opponent)` rounds, oldest first.
/// Computer strategies read `round.opponent` as their own move; scripted
/// players read `round.player`.
///
/// # Event Sequence
///
/// For each round:
/// 1. `select_move(history)` with the rounds played so far
/// 2. the round is appended to the history
/// 3. `observe(history)` with the updated history
///
/// # Examples
///
/// ```
/// use roshambo::{ports::Strategy, rps::{Move, Round}};
///
/// struct AlwaysPaper;
///
/// impl Strategy for AlwaysPaper {
///     fn select_move(&mut self, _history: &[Round]) -> roshambo::Result<Move> {
///         Ok(Move::Paper)
///     }
///
///     fn name(&self) -> &str {
///         "always-paper"
///     }
///
///     fn as_any(&self) -> &dyn std::any::Any {
///         self
///     }
/// }
/// ```
pub trait Strategy: Send {
    /// Choose the next move given every round played so far.
    fn select_move(&mut self, history: &[Round]) -> Result<Move>;

    /// Learn from the history after a round has been appended.
    ///
    /// The default implementation does nothing, suitable for stateless
    /// strategies.
    fn observe(&mut self, _history: &[Round]) -> Result<()> {
        Ok(())
    }

    /// Name used in summaries and logs.
    fn name(&self) -> &str;

    /// Discard anything learned so far.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }

    /// Seed the strategy's internal random number generator.
    ///
    /// Sessions call this when configured with a seed so runs are
    /// reproducible. Deterministic strategies can ignore it.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }

    /// Enable downcasting to concrete types.
    fn as_any(&self) -> &dyn std::any::Any;
}

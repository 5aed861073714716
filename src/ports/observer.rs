//! Observer port - abstraction for watching a game session
//!
//! Observers collect data while rounds are played without coupling the
//! session to specific output formats or metrics.

use crate::{Result, rps::Round, session::Scoreboard};

/// Observer trait for monitoring a session
///
/// # Event Sequence
///
/// 1. `on_session_start(expected_rounds)` - once, before the first round
/// 2. `on_round(round_num, round, scoreboard)` - after every round
/// 3. `on_session_end(scoreboard)` - once, when the session finishes
///
/// # Examples
///
/// ```
/// use roshambo::{ports::Observer, rps::Round, session::Scoreboard};
///
/// struct TieCounter {
///     ties: usize,
/// }
///
/// impl Observer for TieCounter {
///     fn on_round(
///         &mut self,
///         _round_num: usize,
///         round: &Round,
///         _scoreboard: &Scoreboard,
///     ) -> roshambo::Result<()> {
///         if round.player == round.opponent {
///             self.ties += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called when the session starts.
    ///
    /// `expected_rounds` is `None` for open-ended interactive play.
    fn on_session_start(&mut self, _expected_rounds: Option<usize>) -> Result<()> {
        Ok(())
    }

    /// Called after each round has been recorded and scored.
    ///
    /// `round_num` is 0-based.
    fn on_round(
        &mut self,
        _round_num: usize,
        _round: &Round,
        _scoreboard: &Scoreboard,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when the session ends.
    fn on_session_end(&mut self, _scoreboard: &Scoreboard) -> Result<()> {
        Ok(())
    }
}


//! A single game session against one computer strategy

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::scoreboard::Scoreboard;
use crate::{
    Result,
    ports::{Observer, Strategy},
    rps::{History, Move, Outcome, Round},
};

/// What happened in one round, as shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// 0-based index of the round
    pub round_num: usize,
    pub round: Round,
    /// Result for the player
    pub outcome: Outcome,
    pub player_win_rate: u32,
    pub computer_win_rate: u32,
    /// Lose streak, only once it reaches the display threshold
    pub lose_streak: Option<u32>,
}

/// Owns the history and scoreboard of one session and drives the computer
/// strategy and observers.
pub struct GameSession {
    strategy: Box<dyn Strategy>,
    history: History,
    scoreboard: Scoreboard,
    observers: Vec<Box<dyn Observer>>,
}

impl GameSession {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self {
            strategy,
            history: History::new(),
            scoreboard: Scoreboard::new(),
            observers: Vec::new(),
        }
    }

    /// Add an observer to the session
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Notify observers that play begins.
    pub fn start(&mut self, expected_rounds: Option<usize>) -> Result<()> {
        info!(
            strategy = self.strategy.name(),
            expected_rounds, "session started"
        );
        for observer in &mut self.observers {
            observer.on_session_start(expected_rounds)?;
        }
        Ok(())
    }

    /// Play one round.
    ///
    /// The computer commits to its move from the history alone, before
    /// `player_move` is taken into account.
    pub fn play_round(&mut self, player_move: Move) -> Result<RoundReport> {
        let computer_move = self.strategy.select_move(&self.history)?;
        let round = Round::new(player_move, computer_move);
        let round_num = self.history.len();

        self.history.push(round);
        self.strategy.observe(&self.history)?;
        let outcome = self.scoreboard.record(&round);
        debug!(round_num, %round, %outcome, "round played");

        for observer in &mut self.observers {
            observer.on_round(round_num, &round, &self.scoreboard)?;
        }

        Ok(RoundReport {
            round_num,
            round,
            outcome,
            player_win_rate: self.scoreboard.player_win_rate(),
            computer_win_rate: self.scoreboard.computer_win_rate(),
            lose_streak: self.scoreboard.visible_lose_streak(),
        })
    }

    /// Notify observers that play is over and return the final tally.
    pub fn finish(&mut self) -> Result<&Scoreboard> {
        for observer in &mut self.observers {
            observer.on_session_end(&self.scoreboard)?;
        }
        info!(
            rounds = self.scoreboard.rounds,
            player_wins = self.scoreboard.player_wins,
            computer_wins = self.scoreboard.computer_wins,
            ties = self.scoreboard.ties,
            "session finished"
        );
        Ok(&self.scoreboard)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn strategy(&self) -> &dyn Strategy {
        self.strategy.as_ref()
    }
}

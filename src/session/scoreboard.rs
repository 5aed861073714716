//! Running tally of a session from the player's point of view

use serde::{Deserialize, Serialize};

use crate::rps::{Outcome, Round};

/// Lose streak length at which it is worth telling the player about it.
pub const STREAK_DISPLAY_THRESHOLD: u32 = 2;

/// Win/loss counters for one session.
///
/// Ties are counted but excluded from win rates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub rounds: usize,
    pub ties: usize,
    pub player_wins: usize,
    pub computer_wins: usize,
    /// Consecutive player losses, reset by a tie or a win
    pub lose_streak: u32,
    pub longest_lose_streak: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score a round and return the player's outcome.
    pub fn record(&mut self, round: &Round) -> Outcome {
        let outcome = round.player_outcome();
        self.rounds += 1;
        match outcome {
            Outcome::Win => self.player_wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Loss => self.computer_wins += 1,
        }

        if outcome == Outcome::Loss {
            self.lose_streak += 1;
            self.longest_lose_streak = self.longest_lose_streak.max(self.lose_streak);
        } else {
            self.lose_streak = 0;
        }
        outcome
    }

    /// Rounds that produced a winner.
    pub fn decisive_rounds(&self) -> usize {
        self.player_wins + self.computer_wins
    }

    /// Player wins as a rounded percentage of decisive rounds.
    pub fn player_win_rate(&self) -> u32 {
        percent(self.player_wins, self.decisive_rounds())
    }

    /// Computer wins as a rounded percentage of decisive rounds.
    pub fn computer_win_rate(&self) -> u32 {
        percent(self.computer_wins, self.decisive_rounds())
    }

    /// The current lose streak, once it is long enough to display.
    pub fn visible_lose_streak(&self) -> Option<u32> {
        (self.lose_streak >= STREAK_DISPLAY_THRESHOLD).then_some(self.lose_streak)
    }
}

fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        0
    } else {
        (part as f64 / whole as f64 * 100.0).round() as u32
    }
}

//! Observer implementations for game sessions
//!
//! Observers allow composable data collection during a session without
//! coupling the game loop to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::scoreboard::Scoreboard;
use crate::{
    Error, Result,
    ports::Observer,
    rps::{Move, Outcome, Round},
};

/// One round as written to a JSONL log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundObservation {
    pub round_num: usize,
    pub label: String,
    pub player: Move,
    pub computer: Move,
    /// Result for the computer
    pub outcome: Outcome,
    pub player_wins: usize,
    pub computer_wins: usize,
    pub ties: usize,
}

/// Progress bar observer - shows simulation progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self { progress_bar: None }
    }

    fn tally(scoreboard: &Scoreboard) -> String {
        format!(
            "{} T:{} P:{}",
            scoreboard.computer_wins, scoreboard.ties, scoreboard.player_wins
        )
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_session_start(&mut self, expected_rounds: Option<usize>) -> Result<()> {
        // Open-ended sessions get no bar.
        let Some(total) = expected_rounds else {
            return Ok(());
        };
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} rounds (C:{msg})")
                .map_err(|e| Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_round(
        &mut self,
        round_num: usize,
        _round: &Round,
        scoreboard: &Scoreboard,
    ) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.set_position(round_num as u64 + 1);
            pb.set_message(Self::tally(scoreboard));
        }
        Ok(())
    }

    fn on_session_end(&mut self, scoreboard: &Scoreboard) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(Self::tally(scoreboard));
        }
        Ok(())
    }
}

/// Metrics observer - tracks results from the computer's perspective
#[derive(Debug, Default)]
pub struct MetricsObserver {
    wins: usize,
    ties: usize,
    losses: usize,
    current_win_streak: usize,
    longest_win_streak: usize,
    move_counts: [usize; 3],
}

impl MetricsObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_rounds(&self) -> usize {
        self.wins + self.ties + self.losses
    }

    pub fn win_rate(&self) -> f64 {
        rate(self.wins, self.total_rounds())
    }

    pub fn tie_rate(&self) -> f64 {
        rate(self.ties, self.total_rounds())
    }

    pub fn loss_rate(&self) -> f64 {
        rate(self.losses, self.total_rounds())
    }

    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            total_rounds: self.total_rounds(),
            wins: self.wins,
            ties: self.ties,
            losses: self.losses,
            win_rate: self.win_rate(),
            tie_rate: self.tie_rate(),
            loss_rate: self.loss_rate(),
            longest_win_streak: self.longest_win_streak,
            computer_move_counts: self.move_counts,
        }
    }
}

/// Summary of session metrics, computer perspective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_rounds: usize,
    pub wins: usize,
    pub ties: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub tie_rate: f64,
    pub loss_rate: f64,
    pub longest_win_streak: usize,
    /// Rock, paper, scissors
    pub computer_move_counts: [usize; 3],
}

impl Observer for MetricsObserver {
    fn on_round(
        &mut self,
        _round_num: usize,
        round: &Round,
        _scoreboard: &Scoreboard,
    ) -> Result<()> {
        self.move_counts[round.opponent.index()] += 1;
        match round.opponent_outcome() {
            Outcome::Win => {
                self.wins += 1;
                self.current_win_streak += 1;
                self.longest_win_streak = self.longest_win_streak.max(self.current_win_streak);
            }
            Outcome::Tie => {
                self.ties += 1;
                self.current_win_streak = 0;
            }
            Outcome::Loss => {
                self.losses += 1;
                self.current_win_streak = 0;
            }
        }
        Ok(())
    }

    fn on_session_end(&mut self, _scoreboard: &Scoreboard) -> Result<()> {
        let summary = self.summary();
        info!(
            rounds = summary.total_rounds,
            win_rate = summary.win_rate,
            tie_rate = summary.tie_rate,
            loss_rate = summary.loss_rate,
            longest_win_streak = summary.longest_win_streak,
            rock = summary.computer_move_counts[0],
            paper = summary.computer_move_counts[1],
            scissors = summary.computer_move_counts[2],
            "computer metrics"
        );
        Ok(())
    }
}

fn rate(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// JSONL observer - writes one JSON object per round
pub struct JsonlObserver {
    writer: BufWriter<File>,
}

impl JsonlObserver {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create round log {path:?}"),
            source,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl Observer for JsonlObserver {
    fn on_round(&mut self, round_num: usize, round: &Round, scoreboard: &Scoreboard) -> Result<()> {
        let observation = RoundObservation {
            round_num,
            label: round.label(),
            player: round.player,
            computer: round.opponent,
            outcome: round.opponent_outcome(),
            player_wins: scoreboard.player_wins,
            computer_wins: scoreboard.computer_wins,
            ties: scoreboard.ties,
        };
        serde_json::to_writer(&mut self.writer, &observation)?;
        writeln!(&mut self.writer)?;
        Ok(())
    }

    fn on_session_end(&mut self, _scoreboard: &Scoreboard) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Emits an `info` event for every round
#[derive(Debug, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_round(&mut self, round_num: usize, round: &Round, scoreboard: &Scoreboard) -> Result<()> {
        info!(
            round_num,
            label = %round,
            computer_outcome = %round.opponent_outcome(),
            player_win_rate = scoreboard.player_win_rate(),
            computer_win_rate = scoreboard.computer_win_rate(),
            "round"
        );
        Ok(())
    }
}

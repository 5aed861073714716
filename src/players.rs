//! Scripted player-side strategies for simulations
//!
//! These stand in for the human in headless runs. They read `round.player` as
//! their own move and `round.opponent` as the computer's.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::Strategy,
    rps::{Move, Outcome, Round},
    strategies::RandomStrategy,
};

/// Always throws the same move.
pub struct ConstantPlayer {
    name: String,
    choice: Move,
}

impl ConstantPlayer {
    pub fn new(choice: Move) -> Self {
        Self {
            name: format!("constant-{choice}"),
            choice,
        }
    }
}

impl Strategy for ConstantPlayer {
    fn select_move(&mut self, _history: &[Round]) -> Result<Move> {
        Ok(self.choice)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Rock, paper, scissors, rock, ...
pub struct CyclePlayer;

impl Strategy for CyclePlayer {
    fn select_move(&mut self, history: &[Round]) -> Result<Move> {
        Ok(Move::from_index(history.len()))
    }

    fn name(&self) -> &str {
        "cycle"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Win-stay, lose-shift: repeat a winning move, otherwise switch to the move
/// that would have beaten the computer's last throw. Opens with rock.
pub struct WinStayPlayer;

impl Strategy for WinStayPlayer {
    fn select_move(&mut self, history: &[Round]) -> Result<Move> {
        Ok(match history.last() {
            None => Move::Rock,
            Some(last) if last.player_outcome() == Outcome::Win => last.player,
            Some(last) => last.opponent.beaten_by(),
        })
    }

    fn name(&self) -> &str {
        "win-stay"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Plays the computer's previous move. Opens with rock.
pub struct CopyPlayer;

impl Strategy for CopyPlayer {
    fn select_move(&mut self, history: &[Round]) -> Result<Move> {
        Ok(history.last().map_or(Move::Rock, |last| last.opponent))
    }

    fn name(&self) -> &str {
        "copy"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Selectable scripted player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerKind {
    Constant(Move),
    Cycle,
    Random,
    WinStay,
    Copy,
}

impl PlayerKind {
    /// Build the strategy. `seed` only matters for [`PlayerKind::Random`].
    pub fn build(self, seed: Option<u64>) -> Box<dyn Strategy> {
        match self {
            PlayerKind::Constant(mv) => Box::new(ConstantPlayer::new(mv)),
            PlayerKind::Cycle => Box::new(CyclePlayer),
            PlayerKind::Random => match seed {
                Some(seed) => Box::new(RandomStrategy::with_seed("random-player", seed)),
                None => Box::new(RandomStrategy::new("random-player")),
            },
            PlayerKind::WinStay => Box::new(WinStayPlayer),
            PlayerKind::Copy => Box::new(CopyPlayer),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Constant(mv) => write!(f, "{mv}"),
            PlayerKind::Cycle => f.write_str("cycle"),
            PlayerKind::Random => f.write_str("random"),
            PlayerKind::WinStay => f.write_str("win-stay"),
            PlayerKind::Copy => f.write_str("copy"),
        }
    }
}

impl FromStr for PlayerKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cycle" => Ok(PlayerKind::Cycle),
            "random" => Ok(PlayerKind::Random),
            "win-stay" | "winstay" => Ok(PlayerKind::WinStay),
            "copy" => Ok(PlayerKind::Copy),
            other => other
                .parse::<Move>()
                .map(PlayerKind::Constant)
                .map_err(|_| Error::ParsePlayerKind {
                    input: s.to_string(),
                    expected: "rock, paper, scissors, cycle, random, win-stay, copy".to_string(),
                }),
        }
    }
}

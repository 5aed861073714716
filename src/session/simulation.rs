//! Headless simulation of a scripted player against a computer strategy

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{game::GameSession, scoreboard::Scoreboard};
use crate::{
    Error, Result,
    players::PlayerKind,
    ports::{Observer, Strategy},
    strategies::GameMode,
};

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of rounds to play
    pub rounds: usize,

    /// Random seed
    pub seed: Option<u64>,

    /// Computer strategy
    pub mode: GameMode,

    /// Scripted player
    pub player: PlayerKind,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rounds: 300,
            seed: None,
            mode: GameMode::Psychology,
            player: PlayerKind::Random,
        }
    }
}

/// Result of a simulation run, computer perspective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub mode: GameMode,
    pub player: PlayerKind,
    pub total_rounds: usize,
    pub computer_wins: usize,
    pub ties: usize,
    pub player_wins: usize,
    pub computer_win_rate: f64,
    pub tie_rate: f64,
    pub player_win_rate: f64,
    /// Longest run of consecutive player losses
    pub longest_lose_streak: u32,
    /// Every round as comma-separated labels
    pub history: String,
}

impl SimulationResult {
    fn from_session(config: &SimulationConfig, session: &GameSession) -> Self {
        let Scoreboard {
            rounds,
            ties,
            player_wins,
            computer_wins,
            longest_lose_streak,
            ..
        } = *session.scoreboard();
        let fraction = |count: usize| {
            if rounds == 0 {
                0.0
            } else {
                count as f64 / rounds as f64
            }
        };
        Self {
            mode: config.mode,
            player: config.player,
            total_rounds: rounds,
            computer_wins,
            ties,
            player_wins,
            computer_win_rate: fraction(computer_wins),
            tie_rate: fraction(ties),
            player_win_rate: fraction(player_wins),
            longest_lose_streak,
            history: session.history().to_labels(),
        }
    }

    /// Save result to a pretty-printed JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            operation: format!("create summary {path:?}"),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open summary {path:?}"),
            source,
        })?;
        Ok(serde_json::from_reader(file)?)
    }
}

/// Plays a scripted player against a computer strategy for a fixed number of
/// rounds
pub struct Simulation {
    config: SimulationConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the simulation
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run the simulation. Observers are handed to the session and consumed.
    pub fn run(
        &mut self,
        player: &mut dyn Strategy,
        mut computer: Box<dyn Strategy>,
    ) -> Result<SimulationResult> {
        if let Some(seed) = self.config.seed {
            computer.set_rng_seed(seed)?;
            player.set_rng_seed(seed.wrapping_add(1))?;
        }

        let mut session = GameSession::new(computer);
        for observer in self.observers.drain(..) {
            session = session.with_observer(observer);
        }

        session.start(Some(self.config.rounds))?;
        for _ in 0..self.config.rounds {
            let player_move = player.select_move(session.history())?;
            session.play_round(player_move)?;
            player.observe(session.history())?;
        }
        session.finish()?;

        Ok(SimulationResult::from_session(&self.config, &session))
    }
}

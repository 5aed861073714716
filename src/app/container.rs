//! Factory container for strategies, sessions and simulations.

use super::config::SessionConfig;
use crate::{
    players::PlayerKind,
    ports::Strategy,
    session::{GameSession, Simulation, SimulationConfig},
    strategies::{GameMode, PsychologyStrategy, RandomStrategy, RedditStrategy},
};

/// Application container.
///
/// # Examples
///
/// ```
/// use roshambo::app::App;
/// use roshambo::strategies::GameMode;
///
/// let app = App::new();
/// let strategy = app.create_strategy(GameMode::Reddit, Some(1));
/// assert_eq!(strategy.name(), "reddit");
/// ```
#[derive(Debug, Clone, Default)]
pub struct App {
    /// Default random seed (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create a new app with production defaults (no default seed).
    pub fn new() -> Self {
        Self { default_seed: None }
    }

    /// Create a builder for constructing an app with custom defaults.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    pub fn default_seed(&self) -> Option<u64> {
        self.default_seed
    }

    /// Build the computer strategy for `mode`.
    ///
    /// `seed` falls back to the container default; with neither, random
    /// strategies are seeded from entropy.
    pub fn create_strategy(&self, mode: GameMode, seed: Option<u64>) -> Box<dyn Strategy> {
        let seed = seed.or(self.default_seed);
        let name = mode.as_str();
        match (mode, seed) {
            (GameMode::Random, Some(seed)) => Box::new(RandomStrategy::with_seed(name, seed)),
            (GameMode::Random, None) => Box::new(RandomStrategy::new(name)),
            (GameMode::Reddit, Some(seed)) => Box::new(RedditStrategy::with_seed(name, seed)),
            (GameMode::Reddit, None) => Box::new(RedditStrategy::new(name)),
            (GameMode::Psychology, _) => Box::new(PsychologyStrategy::new(name)),
        }
    }

    /// Build a scripted player; it is seeded one past the computer's seed.
    pub fn create_player(&self, kind: PlayerKind, seed: Option<u64>) -> Box<dyn Strategy> {
        let seed = seed.or(self.default_seed).map(|s| s.wrapping_add(1));
        kind.build(seed)
    }

    /// Create a session with the configured computer strategy.
    pub fn create_session(&self, config: SessionConfig) -> GameSession {
        GameSession::new(self.create_strategy(config.mode, config.seed))
    }

    /// Create a simulation, applying the container's default seed when the
    /// config has none.
    pub fn create_simulation(&self, mut config: SimulationConfig) -> Simulation {
        if config.seed.is_none() {
            config.seed = self.default_seed;
        }
        Simulation::new(config)
    }
}

/// Builder for constructing an app with custom defaults.
#[derive(Debug, Default)]
pub struct AppBuilder {
    default_seed: Option<u64>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self { default_seed: None }
    }

    /// Set a default random seed for everything created by this container.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    pub fn build(self) -> App {
        App {
            default_seed: self.default_seed,
        }
    }
}

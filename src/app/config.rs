//! Configuration types for session creation.

use serde::{Deserialize, Serialize};

use crate::strategies::GameMode;

/// Configuration for creating a game session.
///
/// # Examples
///
/// ```
/// use roshambo::app::SessionConfig;
/// use roshambo::strategies::GameMode;
///
/// let config = SessionConfig::new(GameMode::Reddit).with_seed(7);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Computer strategy
    pub mode: GameMode,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Create a configuration for `mode` with no seed (non-deterministic).
    pub fn new(mode: GameMode) -> Self {
        Self { mode, seed: None }
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

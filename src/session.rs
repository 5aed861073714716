//! Game sessions, scoring and headless simulations
//!
//! This module provides:
//! - `GameSession`: one interactive or simulated session against a strategy
//! - `Scoreboard`: running tally shown to the player
//! - `Simulation`: scripted player vs strategy for a fixed number of rounds
//! - observers for progress, metrics, JSONL round logs and tracing

pub mod game;
pub mod observers;
pub mod scoreboard;
pub mod simulation;

pub use game::{GameSession, RoundReport};
pub use observers::{
    JsonlObserver, MetricsObserver, MetricsSummary, ProgressObserver, RoundObservation,
    TracingObserver,
};
pub use scoreboard::Scoreboard;
pub use simulation::{Simulation, SimulationConfig, SimulationResult};

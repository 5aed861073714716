//! Rock-paper-scissors engine with adaptive computer opponents
//!
//! This crate provides:
//! - Rock-paper-scissors domain types and round labels
//! - A sequence-performance predictor that learns which computer move works
//!   after each observed run of rounds
//! - Random, reddit-heuristic and predictor-backed computer strategies
//! - Game sessions with scoring, scripted-player simulations and observers
//! - A terminal CLI for playing, simulating and inspecting the predictor

pub mod app;
pub mod cli;
pub mod error;
pub mod players;
pub mod ports;
pub mod predictor;
pub mod rps;
pub mod session;
pub mod strategies;

pub use error::{Error, Result};
pub use predictor::{Performance, SequencePredictor};
pub use rps::{History, Move, Outcome, Round};
pub use strategies::GameMode;

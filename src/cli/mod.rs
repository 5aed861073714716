//! CLI infrastructure for the roshambo binary
//!
//! This module provides the command-line interface for playing against the
//! computer strategies, running simulations and inspecting the predictor.

pub mod commands;
pub mod output;

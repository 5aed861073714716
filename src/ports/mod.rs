//! Ports (trait boundaries) between the game session and its collaborators.
//!
//! The session owns the history and drives strategies and observers through
//! these traits; concrete implementations live in `strategies`, `players` and
//! `session::observers`.

pub mod observer;
pub mod strategy;

pub use observer::Observer;
pub use strategy::Strategy;

//! Computer opponent strategies
//!
//! - `random`: uniform choice
//! - `reddit`: reacts to the previous round with a fixed heuristic
//! - `psychology`: adaptive sequence-performance predictor

pub mod mode;
pub mod psychology;
pub mod random;
pub mod reddit;

pub use mode::GameMode;
pub use psychology::PsychologyStrategy;
pub use random::RandomStrategy;
pub use reddit::RedditStrategy;

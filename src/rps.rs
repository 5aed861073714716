//! Rock-paper-scissors domain types

pub mod history;
pub mod moves;
pub mod round;

pub use history::History;
pub use moves::Move;
pub use round::{Outcome, Round, TIE_SCORE};

//! Sequence-performance predictor
//!
//! Learns online which computer move tends to succeed after each observed
//! run of rounds, and predicts the computer's next move from the current
//! history.

pub mod node;
pub mod performance;
pub mod sequence;

pub use node::{MoveStats, PredictorNode};
pub use performance::Performance;
pub use sequence::{PredictorStats, SequencePredictor};

//! Adaptive opponent backed by the sequence-performance predictor

use crate::{
    Result,
    ports::Strategy,
    predictor::SequencePredictor,
    rps::{Move, Round},
};

/// Plays whatever the predictor currently rates best and trains it on every
/// completed round.
#[derive(Debug, Default)]
pub struct PsychologyStrategy {
    name: String,
    predictor: SequencePredictor,
}

impl PsychologyStrategy {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            predictor: SequencePredictor::new(),
        }
    }

    pub fn predictor(&self) -> &SequencePredictor {
        &self.predictor
    }
}

impl Strategy for PsychologyStrategy {
    fn select_move(&mut self, history: &[Round]) -> Result<Move> {
        Ok(self.predictor.predict_next_opponent_move(history))
    }

    fn observe(&mut self, history: &[Round]) -> Result<()> {
        self.predictor.record_round(history);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn reset(&mut self) -> Result<()> {
        self.predictor.reset();
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rps::History;

    #[test]
    fn first_move_is_rock() {
        let mut strategy = PsychologyStrategy::new("psychology");
        assert_eq!(strategy.select_move(&[]).unwrap(), Move::Rock);
        assert_eq!(strategy.select_move(&[]).unwrap(), Move::Rock);
    }

    #[test]
    fn observe_trains_and_reset_forgets() {
        let mut strategy = PsychologyStrategy::new("psychology");
        let mut history = History::new();
        for _ in 0..3 {
            let mv = strategy.select_move(&history).unwrap();
            history.push(Round::new(Move::Scissors, mv));
            strategy.observe(&history).unwrap();
        }
        assert_eq!(strategy.predictor().stats().rounds_recorded, 3);
        assert_eq!(strategy.select_move(&history).unwrap(), Move::Rock);

        strategy.reset().unwrap();
        assert_eq!(strategy.predictor().stats().rounds_recorded, 0);
    }
}

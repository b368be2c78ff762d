use super::choice::Move;
use crate::Arbitrary;

/// Source of the computer's move for each round.
pub trait Opponent {
    fn throw(&mut self) -> Move;
}

/// Draws uniformly from the three moves.
#[derive(Debug, Default)]
pub struct Random;

impl Opponent for Random {
    fn throw(&mut self) -> Move {
        Move::random()
    }
}

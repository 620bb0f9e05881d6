use rand::seq::IteratorRandom;

use crate::game::{Board, Mark, SpaceCoordinates};

use super::{full_board_violation, MoveStrategy};

/// Picks uniformly among the empty spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl MoveStrategy for RandomStrategy {
    fn select_move(&self, board: &Board, _mark: Mark) -> SpaceCoordinates {
        match board.empty_spaces().choose(&mut rand::thread_rng()) {
            Some(space) => space,
            None => full_board_violation(),
        }
    }
}

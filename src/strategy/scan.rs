use crate::game::{Board, Mark, SpaceCoordinates};

use super::{full_board_violation, MoveStrategy};

/// Always picks the first empty space, scanning left to right, top to bottom.
///
/// Deterministic, which makes it the strategy of choice for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstEmptyStrategy;

impl MoveStrategy for FirstEmptyStrategy {
    fn select_move(&self, board: &Board, _mark: Mark) -> SpaceCoordinates {
        match board.empty_spaces().next() {
            Some(space) => space,
            None => full_board_violation(),
        }
    }
}

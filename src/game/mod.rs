//! Pure tic-tac-toe rules: the board, moves, and end-of-game detection.
//!
//! Nothing in this module knows about turns, actions, or time. The view-model
//! layer builds its state machine on top of these primitives.

mod board;
mod outcome;

pub use board::{
    apply_move, create_initial_board, is_occupied, Board, Cell, CoordinateError, Mark,
    SpaceCoordinates, BOARD_SIZE,
};
pub use outcome::{classify, winning_spaces, Outcome};

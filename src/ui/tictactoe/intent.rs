//! Actions folded into the tic-tac-toe state.

use crate::game::SpaceCoordinates;
use crate::ui::mvi::Intent;

/// One discrete action.
///
/// User actions are tagged at the input boundary; computer actions come from
/// the opponent scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// The player clicked a space.
    UserMove(SpaceCoordinates),
    /// The player clicked reset.
    UserReset,
    /// The computer player chose a space.
    ComputerMove(SpaceCoordinates),
}

impl Intent for GameAction {}

//! Turn state machine.

use crate::game::{classify, Mark, Outcome};
use crate::ui::mvi::Reducer;

use super::intent::GameAction;
use super::state::{create_initial_view_model, GameResult, TicTacToeState, Turn};

/// Reducer for the tic-tac-toe view-model.
///
/// Out-of-turn moves, moves onto occupied spaces and anything after the game
/// has ended are no-ops. The reducer is the only authority on turn legality;
/// producers may send whatever they like.
pub struct TicTacToeReducer;

impl Reducer for TicTacToeReducer {
    type State = TicTacToeState;
    type Intent = GameAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GameAction::UserReset => create_initial_view_model(),

            GameAction::UserMove(space) => match state.turn {
                Turn::PlayerTurn if !state.board.is_occupied(space) => {
                    let board = state.board.apply_move(space, Mark::Player);
                    let turn = match classify(&board) {
                        Outcome::InProgress => Turn::OpponentTurn,
                        Outcome::PlayerWins => Turn::GameOver(GameResult::Win),
                        Outcome::Tie => Turn::GameOver(GameResult::Tie),
                        Outcome::OpponentWins => {
                            unreachable!("player move produced an opponent win")
                        }
                    };
                    TicTacToeState { board, turn }
                }
                _ => state,
            },

            GameAction::ComputerMove(space) => match state.turn {
                Turn::OpponentTurn if !state.board.is_occupied(space) => {
                    let board = state.board.apply_move(space, Mark::Opponent);
                    let turn = match classify(&board) {
                        Outcome::InProgress => Turn::PlayerTurn,
                        Outcome::OpponentWins => Turn::GameOver(GameResult::Loss),
                        Outcome::Tie => Turn::GameOver(GameResult::Tie),
                        Outcome::PlayerWins => {
                            unreachable!("computer move produced a player win")
                        }
                    };
                    TicTacToeState { board, turn }
                }
                _ => state,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SpaceCoordinates;

    fn space(row: u8, column: u8) -> SpaceCoordinates {
        SpaceCoordinates::new(row, column).unwrap()
    }

    #[test]
    fn user_move_hands_turn_to_opponent() {
        let state = TicTacToeReducer::reduce(
            create_initial_view_model(),
            GameAction::UserMove(space(1, 1)),
        );
        assert_eq!(state.turn, Turn::OpponentTurn);
        assert_eq!(state.board.get(space(1, 1)), Some(Mark::Player));
    }

    #[test]
    fn computer_move_during_player_turn_is_noop() {
        let initial = create_initial_view_model();
        let state = TicTacToeReducer::reduce(initial, GameAction::ComputerMove(space(0, 0)));
        assert_eq!(state, initial);
    }

    #[test]
    fn computer_move_onto_occupied_space_is_noop() {
        let state = TicTacToeReducer::reduce(
            create_initial_view_model(),
            GameAction::UserMove(space(1, 1)),
        );
        let after = TicTacToeReducer::reduce(state, GameAction::ComputerMove(space(1, 1)));
        assert_eq!(after, state);
    }

    #[test]
    fn reset_from_opponent_turn() {
        let state = TicTacToeReducer::reduce(
            create_initial_view_model(),
            GameAction::UserMove(space(0, 0)),
        );
        let state = TicTacToeReducer::reduce(state, GameAction::UserReset);
        assert_eq!(state, create_initial_view_model());
    }
}

//! Published tic-tac-toe state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::{create_initial_board, Board};
use crate::ui::mvi::UiState;

/// How a finished game ended, from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    Win,
    Loss,
    Tie,
}

/// Game phase.
///
/// `GameOver` is terminal: only a reset leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Turn {
    PlayerTurn,
    OpponentTurn,
    GameOver(GameResult),
}

impl Turn {
    pub fn is_game_over(self) -> bool {
        matches!(self, Turn::GameOver(_))
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Turn::PlayerTurn => "your turn",
            Turn::OpponentTurn => "computer's turn",
            Turn::GameOver(GameResult::Win) => "game over - you win",
            Turn::GameOver(GameResult::Loss) => "game over - you lose",
            Turn::GameOver(GameResult::Tie) => "game over - it's a tie",
        };
        f.write_str(label)
    }
}

/// The externally observable snapshot: `{ board, turn }`.
///
/// Every action yields a fresh value; earlier snapshots held by subscribers
/// are never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToeState {
    pub board: Board,
    pub turn: Turn,
}

/// Empty board, player to move.
pub fn create_initial_view_model() -> TicTacToeState {
    TicTacToeState {
        board: create_initial_board(),
        turn: Turn::PlayerTurn,
    }
}

impl Default for TicTacToeState {
    fn default() -> Self {
        create_initial_view_model()
    }
}

impl UiState for TicTacToeState {}

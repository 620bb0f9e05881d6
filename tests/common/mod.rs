//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use tokio::sync::mpsc::UnboundedSender;

use tictactoe_vm::game::{create_initial_board, Board, Mark, SpaceCoordinates};
use tictactoe_vm::strategy::{FirstEmptyStrategy, MoveStrategy};
use tictactoe_vm::ui::tictactoe::{TicTacToeState, Turn};
use tictactoe_vm::view_model::{
    event_channel, StateStream, ViewModelHandle, ViewModelInputs, ViewModelOptions,
};

pub fn space(row: u8, column: u8) -> SpaceCoordinates {
    SpaceCoordinates::new(row, column).expect("test coordinates are on the board")
}

/// Builds a board from rows like `"o.x"` (`x` player, `o` opponent, anything else empty).
pub fn board(rows: [&str; 3]) -> Board {
    let mut board = create_initial_board();
    for (row, text) in rows.iter().enumerate() {
        for (column, symbol) in text.chars().enumerate() {
            let at = space(row as u8, column as u8);
            match symbol {
                'x' => board = board.apply_move(at, Mark::Player),
                'o' => board = board.apply_move(at, Mark::Opponent),
                _ => {}
            }
        }
    }
    board
}

pub fn state(rows: [&str; 3], turn: Turn) -> TicTacToeState {
    TicTacToeState {
        board: board(rows),
        turn,
    }
}

/// A running view-model with push-style inputs and the deterministic
/// first-empty-space opponent.
pub struct Harness {
    pub clicks: UnboundedSender<SpaceCoordinates>,
    pub resets: UnboundedSender<()>,
    pub handle: ViewModelHandle,
}

impl Harness {
    pub fn start() -> Self {
        Self::start_with(ViewModelOptions::default())
    }

    pub fn start_with(options: ViewModelOptions) -> Self {
        Self::start_with_strategy(Arc::new(FirstEmptyStrategy), options)
    }

    pub fn start_with_strategy(strategy: Arc<dyn MoveStrategy>, options: ViewModelOptions) -> Self {
        let (clicks, user_space_clicks) = event_channel();
        let (resets, user_reset_clicks) = event_channel();
        let handle = ViewModelHandle::spawn(
            ViewModelInputs {
                user_space_clicks,
                user_reset_clicks,
                strategy,
            },
            options,
        );
        Self {
            clicks,
            resets,
            handle,
        }
    }

    pub fn click(&self, row: u8, column: u8) {
        self.clicks.send(space(row, column)).expect("view-model running");
    }

    pub fn reset(&self) {
        self.resets.send(()).expect("view-model running");
    }
}

/// Asserts the stream publishes nothing for a long (virtual) while.
pub async fn assert_quiet(states: &mut StateStream) {
    let next = tokio::time::timeout(Duration::from_secs(10), states.next()).await;
    assert!(next.is_err(), "unexpected state published: {:?}", next);
}

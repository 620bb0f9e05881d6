//! Tic-tac-toe view-model feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Published snapshot (`board` + `turn`)
//! - `intent.rs` - Actions (UserMove, UserReset, ComputerMove)
//! - `reducer.rs` - Turn state machine (pure, no side effects)
//!
//! Wiring the reducer to live event streams happens in
//! [`crate::view_model`].

mod intent;
mod reducer;
mod state;

pub use intent::GameAction;
pub use reducer::TicTacToeReducer;
pub use state::{create_initial_view_model, GameResult, TicTacToeState, Turn};

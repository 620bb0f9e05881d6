//! Functional reactive view-model for tic-tac-toe.
//!
//! Application state is a pure function of named input event streams: user
//! clicks and resets are tagged into actions, merged with a delayed
//! computer-player action stream, folded through a reducer and published as
//! a de-duplicated, shareable stream of immutable snapshots.
//!
//! ```no_run
//! use std::sync::Arc;
//! use futures_util::StreamExt;
//! use tictactoe_vm::game::SpaceCoordinates;
//! use tictactoe_vm::strategy::RandomStrategy;
//! use tictactoe_vm::view_model::{
//!     event_channel, tic_tac_toe_view_model, ViewModelInputs, ViewModelOptions,
//! };
//!
//! # async fn demo() -> Result<(), tictactoe_vm::game::CoordinateError> {
//! let (clicks, user_space_clicks) = event_channel();
//! let (_resets, user_reset_clicks) = event_channel::<()>();
//! let mut states = tic_tac_toe_view_model(
//!     ViewModelInputs {
//!         user_space_clicks,
//!         user_reset_clicks,
//!         strategy: Arc::new(RandomStrategy),
//!     },
//!     ViewModelOptions::default(),
//! );
//! let _ = clicks.send(SpaceCoordinates::new(1, 1)?);
//! while let Some(state) = states.next().await {
//!     println!("{}\n{}", state.board, state.turn);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod game;
pub mod logging;
pub mod strategy;
pub mod ui;
pub mod view_model;

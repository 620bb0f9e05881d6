//! Reactive tic-tac-toe view-model.
//!
//! Wires the reducer to live inputs:
//!
//! ```text
//! space clicks ──tag──┐
//! reset clicks ──tag──┼──→ merged channel ──→ reduce ──→ dedup ──→ publish ──→ StateStream(s)
//! opponent scheduler ─┘                                               │
//!        ↑                                                            │
//!        └──────────── re-armed on reset, watches published state ────┘
//! ```
//!
//! The view-model runs as tasks on the caller's Tokio runtime. Everything is
//! released when the last [`ViewModelHandle`] or [`StateStream`] is dropped.

mod driver;
mod publisher;
mod scheduler;
mod sources;
mod stream;
mod task;

use std::sync::Arc;
use std::time::Duration;

use futures_core::Stream;
use tokio::sync::mpsc;

use crate::config::GameConfig;
use crate::game::SpaceCoordinates;
use crate::strategy::MoveStrategy;
use crate::ui::tictactoe::{create_initial_view_model, TicTacToeState};

use driver::Driver;
use publisher::Publisher;
use scheduler::OpponentScheduler;
use task::AbortOnDrop;

pub use sources::event_channel;
pub use stream::StateStream;

/// How long the computer "thinks" before moving.
pub const OPPONENT_THINK_DELAY: Duration = Duration::from_millis(2000);

/// Published states buffered per subscriber before it starts lagging.
pub const DEFAULT_STATE_BUFFER: usize = 64;

/// Runtime tuning for a view-model instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewModelOptions {
    pub opponent_think_delay: Duration,
    pub state_buffer: usize,
}

impl Default for ViewModelOptions {
    fn default() -> Self {
        Self {
            opponent_think_delay: OPPONENT_THINK_DELAY,
            state_buffer: DEFAULT_STATE_BUFFER,
        }
    }
}

impl From<&GameConfig> for ViewModelOptions {
    fn from(config: &GameConfig) -> Self {
        Self {
            opponent_think_delay: Duration::from_millis(config.opponent_think_delay_ms),
            state_buffer: config.state_buffer,
        }
    }
}

/// Everything the view-model consumes from its environment.
pub struct ViewModelInputs<M, R> {
    /// Spaces the user clicked.
    pub user_space_clicks: M,
    /// Reset button presses.
    pub user_reset_clicks: R,
    /// Move selection for the computer player.
    pub strategy: Arc<dyn MoveStrategy>,
}

/// A running view-model.
///
/// Cloning is cheap; all clones share the same game.
#[derive(Clone)]
pub struct ViewModelHandle {
    publisher: Arc<Publisher<TicTacToeState>>,
    driver: Arc<AbortOnDrop>,
}

impl ViewModelHandle {
    /// Starts a view-model on the current Tokio runtime.
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime.
    pub fn spawn<M, R>(inputs: ViewModelInputs<M, R>, options: ViewModelOptions) -> Self
    where
        M: Stream<Item = SpaceCoordinates> + Send + Unpin + 'static,
        R: Stream<Item = ()> + Send + Unpin + 'static,
    {
        let publisher = Arc::new(Publisher::new(
            create_initial_view_model(),
            options.state_buffer,
        ));
        let (dispatch_tx, dispatch_rx) = mpsc::unbounded_channel();

        let sources = vec![
            sources::space_clicks(inputs.user_space_clicks, dispatch_tx.clone()),
            sources::reset_clicks(inputs.user_reset_clicks, dispatch_tx.clone()),
        ];
        let scheduler = OpponentScheduler::new(
            inputs.strategy,
            options.opponent_think_delay,
            Arc::clone(&publisher),
            dispatch_tx,
        );
        let driver = Driver {
            publisher: Arc::clone(&publisher),
            scheduler,
            dispatch: dispatch_rx,
            sources,
        };

        tracing::debug!(
            think_delay_ms = options.opponent_think_delay.as_millis() as u64,
            state_buffer = options.state_buffer,
            "starting tic-tac-toe view-model"
        );
        Self {
            publisher,
            driver: Arc::new(AbortOnDrop::spawn(driver.run())),
        }
    }

    /// A new independent subscriber, starting from the current state.
    pub fn subscribe(&self) -> StateStream {
        StateStream::new(self.publisher.subscribe(), Arc::clone(&self.driver))
    }

    /// The most recently published state.
    pub fn current(&self) -> TicTacToeState {
        self.publisher.current()
    }

    pub fn into_stream(self) -> StateStream {
        self.subscribe()
    }
}

/// Starts a view-model and returns its state stream.
///
/// The stream yields the initial state immediately, then every observable
/// change. Dropping it stops the game.
pub fn tic_tac_toe_view_model<M, R>(
    inputs: ViewModelInputs<M, R>,
    options: ViewModelOptions,
) -> StateStream
where
    M: Stream<Item = SpaceCoordinates> + Send + Unpin + 'static,
    R: Stream<Item = ()> + Send + Unpin + 'static,
{
    ViewModelHandle::spawn(inputs, options).into_stream()
}

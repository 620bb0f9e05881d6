//! The fold loop: merged actions in, published states out.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::ui::mvi::Reducer;
use crate::ui::tictactoe::{GameAction, TicTacToeReducer, TicTacToeState};

use super::publisher::Publisher;
use super::scheduler::OpponentScheduler;
use super::sources::Dispatch;
use super::task::AbortOnDrop;

/// Closes the publisher when the driver goes away, however that happens.
struct ClosePublisher(Arc<Publisher<TicTacToeState>>);

impl Drop for ClosePublisher {
    fn drop(&mut self) {
        self.0.close();
    }
}

pub(crate) struct Driver {
    pub(crate) publisher: Arc<Publisher<TicTacToeState>>,
    pub(crate) scheduler: OpponentScheduler,
    pub(crate) dispatch: mpsc::UnboundedReceiver<Dispatch>,
    pub(crate) sources: Vec<AbortOnDrop>,
}

impl Driver {
    /// Runs until every external source has finished.
    ///
    /// A dead opponent watch is fatal: a panic is resumed here, so the
    /// publisher still closes and subscribers see the stream end.
    ///
    /// Actions are reduced strictly in the order they reach the merged
    /// channel. A reset is folded and published before the scheduler re-arms,
    /// so the new watch starts from the post-reset state.
    pub(crate) async fn run(self) {
        let Driver {
            publisher,
            mut scheduler,
            mut dispatch,
            sources,
        } = self;
        let _close = ClosePublisher(Arc::clone(&publisher));
        let mut open_sources = sources.len();
        let mut state = publisher.current();

        scheduler.arm();

        while open_sources > 0 {
            let message = tokio::select! {
                message = dispatch.recv() => match message {
                    Some(message) => message,
                    None => break,
                },
                failure = scheduler.failure() => {
                    if failure.is_panic() {
                        tracing::error!("opponent watch panicked, stopping view-model");
                        std::panic::resume_unwind(failure.into_panic());
                    }
                    tracing::error!(error = %failure, "opponent watch failed, stopping view-model");
                    break;
                }
            };
            let action = match message {
                Dispatch::User(action) => action,
                Dispatch::Computer { epoch, space } => {
                    if epoch != scheduler.epoch() {
                        tracing::debug!(
                            epoch,
                            live_epoch = scheduler.epoch(),
                            "dropping computer move from a cancelled watch"
                        );
                        continue;
                    }
                    GameAction::ComputerMove(space)
                }
                Dispatch::SourceClosed(kind) => {
                    open_sources -= 1;
                    tracing::debug!(source = ?kind, open_sources, "source closed");
                    continue;
                }
            };

            tracing::trace!(?action, "reducing");
            state = TicTacToeReducer::reduce(state, action);
            if publisher.publish(state) {
                tracing::debug!(turn = %state.turn, "published state");
            }

            if action == GameAction::UserReset {
                scheduler.arm();
            }
        }

        tracing::debug!("all sources finished, stopping view-model");
        drop(sources);
    }
}

//! Subscriber-facing stream of published states.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::Stream;
use futures_util::stream::{self, BoxStream};
use futures_util::StreamExt;
use tokio::sync::broadcast::{self, error::RecvError};

use crate::ui::tictactoe::TicTacToeState;

use super::publisher::Subscription;
use super::task::AbortOnDrop;

/// A live sequence of published states.
///
/// Starts with the state current at subscription time, then yields every
/// later change. Ends when the view-model stops. Holding a `StateStream`
/// keeps the view-model running; once every stream and handle is dropped,
/// its internal tasks and timers are torn down.
pub struct StateStream {
    inner: BoxStream<'static, TicTacToeState>,
    _driver: Arc<AbortOnDrop>,
}

struct Cursor {
    replay: Option<TicTacToeState>,
    last: Option<TicTacToeState>,
    receiver: Option<broadcast::Receiver<TicTacToeState>>,
}

impl StateStream {
    pub(crate) fn new(subscription: Subscription<TicTacToeState>, driver: Arc<AbortOnDrop>) -> Self {
        let cursor = Cursor {
            replay: Some(subscription.current),
            last: None,
            receiver: subscription.receiver,
        };
        Self {
            inner: stream::unfold(cursor, next_state).boxed(),
            _driver: driver,
        }
    }
}

async fn next_state(mut cursor: Cursor) -> Option<(TicTacToeState, Cursor)> {
    if let Some(state) = cursor.replay.take() {
        cursor.last = Some(state);
        return Some((state, cursor));
    }
    loop {
        let receiver = cursor.receiver.as_mut()?;
        match receiver.recv().await {
            // After a lag the next value may repeat the last one seen here.
            Ok(state) if cursor.last == Some(state) => continue,
            Ok(state) => {
                cursor.last = Some(state);
                return Some((state, cursor));
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "state subscriber lagged, skipping missed snapshots");
            }
            Err(RecvError::Closed) => return None,
        }
    }
}

impl Stream for StateStream {
    type Item = TicTacToeState;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.poll_next_unpin(cx)
    }
}

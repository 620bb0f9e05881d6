//! Latest-value + broadcast publication of view-model state.

use parking_lot::Mutex;
use tokio::sync::broadcast;

use crate::ui::mvi::UiState;

/// Snapshot plus live feed handed to a new subscriber.
pub(crate) struct Subscription<S> {
    pub(crate) current: S,
    /// `None` once publication has ended.
    pub(crate) receiver: Option<broadcast::Receiver<S>>,
}

struct Inner<S> {
    current: S,
    sender: Option<broadcast::Sender<S>>,
}

/// Publishes distinct consecutive states to any number of subscribers.
///
/// The latest state and the broadcast registration share one lock, so a
/// subscriber sees the current value followed by every later change with
/// no gap and no repeat.
pub(crate) struct Publisher<S> {
    inner: Mutex<Inner<S>>,
}

impl<S: UiState> Publisher<S> {
    pub(crate) fn new(initial: S, capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            inner: Mutex::new(Inner {
                current: initial,
                sender: Some(sender),
            }),
        }
    }

    /// Publishes `next` unless it equals the current state.
    ///
    /// Returns whether anything was published.
    pub(crate) fn publish(&self, next: S) -> bool {
        let mut inner = self.inner.lock();
        if inner.current == next {
            return false;
        }
        inner.current = next.clone();
        if let Some(sender) = &inner.sender {
            // No receivers is fine: late subscribers start from `current`.
            let _ = sender.send(next);
        }
        true
    }

    pub(crate) fn subscribe(&self) -> Subscription<S> {
        let inner = self.inner.lock();
        Subscription {
            current: inner.current.clone(),
            receiver: inner.sender.as_ref().map(broadcast::Sender::subscribe),
        }
    }

    pub(crate) fn current(&self) -> S {
        self.inner.lock().current.clone()
    }

    /// Ends publication; receivers drain and then observe the close.
    pub(crate) fn close(&self) {
        self.inner.lock().sender = None;
    }
}

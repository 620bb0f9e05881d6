//! Input boundary: raw UI events become tagged actions.

use futures_core::Stream;
use futures_util::stream::{self, BoxStream};
use futures_util::StreamExt;
use tokio::sync::mpsc;

use crate::game::SpaceCoordinates;
use crate::ui::tictactoe::GameAction;

use super::task::AbortOnDrop;

/// Which external producer a message came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SourceKind {
    SpaceClicks,
    ResetClicks,
}

/// Messages on the merged action channel read by the driver.
#[derive(Debug)]
pub(crate) enum Dispatch {
    /// A user action, already tagged.
    User(GameAction),
    /// A computer move, tagged with the scheduler epoch that produced it.
    Computer { epoch: u64, space: SpaceCoordinates },
    /// An external producer finished.
    SourceClosed(SourceKind),
}

/// Forwards every event of `source` into the merged channel, tagged by `tag`.
///
/// One forwarder per source is the only consumer of that source, so a single
/// physical event yields exactly one action no matter how many parts of the
/// view-model react to it.
pub(crate) fn forward<S, T, F>(
    kind: SourceKind,
    mut source: S,
    tag: F,
    dispatch: mpsc::UnboundedSender<Dispatch>,
) -> AbortOnDrop
where
    S: Stream<Item = T> + Send + Unpin + 'static,
    T: Send + 'static,
    F: Fn(T) -> GameAction + Send + 'static,
{
    AbortOnDrop::spawn(async move {
        while let Some(event) = source.next().await {
            if dispatch.send(Dispatch::User(tag(event))).is_err() {
                return;
            }
        }
        tracing::debug!(source = ?kind, "input source finished");
        let _ = dispatch.send(Dispatch::SourceClosed(kind));
    })
}

pub(crate) fn space_clicks<S>(source: S, dispatch: mpsc::UnboundedSender<Dispatch>) -> AbortOnDrop
where
    S: Stream<Item = SpaceCoordinates> + Send + Unpin + 'static,
{
    forward(SourceKind::SpaceClicks, source, GameAction::UserMove, dispatch)
}

pub(crate) fn reset_clicks<S>(source: S, dispatch: mpsc::UnboundedSender<Dispatch>) -> AbortOnDrop
where
    S: Stream<Item = ()> + Send + Unpin + 'static,
{
    forward(
        SourceKind::ResetClicks,
        source,
        |()| GameAction::UserReset,
        dispatch,
    )
}

/// Creates a push-style event source.
///
/// UI code keeps the sender and calls `send` from its event handlers; the
/// stream half is handed to the view-model. Dropping every sender ends the
/// stream.
pub fn event_channel<T: Send + 'static>() -> (mpsc::UnboundedSender<T>, BoxStream<'static, T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let events = stream::unfold(rx, |mut rx| async move {
        let event = rx.recv().await?;
        Some((event, rx))
    });
    (tx, events.boxed())
}

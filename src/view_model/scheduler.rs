//! Computer-player scheduler.
//!
//! Each arming starts a new *epoch*: a fresh watch task that subscribes to
//! the published state, waits for the opponent's turn, sleeps for the think
//! delay and then dispatches one computer move. Re-arming drops the previous
//! watch task, cancelling any delay it was parked on. Moves carry their epoch
//! so the driver can discard one that was already queued when a reset
//! arrived.
//!
//! A strategy that panics or picks an occupied space kills the live watch.
//! The driver observes that through [`OpponentScheduler::failure`].

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast::error::RecvError;
use tokio::sync::mpsc;
use tokio::task::JoinError;

use crate::game::{Board, Mark};
use crate::strategy::MoveStrategy;
use crate::ui::tictactoe::{TicTacToeState, Turn};

use super::publisher::Publisher;
use super::sources::Dispatch;
use super::task::AbortOnDrop;

pub(crate) struct OpponentScheduler {
    strategy: Arc<dyn MoveStrategy>,
    think_delay: Duration,
    publisher: Arc<Publisher<TicTacToeState>>,
    dispatch: mpsc::UnboundedSender<Dispatch>,
    epoch: u64,
    watch: Option<AbortOnDrop>,
}

impl OpponentScheduler {
    pub(crate) fn new(
        strategy: Arc<dyn MoveStrategy>,
        think_delay: Duration,
        publisher: Arc<Publisher<TicTacToeState>>,
        dispatch: mpsc::UnboundedSender<Dispatch>,
    ) -> Self {
        Self {
            strategy,
            think_delay,
            publisher,
            dispatch,
            epoch: 0,
            watch: None,
        }
    }

    /// Epoch of the live watch; moves from any other epoch are stale.
    pub(crate) fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Cancels the current watch (and any pending delay) and starts a new
    /// one against the state published right now.
    pub(crate) fn arm(&mut self) {
        if self.watch.take().is_some() {
            tracing::debug!(epoch = self.epoch, "cancelled opponent watch");
        }
        self.epoch += 1;
        tracing::debug!(epoch = self.epoch, "armed opponent watch");

        let watch = OpponentWatch {
            epoch: self.epoch,
            strategy: Arc::clone(&self.strategy),
            think_delay: self.think_delay,
            publisher: Arc::clone(&self.publisher),
            dispatch: self.dispatch.clone(),
        };
        self.watch = Some(AbortOnDrop::spawn(watch.run()));
    }

    /// Resolves once the live watch dies abnormally.
    ///
    /// A watch that simply finishes, or one cancelled by re-arming, is never
    /// reported. Cancel safe.
    pub(crate) async fn failure(&mut self) -> JoinError {
        if let Some(watch) = self.watch.as_mut() {
            let result = watch.await;
            self.watch = None;
            if let Err(err) = result {
                return err;
            }
        }
        std::future::pending().await
    }
}

/// State owned by one epoch's watch task.
struct OpponentWatch {
    epoch: u64,
    strategy: Arc<dyn MoveStrategy>,
    think_delay: Duration,
    publisher: Arc<Publisher<TicTacToeState>>,
    dispatch: mpsc::UnboundedSender<Dispatch>,
}

impl OpponentWatch {
    async fn run(self) {
        let subscription = self.publisher.subscribe();
        let mut next = Some(subscription.current);
        let Some(mut states) = subscription.receiver else {
            return;
        };
        // Board we last moved on, so a re-read snapshot never schedules twice.
        let mut last_scheduled: Option<Board> = None;

        loop {
            let state = match next.take() {
                Some(state) => state,
                None => match states.recv().await {
                    Ok(state) => state,
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(
                            epoch = self.epoch,
                            skipped,
                            "opponent watch lagged, re-reading current state"
                        );
                        self.publisher.current()
                    }
                    Err(RecvError::Closed) => return,
                },
            };

            if state.turn != Turn::OpponentTurn || last_scheduled == Some(state.board) {
                continue;
            }
            last_scheduled = Some(state.board);

            tracing::debug!(
                epoch = self.epoch,
                delay_ms = self.think_delay.as_millis() as u64,
                "opponent thinking"
            );
            tokio::time::sleep(self.think_delay).await;

            let space = self.strategy.select_move(&state.board, Mark::Opponent);
            assert!(
                !state.board.is_occupied(space),
                "move strategy chose occupied space {}",
                space
            );
            tracing::debug!(
                epoch = self.epoch,
                row = space.row(),
                column = space.column(),
                "opponent move chosen"
            );
            let dispatch = Dispatch::Computer {
                epoch: self.epoch,
                space,
            };
            if self.dispatch.send(dispatch).is_err() {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SpaceCoordinates;
    use crate::strategy::FirstEmptyStrategy;
    use crate::ui::tictactoe::create_initial_view_model;
    use tokio::time::Instant;

    fn opponent_to_move() -> TicTacToeState {
        TicTacToeState {
            board: create_initial_view_model()
                .board
                .apply_move(SpaceCoordinates::new(1, 1).unwrap(), Mark::Player),
            turn: Turn::OpponentTurn,
        }
    }

    fn scheduler(
        initial: TicTacToeState,
    ) -> (OpponentScheduler, mpsc::UnboundedReceiver<Dispatch>) {
        let publisher = Arc::new(Publisher::new(initial, 8));
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = OpponentScheduler::new(
            Arc::new(FirstEmptyStrategy),
            Duration::from_millis(2000),
            publisher,
            tx,
        );
        (scheduler, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn moves_once_after_delay() {
        let (mut scheduler, mut rx) = scheduler(opponent_to_move());
        let started = Instant::now();
        scheduler.arm();

        match rx.recv().await {
            Some(Dispatch::Computer { epoch, space }) => {
                assert_eq!(epoch, 1);
                assert_eq!(space, SpaceCoordinates::new(0, 0).unwrap());
            }
            other => panic!("expected a computer move, got {:?}", other),
        }
        assert!(started.elapsed() >= Duration::from_millis(2000));

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn rearming_cancels_the_pending_move() {
        let (mut scheduler, mut rx) = scheduler(opponent_to_move());
        let started = Instant::now();
        scheduler.arm();
        tokio::time::sleep(Duration::from_millis(1000)).await;
        scheduler.arm();

        match rx.recv().await {
            Some(Dispatch::Computer { epoch, .. }) => assert_eq!(epoch, 2),
            other => panic!("expected a computer move, got {:?}", other),
        }
        assert!(started.elapsed() >= Duration::from_millis(3000));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn lagged_watch_moves_once_on_the_latest_board() {
        let publisher = Arc::new(Publisher::new(create_initial_view_model(), 1));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = OpponentScheduler::new(
            Arc::new(FirstEmptyStrategy),
            Duration::from_millis(2000),
            Arc::clone(&publisher),
            tx,
        );
        scheduler.arm();
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }

        // Three publications into a one-slot buffer before the watch runs again.
        let first = opponent_to_move();
        let answered = TicTacToeState {
            board: first
                .board
                .apply_move(SpaceCoordinates::new(0, 0).unwrap(), Mark::Opponent),
            turn: Turn::PlayerTurn,
        };
        let latest = TicTacToeState {
            board: answered
                .board
                .apply_move(SpaceCoordinates::new(2, 2).unwrap(), Mark::Player),
            turn: Turn::OpponentTurn,
        };
        assert!(publisher.publish(first));
        assert!(publisher.publish(answered));
        assert!(publisher.publish(latest));

        match rx.recv().await {
            Some(Dispatch::Computer { epoch, space }) => {
                assert_eq!(epoch, 1);
                assert_eq!(space, SpaceCoordinates::new(0, 1).unwrap());
            }
            other => panic!("expected a computer move, got {:?}", other),
        }
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn occupied_choice_is_reported_as_failure() {
        let publisher = Arc::new(Publisher::new(opponent_to_move(), 8));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let center = |_: &Board, _: Mark| SpaceCoordinates::new(1, 1).unwrap();
        let mut scheduler = OpponentScheduler::new(
            Arc::new(center),
            Duration::from_millis(2000),
            publisher,
            tx,
        );
        scheduler.arm();

        let failure = scheduler.failure().await;
        assert!(failure.is_panic());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn rearmed_watch_is_not_a_failure() {
        let (mut scheduler, _rx) = scheduler(create_initial_view_model());
        scheduler.arm();
        scheduler.arm();
        let failure = tokio::time::timeout(Duration::from_secs(10), scheduler.failure()).await;
        assert!(failure.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn player_turn_schedules_nothing() {
        let (mut scheduler, mut rx) = scheduler(create_initial_view_model());
        scheduler.arm();
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }
}

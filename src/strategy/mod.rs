//! Move selection for the computer player.
//!
//! A strategy is a capability with one operation: given a board that has at
//! least one empty space, pick one of the empty spaces. Calling a strategy
//! on a full board is a caller bug and panics.

mod minimax;
mod random;
mod scan;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::game::{Board, Mark, SpaceCoordinates};

pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;
pub use scan::FirstEmptyStrategy;

/// Pluggable move-selection capability.
///
/// Implementations get a read-only board and must return an empty space.
pub trait MoveStrategy: Send + Sync + 'static {
    fn select_move(&self, board: &Board, mark: Mark) -> SpaceCoordinates;
}

impl<F> MoveStrategy for F
where
    F: Fn(&Board, Mark) -> SpaceCoordinates + Send + Sync + 'static,
{
    fn select_move(&self, board: &Board, mark: Mark) -> SpaceCoordinates {
        self(board, mark)
    }
}

/// Strategy selector used by configuration and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Uniformly random empty space.
    #[default]
    Random,
    /// First empty space in row-major order.
    FirstEmpty,
    /// Perfect play.
    Minimax,
}

impl StrategyKind {
    pub fn build(self) -> Arc<dyn MoveStrategy> {
        match self {
            StrategyKind::Random => Arc::new(RandomStrategy),
            StrategyKind::FirstEmpty => Arc::new(FirstEmptyStrategy),
            StrategyKind::Minimax => Arc::new(MinimaxStrategy),
        }
    }
}

fn full_board_violation() -> ! {
    panic!("move strategy invoked on a full board")
}

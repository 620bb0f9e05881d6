//! Board representation and the unchecked move primitive.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Side length of the board.
pub const BOARD_SIZE: u8 = 3;

/// Errors produced when building coordinates from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error("Space ({row}, {column}) is outside the 3x3 board")]
    OutOfRange { row: u8, column: u8 },
}

/// A mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    /// The human player ("x").
    Player,
    /// The computer player ("o").
    Opponent,
}

impl Mark {
    pub fn symbol(self) -> char {
        match self {
            Mark::Player => 'x',
            Mark::Opponent => 'o',
        }
    }

    pub fn other(self) -> Mark {
        match self {
            Mark::Player => Mark::Opponent,
            Mark::Opponent => Mark::Player,
        }
    }
}

/// Identifies one board cell. Both components are always in `0..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates")]
pub struct SpaceCoordinates {
    row: u8,
    column: u8,
}

#[derive(Deserialize)]
struct RawCoordinates {
    row: u8,
    column: u8,
}

impl TryFrom<RawCoordinates> for SpaceCoordinates {
    type Error = CoordinateError;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        SpaceCoordinates::new(raw.row, raw.column)
    }
}

impl SpaceCoordinates {
    /// Every space in row-major order.
    pub const ALL: [SpaceCoordinates; 9] = [
        SpaceCoordinates { row: 0, column: 0 },
        SpaceCoordinates { row: 0, column: 1 },
        SpaceCoordinates { row: 0, column: 2 },
        SpaceCoordinates { row: 1, column: 0 },
        SpaceCoordinates { row: 1, column: 1 },
        SpaceCoordinates { row: 1, column: 2 },
        SpaceCoordinates { row: 2, column: 0 },
        SpaceCoordinates { row: 2, column: 1 },
        SpaceCoordinates { row: 2, column: 2 },
    ];

    pub fn new(row: u8, column: u8) -> Result<Self, CoordinateError> {
        if row >= BOARD_SIZE || column >= BOARD_SIZE {
            return Err(CoordinateError::OutOfRange { row, column });
        }
        Ok(Self { row, column })
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn column(self) -> u8 {
        self.column
    }
}

impl fmt::Display for SpaceCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Contents of a single cell.
pub type Cell = Option<Mark>;

/// A 3x3 grid of cells.
///
/// Boards are plain values: every move produces a new board, so snapshots
/// handed out earlier are never affected by later moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

/// An empty board.
pub fn create_initial_board() -> Board {
    Board::default()
}

impl Board {
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    pub fn get(&self, space: SpaceCoordinates) -> Cell {
        self.cells[space.row as usize][space.column as usize]
    }

    pub fn is_occupied(&self, space: SpaceCoordinates) -> bool {
        self.get(space).is_some()
    }

    /// Returns a new board with `mark` at `space`.
    ///
    /// Occupancy is not checked; callers test `is_occupied` first.
    #[must_use]
    pub fn apply_move(mut self, space: SpaceCoordinates, mark: Mark) -> Board {
        self.cells[space.row as usize][space.column as usize] = Some(mark);
        self
    }

    /// Empty spaces in row-major order.
    pub fn empty_spaces(&self) -> impl Iterator<Item = SpaceCoordinates> + '_ {
        SpaceCoordinates::ALL
            .into_iter()
            .filter(|space| !self.is_occupied(*space))
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(mark))
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }
}

/// Free-function form of [`Board::apply_move`].
pub fn apply_move(board: &Board, space: SpaceCoordinates, mark: Mark) -> Board {
    board.apply_move(space, mark)
}

/// Free-function form of [`Board::is_occupied`].
pub fn is_occupied(board: &Board, space: SpaceCoordinates) -> bool {
    board.is_occupied(space)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                writeln!(f, "---+---+---")?;
            }
            let symbols: Vec<String> = row
                .iter()
                .map(|cell| format!(" {} ", cell.map_or(' ', Mark::symbol)))
                .collect();
            writeln!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}

//! Terminal-condition classification.

use super::board::{Board, Mark, SpaceCoordinates};

/// Result of inspecting a board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    PlayerWins,
    OpponentWins,
    Tie,
}

type Line = [(u8, u8); 3];

/// The eight winning triples: rows, columns, diagonals.
const WINNING_LINES: [Line; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

fn line_owned_by(board: &Board, line: &Line, mark: Mark) -> bool {
    line.iter().all(|&(row, column)| {
        board.rows()[row as usize][column as usize] == Some(mark)
    })
}

/// Classifies `board`.
///
/// Each line is checked for the player first, then the opponent. The tie
/// check only runs once no line is owned, so a win on the ninth move is
/// still a win.
pub fn classify(board: &Board) -> Outcome {
    for line in &WINNING_LINES {
        if line_owned_by(board, line, Mark::Player) {
            return Outcome::PlayerWins;
        }
        if line_owned_by(board, line, Mark::Opponent) {
            return Outcome::OpponentWins;
        }
    }
    if board.is_full() {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}

/// Spaces of every line owned by `mark`, for highlighting a finished game.
pub fn winning_spaces(board: &Board, mark: Mark) -> Vec<SpaceCoordinates> {
    let mut spaces = Vec::new();
    for line in WINNING_LINES
        .iter()
        .filter(|line| line_owned_by(board, line, mark))
    {
        for &(row, column) in line {
            if let Ok(space) = SpaceCoordinates::new(row, column) {
                if !spaces.contains(&space) {
                    spaces.push(space);
                }
            }
        }
    }
    spaces
}

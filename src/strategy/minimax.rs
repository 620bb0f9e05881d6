use crate::game::{classify, Board, Mark, Outcome, SpaceCoordinates};

use super::{full_board_violation, MoveStrategy};

/// Perfect play via exhaustive negamax search.
///
/// Among equally scored moves the first in row-major order wins, so the
/// strategy is deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl MoveStrategy for MinimaxStrategy {
    fn select_move(&self, board: &Board, mark: Mark) -> SpaceCoordinates {
        let mut best: Option<(i32, SpaceCoordinates)> = None;
        for space in board.empty_spaces() {
            let score = -negamax(&board.apply_move(space, mark), mark.other(), 1);
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, space));
            }
        }
        match best {
            Some((_, space)) => space,
            None => full_board_violation(),
        }
    }
}

fn winner(outcome: Outcome) -> Option<Mark> {
    match outcome {
        Outcome::PlayerWins => Some(Mark::Player),
        Outcome::OpponentWins => Some(Mark::Opponent),
        Outcome::InProgress | Outcome::Tie => None,
    }
}

/// Score of `board` for `to_move`; quicker wins and slower losses score higher.
fn negamax(board: &Board, to_move: Mark, depth: i32) -> i32 {
    let outcome = classify(board);
    match winner(outcome) {
        Some(mark) if mark == to_move => return 10 - depth,
        Some(_) => return depth - 10,
        None if outcome == Outcome::Tie => return 0,
        None => {}
    }
    board
        .empty_spaces()
        .map(|space| -negamax(&board.apply_move(space, to_move), to_move.other(), depth + 1))
        .max()
        .unwrap_or(0)
}

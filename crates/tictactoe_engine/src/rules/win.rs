//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Mark, WINNING_LINES};
use tracing::instrument;

/// Checks whether `mark` holds all three cells of any winning line.
#[instrument(level = "trace")]
pub fn check_win(board: &Board, mark: Mark) -> bool {
    let wanted = Some(Cell::Occupied(mark));
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&index| board.get(index) == wanted))
}

/// Returns the player with a completed line, X checked first.
pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| check_win(board, mark))
}

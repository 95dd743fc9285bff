//! Full-board detection for tic-tac-toe. A full board without a line
//! is a draw; see [`classify`](super::classify).

use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

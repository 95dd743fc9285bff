//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board
//! storage so strategies and invariants can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_win, winner};

use crate::types::{Board, GameOutcome};
use tracing::instrument;

/// Classifies a board.
///
/// X's lines are checked before O's, and any win before a full board,
/// so a last move that both completes a line and fills the grid is a win.
#[instrument(level = "trace")]
pub fn classify(board: &Board) -> GameOutcome {
    match winner(board) {
        Some(mark) => GameOutcome::Win(mark),
        None if is_full(board) => GameOutcome::Draw,
        None => GameOutcome::InProgress,
    }
}

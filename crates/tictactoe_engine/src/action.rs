//! Moves and the errors that reject them.
//!
//! Moves are domain events, not side effects. The session records every
//! applied move so invariants can be checked against the board.

use crate::types::Mark;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};

/// A mark placed at a board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub mark: Mark,
    /// Board index (0-8).
    pub index: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.index)
    }
}

/// A placement the board cannot accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// Index past the last cell.
    #[display("Position {index} is out of range (must be 0-8)")]
    OutOfRange {
        /// Rejected index.
        index: usize,
    },
    /// Cell already holds a mark.
    #[display("Square {index} is already occupied")]
    Occupied {
        /// Rejected index.
        index: usize,
    },
}

/// A strategy was asked to move on a full board.
///
/// Sessions never do this; seeing it means a caller skipped the
/// in-progress check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("No legal move: the board is full")]
pub struct NoLegalMove;

/// Error that can occur when submitting a move to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum MoveError {
    /// Target cell occupied or out of range.
    #[display("Invalid move: {_0}")]
    #[from]
    InvalidMove(InvalidMove),

    /// Submission arrived while it is not this side's turn.
    #[display("It is not your turn")]
    IllegalTurn,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// Strategy invoked on a full board.
    #[display("{_0}")]
    #[from]
    NoLegalMove(NoLegalMove),
}

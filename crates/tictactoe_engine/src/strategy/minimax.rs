//! Hard opponent: exhaustive minimax.
//!
//! No pruning, no memoization and no depth bonus: a quick win and a slow
//! win both score +1, and ties go to the lowest index.

use super::Strategy;
use crate::action::NoLegalMove;
use crate::rules::check_win;
use crate::types::{Board, CELL_COUNT, Mark};
use rand::RngCore;
use tracing::{debug, instrument};

/// Leaf score: computer completed a line.
const WIN: i8 = 1;
/// Leaf score: opponent completed a line.
const LOSS: i8 = -1;
/// Leaf score: full board, no line.
const DRAW: i8 = 0;

/// Full-depth minimax over one working board.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl MinimaxStrategy {
    /// Searches `board` in place and returns the best cell for `mark`.
    ///
    /// Every placement is undone before returning, so `board` comes back
    /// exactly as it went in.
    ///
    /// # Errors
    ///
    /// Returns [`NoLegalMove`] if the board is full.
    pub fn best_move_in_place(&self, board: &mut Board, mark: Mark) -> Result<usize, NoLegalMove> {
        let mut best: Option<(usize, i8)> = None;

        for index in board.empty_cells() {
            let score = score_after(board, index, mark);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }

        best.map(|(index, _)| index).ok_or(NoLegalMove)
    }

    /// Minimax value of every empty cell for `mark`, in index order.
    pub fn score_moves(&self, board: &Board, mark: Mark) -> Vec<(usize, i8)> {
        let mut work = board.clone();
        board
            .empty_cells()
            .into_iter()
            .map(|index| (index, score_after(&mut work, index, mark)))
            .collect()
    }
}

/// Places `mark` on the empty cell `index`, scores the reply tree, then
/// undoes the placement.
fn score_after(board: &mut Board, index: usize, mark: Mark) -> i8 {
    board.put(index, mark);
    let score = minimax(board, mark, false);
    board.clear(index);
    score
}

/// Scores `board` from `computer`'s point of view.
fn minimax(board: &mut Board, computer: Mark, maximizing: bool) -> i8 {
    if check_win(board, computer) {
        return WIN;
    }
    if check_win(board, computer.opponent()) {
        return LOSS;
    }
    if board.is_full() {
        return DRAW;
    }

    let mover = if maximizing { computer } else { computer.opponent() };
    let mut best = if maximizing { i8::MIN } else { i8::MAX };

    for index in 0..CELL_COUNT {
        if !board.is_empty(index) {
            continue;
        }
        board.put(index, mover);
        let score = minimax(board, computer, !maximizing);
        board.clear(index);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

impl Strategy for MinimaxStrategy {
    #[instrument(skip(self, board, _rng), fields(strategy = "minimax"))]
    fn select(
        &self,
        board: &Board,
        mark: Mark,
        _rng: &mut dyn RngCore,
    ) -> Result<usize, NoLegalMove> {
        let mut work = board.clone();
        let index = self.best_move_in_place(&mut work, mark)?;
        debug!(index, "Minimax move chosen");
        Ok(index)
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}

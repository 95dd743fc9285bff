//! Medium opponent: take a win, else block, else play anywhere.

use super::Strategy;
use super::random::RandomStrategy;
use crate::action::NoLegalMove;
use crate::types::{Board, Cell, Mark, WINNING_LINES};
use rand::RngCore;
use tracing::{debug, instrument};

/// Completes its own two-in-a-line, then blocks the opponent's.
///
/// Lines are scanned in [`WINNING_LINES`] order and the first match
/// wins; there is no ranking between candidate lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicStrategy;

impl HeuristicStrategy {
    /// First empty cell that would complete a line for `mark`.
    ///
    /// Within a line `[a, b, c]` the missing cell is tried as `c`, then
    /// `b`, then `a`.
    pub fn completing_cell(board: &Board, mark: Mark) -> Option<usize> {
        let holds = |index: usize| board.get(index) == Some(Cell::Occupied(mark));

        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            [(a, b, c), (a, c, b), (b, c, a)]
                .into_iter()
                .find(|&(x, y, missing)| holds(x) && holds(y) && board.is_empty(missing))
                .map(|(_, _, missing)| missing)
        })
    }
}

impl Strategy for HeuristicStrategy {
    #[instrument(skip(self, board, rng), fields(strategy = "heuristic"))]
    fn select(
        &self,
        board: &Board,
        mark: Mark,
        rng: &mut dyn RngCore,
    ) -> Result<usize, NoLegalMove> {
        if let Some(index) = Self::completing_cell(board, mark) {
            debug!(index, "Taking the win");
            return Ok(index);
        }

        if let Some(index) = Self::completing_cell(board, mark.opponent()) {
            debug!(index, "Blocking opponent");
            return Ok(index);
        }

        let index = RandomStrategy::pick(board, rng)?;
        debug!(index, "No threats, random cell");
        Ok(index)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn select(pattern: &str, mark: Mark) -> usize {
        let mut rng = StdRng::seed_from_u64(3);
        HeuristicStrategy
            .select(&Board::from_pattern(pattern), mark, &mut rng)
            .unwrap()
    }

    #[test]
    fn test_takes_win() {
        // O can finish the middle row at 5.
        assert_eq!(select("XX.OO.X..", Mark::O), 5);
    }

    #[test]
    fn test_blocks_opponent() {
        // X threatens the top row at 2; O has nothing.
        assert_eq!(select("XX..O....", Mark::O), 2);
    }

    #[test]
    fn test_prefers_win_over_block() {
        // X threatens 2 on the top row, which is scanned first; O wins at 5.
        assert_eq!(select("XX.OO.XO.", Mark::O), 5);
        // Same threat; O completes the middle row through the center.
        assert_eq!(select("XX.O.OX..", Mark::O), 4);
    }

    #[test]
    fn test_missing_cell_sub_order() {
        // Top row has O at 0 and 2; b (index 1) is the missing cell.
        let board = Board::from_pattern("O.O");
        assert_eq!(HeuristicStrategy::completing_cell(&board, Mark::O), Some(1));
        // Only b and c filled; a is missing.
        let board = Board::from_pattern(".OO");
        assert_eq!(HeuristicStrategy::completing_cell(&board, Mark::O), Some(0));
    }

    #[test]
    fn test_first_line_in_table_order_wins_ties() {
        // X threatens both column 0 (at 6) and the top row (at 2).
        // Rows are scanned before columns.
        assert_eq!(select("XX.X.O.O.", Mark::O), 2);
    }

    #[test]
    fn test_line_with_opponent_mark_is_not_a_threat() {
        let board = Board::from_pattern("XXO");
        assert_eq!(HeuristicStrategy::completing_cell(&board, Mark::X), None);
    }

    #[test]
    fn test_falls_back_to_empty_cell() {
        let board = Board::from_pattern("X...O....");
        let mut rng = StdRng::seed_from_u64(11);
        let index = HeuristicStrategy.select(&board, Mark::X, &mut rng).unwrap();
        assert!(board.is_empty(index));
    }
}

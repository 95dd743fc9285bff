//! Easy opponent: any empty cell.

use super::Strategy;
use crate::action::NoLegalMove;
use crate::types::{Board, Mark};
use rand::RngCore;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks uniformly among the empty cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl RandomStrategy {
    /// Uniform choice among empty cells, shared with the heuristic fallback.
    pub(crate) fn pick(board: &Board, rng: &mut dyn RngCore) -> Result<usize, NoLegalMove> {
        board
            .empty_cells()
            .choose(rng)
            .copied()
            .ok_or(NoLegalMove)
    }
}

impl Strategy for RandomStrategy {
    #[instrument(skip(self, board, rng), fields(strategy = "random"))]
    fn select(
        &self,
        board: &Board,
        _mark: Mark,
        rng: &mut dyn RngCore,
    ) -> Result<usize, NoLegalMove> {
        let index = Self::pick(board, rng)?;
        debug!(index, "Random cell chosen");
        Ok(index)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_only_empty_cells_chosen() {
        let board = Board::from_pattern("XOXOX.O.X");
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let index = RandomStrategy.select(&board, Mark::O, &mut rng).unwrap();
            assert!(index == 5 || index == 7);
        }
    }

    #[test]
    fn test_every_empty_cell_reachable() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 9];
        for _ in 0..500 {
            seen[RandomStrategy.select(&board, Mark::X, &mut rng).unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_pattern("XOXXOOOXX");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            RandomStrategy.select(&board, Mark::O, &mut rng),
            Err(NoLegalMove)
        );
    }
}

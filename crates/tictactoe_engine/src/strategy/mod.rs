//! Computer move selection.
//!
//! Every strategy takes a board snapshot and the mark it plays for, and
//! answers with one empty cell index. Strategies must only be asked on
//! an in-progress board; a full board yields [`NoLegalMove`].

mod heuristic;
mod minimax;
mod random;

pub use heuristic::HeuristicStrategy;
pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;

use crate::action::NoLegalMove;
use crate::types::{Board, Mark};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// A pluggable algorithm that selects the computer's move.
pub trait Strategy: Send + Sync {
    /// Picks an empty cell for `mark` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`NoLegalMove`] if the board has no empty cell.
    fn select(&self, board: &Board, mark: Mark, rng: &mut dyn RngCore)
        -> Result<usize, NoLegalMove>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Strength of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    #[default]
    Easy,
    /// Win if possible, else block, else random.
    Medium,
    /// Full minimax search; never loses.
    Hard,
}

impl Difficulty {
    /// Returns the strategy that plays at this difficulty.
    pub fn strategy(self) -> Box<dyn Strategy> {
        match self {
            Difficulty::Easy => Box::new(RandomStrategy),
            Difficulty::Medium => Box::new(HeuristicStrategy),
            Difficulty::Hard => Box::new(MinimaxStrategy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_difficulty_parses_case_insensitively() {
        assert_eq!(Difficulty::from_str("hard"), Ok(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("Medium"), Ok(Difficulty::Medium));
        assert!(Difficulty::from_str("impossible").is_err());
    }

    #[test]
    fn test_difficulty_display_is_lowercase() {
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }

    #[test]
    fn test_difficulty_maps_to_strategy() {
        assert_eq!(Difficulty::Easy.strategy().name(), "random");
        assert_eq!(Difficulty::Medium.strategy().name(), "heuristic");
        assert_eq!(Difficulty::Hard.strategy().name(), "minimax");
    }
}

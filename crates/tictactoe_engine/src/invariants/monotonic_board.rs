//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::session::Session;
use crate::types::Board;

/// Replaying the move history onto an empty board reproduces the
/// session's board, and no move lands on an occupied cell.
pub struct MonotonicBoardInvariant;

impl Invariant<Session> for MonotonicBoardInvariant {
    fn holds(session: &Session) -> bool {
        let mut replayed = Board::new();
        for mv in session.history() {
            if replayed.place(mv.index, mv.mark).is_err() {
                return false;
            }
        }
        replayed == *session.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::session::SessionConfig;
    use crate::types::Mark;

    #[test]
    fn test_holds_through_a_game() {
        let mut session = Session::new(SessionConfig::default());
        for index in [4, 0, 8] {
            session.submit_human_move(index, &mut ()).unwrap();
            assert!(MonotonicBoardInvariant::holds(&session));
        }
    }

    #[test]
    fn test_detects_overwrite_in_history() {
        let mut session = Session::new(SessionConfig::default());
        session.submit_human_move(4, &mut ()).unwrap();
        session.history_mut().push(Move::new(Mark::O, 4));
        assert!(!MonotonicBoardInvariant::holds(&session));
    }
}

//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::session::{Session, SessionState};
use crate::types::Mark;

/// Move history alternates starting with X, and an unfinished session
/// has the right mark to move.
pub struct AlternatingTurnInvariant;

impl Invariant<Session> for AlternatingTurnInvariant {
    fn holds(session: &Session) -> bool {
        let history = session.history();

        let alternates = history.iter().enumerate().all(|(ply, mv)| {
            let expected = if ply % 2 == 0 { Mark::X } else { Mark::O };
            mv.mark == expected
        });
        if !alternates {
            return false;
        }

        if matches!(session.state(), SessionState::Terminal(_)) {
            return true;
        }

        let expected_next = if history.len() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        };
        session.turn() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::session::SessionConfig;

    #[test]
    fn test_empty_session_holds() {
        let session = Session::new(SessionConfig::default());
        assert!(AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut session = Session::new(SessionConfig::default());
        for index in [0, 4, 2, 6, 8] {
            session.submit_human_move(index, &mut ()).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&session));
        assert_eq!(session.turn(), Mark::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut session = Session::new(SessionConfig::default());
        session.submit_human_move(0, &mut ()).unwrap();
        session.history_mut().push(Move::new(Mark::X, 4));
        assert!(!AlternatingTurnInvariant::holds(&session));
    }
}

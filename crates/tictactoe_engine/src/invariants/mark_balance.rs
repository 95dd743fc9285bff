//! Mark balance invariant: X leads O by zero or one mark.

use super::Invariant;
use crate::session::Session;
use crate::types::Mark;
use tracing::warn;

/// X moves first, so the board always holds as many X's as O's or one
/// more.
pub struct MarkBalanceInvariant;

impl Invariant<Session> for MarkBalanceInvariant {
    fn holds(session: &Session) -> bool {
        let board = session.board();
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X's lead O's by at most one mark"
    }
}

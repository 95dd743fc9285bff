//! Application state and logic.

use super::input::move_cursor;
use tictactoe_engine::{
    Board, CELL_COUNT, Direction, GameEvent, Mark, MinimaxStrategy, Position, Session,
    SessionState,
};
use tracing::debug;

/// Minimax score per cell, `None` for occupied cells.
pub type HintScores = [Option<i8>; CELL_COUNT];

/// Scores computed for one board and mover.
#[derive(Debug, Clone)]
struct HintCache {
    board: Board,
    mark: Mark,
    scores: HintScores,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    cursor: Position,
    status_message: String,
    show_hint: bool,
    hints: Option<HintCache>,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            cursor: Position::Center,
            status_message: "X's turn".to_string(),
            show_hint: false,
            hints: None,
        }
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Moves the cursor one cell.
    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor = move_cursor(self.cursor, direction);
    }

    /// Flips the hint display.
    pub fn toggle_hint(&mut self) {
        self.show_hint = !self.show_hint;
        if !self.show_hint {
            self.hints = None;
        }
    }

    /// Scores to overlay on empty cells, if hints are on and current.
    pub fn hint_scores(&self) -> Option<&HintScores> {
        self.hints.as_ref().map(|cache| &cache.scores)
    }

    /// Brings the hint cache up to date with `session`.
    ///
    /// The search only runs when hints are on, a human is to move and
    /// the board or mover differs from the cached one. Returns true if
    /// it ran.
    pub fn refresh_hints(&mut self, session: &Session) -> bool {
        let SessionState::AwaitingMove(mark) = session.state() else {
            self.hints = None;
            return false;
        };
        if !self.show_hint {
            return false;
        }
        if let Some(cache) = &self.hints {
            if cache.mark == mark && cache.board == *session.board() {
                return false;
            }
        }

        let mut scores = [None; CELL_COUNT];
        for (index, score) in MinimaxStrategy.score_moves(session.board(), mark) {
            scores[index] = Some(score);
        }
        debug!(%mark, "Hint scores recomputed");
        self.hints = Some(HintCache {
            board: session.board().clone(),
            mark,
            scores,
        });
        true
    }

    /// Replaces the status line, e.g. after a rejected move.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Handles a notification from the engine. `computer` is the mark the
    /// computer plays in the current session, if any.
    pub fn handle_event(&mut self, event: GameEvent, computer: Option<Mark>) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::MarkPlaced { index, mark } => {
                if let Some(position) = Position::from_index(index) {
                    self.status_message = format!("{} played {}", mark, position.label());
                }
            }
            GameEvent::TurnChanged { next } => {
                self.status_message = if computer == Some(next) {
                    "Computer is thinking...".to_string()
                } else {
                    format!("{}'s turn", next)
                };
            }
            GameEvent::GameOver { outcome } => {
                self.status_message =
                    format!("{} Press 'r' to restart or 'q' to quit.", outcome);
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

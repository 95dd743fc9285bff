//! A single match: board, turn, configuration and state machine.
//!
//! A `Session` lives from one start/restart to the next. Every
//! transition is atomic: a rejected submission leaves the session
//! untouched and emits nothing.

use crate::action::{Move, MoveError};
use crate::events::{GameEvent, GameObserver};
use crate::rules::classify;
use crate::strategy::Difficulty;
use crate::types::{Board, GameOutcome, Mark};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Mark the computer plays in single-player mode.
pub const COMPUTER_MARK: Mark = Mark::O;

/// Mode and strength chosen when a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_new::new)]
pub struct SessionConfig {
    /// Human vs computer when true, human vs human otherwise.
    pub single_player: bool,
    /// Strategy used for the computer side.
    pub difficulty: Difficulty,
}

/// Where the match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Waiting for a human to place this mark.
    AwaitingMove(Mark),
    /// The computer is due to reply.
    AwaitingComputerMove,
    /// Absorbing until the next start or restart.
    Terminal(GameOutcome),
}

/// One match of tic-tac-toe.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    turn: Mark,
    config: SessionConfig,
    state: SessionState,
    history: Vec<Move>,
}

impl Session {
    /// Starts a fresh match: empty board, X to move.
    #[instrument]
    pub fn new(config: SessionConfig) -> Self {
        debug!("Starting session");
        Self {
            board: Board::new(),
            turn: Mark::X,
            config,
            state: SessionState::AwaitingMove(Mark::X),
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the session configuration.
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Returns the state machine position.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Moves applied so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Outcome recomputed from the board.
    pub fn outcome(&self) -> GameOutcome {
        classify(&self.board)
    }

    /// True once the match has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        matches!(self.state, SessionState::Terminal(_))
    }

    /// The computer's mark, if this is a single-player session.
    pub fn computer_mark(&self) -> Option<Mark> {
        self.config.single_player.then_some(COMPUTER_MARK)
    }

    /// Applies a human move and, in single-player mode, the computer's
    /// reply, so one call completes the whole exchange.
    ///
    /// # Errors
    ///
    /// See [`Session::submit_human_move`] and
    /// [`Session::play_computer_move`].
    #[instrument(skip(self, rng, observer), fields(turn = %self.turn))]
    pub fn submit_move(
        &mut self,
        index: usize,
        rng: &mut dyn RngCore,
        observer: &mut dyn GameObserver,
    ) -> Result<SessionState, MoveError> {
        match self.submit_human_move(index, observer)? {
            SessionState::AwaitingComputerMove => self.play_computer_move(rng, observer),
            state => Ok(state),
        }
    }

    /// Applies a human move only. A single-player session then waits in
    /// [`SessionState::AwaitingComputerMove`].
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the session is terminal.
    /// - [`MoveError::IllegalTurn`] while the computer is due to move.
    /// - [`MoveError::InvalidMove`] for an occupied or out-of-range cell.
    #[instrument(skip(self, observer), fields(turn = %self.turn))]
    pub fn submit_human_move(
        &mut self,
        index: usize,
        observer: &mut dyn GameObserver,
    ) -> Result<SessionState, MoveError> {
        match self.state {
            SessionState::Terminal(_) => Err(MoveError::GameOver),
            SessionState::AwaitingComputerMove => Err(MoveError::IllegalTurn),
            SessionState::AwaitingMove(_) => self.apply(index, observer),
        }
    }

    /// Lets the configured strategy play the computer's mark.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the session is terminal.
    /// - [`MoveError::IllegalTurn`] unless the computer is due to move.
    /// - [`MoveError::NoLegalMove`] if the strategy finds a full board.
    #[instrument(skip(self, rng, observer), fields(difficulty = %self.config.difficulty))]
    pub fn play_computer_move(
        &mut self,
        rng: &mut dyn RngCore,
        observer: &mut dyn GameObserver,
    ) -> Result<SessionState, MoveError> {
        match self.state {
            SessionState::Terminal(_) => Err(MoveError::GameOver),
            SessionState::AwaitingMove(_) => Err(MoveError::IllegalTurn),
            SessionState::AwaitingComputerMove => {
                let strategy = self.config.difficulty.strategy();
                let index = strategy.select(&self.board, self.turn, rng)?;
                debug!(index, strategy = strategy.name(), "Computer chose move");
                self.apply(index, observer)
            }
        }
    }

    /// Place, classify, then swap turn or finish.
    fn apply(
        &mut self,
        index: usize,
        observer: &mut dyn GameObserver,
    ) -> Result<SessionState, MoveError> {
        let mark = self.turn;
        self.board.place(index, mark)?;
        self.history.push(Move::new(mark, index));
        observer.notify(GameEvent::MarkPlaced { index, mark });

        let outcome = classify(&self.board);
        if outcome.is_terminal() {
            debug!(%outcome, moves = self.history.len(), "Game over");
            self.state = SessionState::Terminal(outcome);
            self.debug_check_invariants();
            observer.notify(GameEvent::GameOver { outcome });
            return Ok(self.state);
        }

        self.turn = mark.opponent();
        self.state = if self.computer_mark() == Some(self.turn) {
            SessionState::AwaitingComputerMove
        } else {
            SessionState::AwaitingMove(self.turn)
        };
        debug!(index, %mark, next = %self.turn, "Move applied");
        self.debug_check_invariants();
        observer.notify(GameEvent::TurnChanged { next: self.turn });

        Ok(self.state)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn history_mut(&mut self) -> &mut Vec<Move> {
        &mut self.history
    }

    /// Postcondition check, debug builds only.
    fn debug_check_invariants(&self) {
        #[cfg(debug_assertions)]
        {
            use crate::invariants::{InvariantSet, SessionInvariants};

            if let Err(violations) = SessionInvariants::check_all(self) {
                let descriptions = violations
                    .iter()
                    .map(|v| v.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                panic!("Session invariants violated: {descriptions}");
            }
        }
    }
}

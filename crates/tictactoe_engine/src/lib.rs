//! Tic-tac-toe engine - rules, sessions and computer opponents
//!
//! Pure game logic with no I/O. A presentation adapter drives a
//! [`Game`] through its commands and renders from the notifications it
//! receives as a [`GameObserver`].
//!
//! # Architecture
//!
//! - **Board**: nine cells and the eight winning lines
//! - **Rules**: win/draw detection and board classification
//! - **Strategies**: random, heuristic and minimax move selection
//! - **Session**: one match's state machine
//! - **Game**: start/restart/submit commands over the current session
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Difficulty, EventLog, Game, GameOutcome, SessionConfig};
//!
//! let mut game = Game::with_seed(EventLog::new(), SessionConfig::new(true, Difficulty::Hard), 7);
//! game.submit_move(4).unwrap();
//! assert_eq!(game.session().board().empty_cells().len(), 7);
//! assert_eq!(game.session().outcome(), GameOutcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod events;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod strategy;
mod types;

// Crate-level exports - Board and outcome types
pub use types::{Board, CELL_COUNT, Cell, GameOutcome, Mark, WINNING_LINES};

// Crate-level exports - Moves and errors
pub use action::{InvalidMove, Move, MoveError, NoLegalMove};

// Crate-level exports - Positions
pub use position::{Direction, Position};

// Crate-level exports - Rules
pub use rules::{check_win, classify};

// Crate-level exports - Strategies
pub use strategy::{Difficulty, HeuristicStrategy, MinimaxStrategy, RandomStrategy, Strategy};

// Crate-level exports - Sessions and events
pub use events::{EventLog, GameEvent, GameObserver};
pub use game::Game;
pub use session::{COMPUTER_MARK, Session, SessionConfig, SessionState};

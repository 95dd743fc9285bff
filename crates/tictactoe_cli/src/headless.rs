//! Non-interactive commands: replay a move list, simulate computer games.

use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tictactoe_engine::{
    Board, Difficulty, EventLog, Game, GameEvent, GameOutcome, Mark, MoveError, Session,
    SessionConfig, Strategy,
};
use tracing::{debug, info, instrument, warn};

/// A submission the session refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// Index that was submitted.
    pub index: usize,
    /// Why it was refused.
    pub error: String,
}

/// Everything observed while replaying a move list.
#[derive(Debug, Clone, Getters, Serialize)]
pub struct ReplayReport {
    config: SessionConfig,
    events: Vec<GameEvent>,
    rejected: Vec<Rejection>,
    board: Board,
    outcome: GameOutcome,
}

impl ReplayReport {
    /// Plain-text rendering: one line per event, then the board.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for event in &self.events {
            out.push_str(&format!("{event}\n"));
        }
        for rejection in &self.rejected {
            out.push_str(&format!("Rejected {}: {}\n", rejection.index, rejection.error));
        }
        out.push('\n');
        out.push_str(&self.board.display());
        out.push_str(&format!("\n\n{}\n", self.outcome));
        out
    }
}

/// Submits `moves` in order as human moves and records the notifications.
///
/// Rejected moves are reported and skipped; the session is left as it
/// was, so later moves still apply.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(moves: &[usize], config: SessionConfig, seed: Option<u64>) -> ReplayReport {
    let mut game = match seed {
        Some(seed) => Game::with_seed(EventLog::new(), config, seed),
        None => Game::new(EventLog::new(), config),
    };

    let mut rejected = Vec::new();
    for &index in moves {
        if let Err(error) = game.submit_move(index) {
            rejected.push(Rejection {
                index,
                error: error.to_string(),
            });
        }
    }

    let session = game.session();
    let board = session.board().clone();
    let outcome = session.outcome();
    info!(%outcome, rejected = rejected.len(), "Replay finished");

    ReplayReport {
        config,
        events: game.into_observer().drain(),
        rejected,
        board,
        outcome,
    }
}

/// Tally of a computer-vs-computer batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SimulationSummary {
    /// Strength playing X.
    pub x: Difficulty,
    /// Strength playing O.
    pub o: Difficulty,
    /// Games played.
    pub games: u32,
    /// Games X won.
    pub x_wins: u32,
    /// Games O won.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl std::fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games, X ({}) won {}, O ({}) won {}, {} drawn",
            self.games, self.x, self.x_wins, self.o, self.o_wins, self.draws
        )
    }
}

/// Plays `games` matches with `x` and `o` choosing every move.
///
/// Each match runs through a two-player session so both sides go
/// through the same validation as a human.
///
/// # Errors
///
/// Propagates any [`MoveError`]; a correct strategy never causes one.
#[instrument]
pub fn simulate(
    x: Difficulty,
    o: Difficulty,
    games: u32,
    seed: Option<u64>,
) -> Result<SimulationSummary, MoveError> {
    let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let strategy_x = x.strategy();
    let strategy_o = o.strategy();
    let mut summary = SimulationSummary {
        x,
        o,
        ..SimulationSummary::default()
    };

    for game in 0..games {
        // Two-player: both sides are driven by the strategies below.
        let mut session = Session::new(SessionConfig::new(false, Difficulty::default()));
        while !session.is_terminal() {
            let mark = session.turn();
            let strategy = match mark {
                Mark::X => &strategy_x,
                Mark::O => &strategy_o,
            };
            let index = strategy.select(session.board(), mark, &mut rng)?;
            session.submit_move(index, &mut rng, &mut ())?;
        }

        let outcome = session.outcome();
        debug!(game, %outcome, "Simulated game finished");
        match outcome {
            GameOutcome::Win(Mark::X) => summary.x_wins += 1,
            GameOutcome::Win(Mark::O) => summary.o_wins += 1,
            GameOutcome::Draw => summary.draws += 1,
            GameOutcome::InProgress => warn!(game, "Simulated game stopped early"),
        }
        summary.games += 1;
    }

    info!(%summary, "Simulation finished");
    Ok(summary)
}

//! Command surface for an adapter: start, restart and submit moves.

use crate::action::MoveError;
use crate::events::GameObserver;
use crate::session::{Session, SessionConfig, SessionState};
use crate::strategy::Difficulty;
use crate::types::Mark;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument, warn};

/// Owns the current [`Session`], the observer it reports to and the RNG
/// used by the computer.
///
/// Starting or restarting discards the previous session entirely; only
/// the configuration is remembered as the default for
/// [`Game::restart`].
#[derive(Debug)]
pub struct Game<O: GameObserver> {
    session: Session,
    observer: O,
    rng: StdRng,
}

impl<O: GameObserver> Game<O> {
    /// Creates a game with an entropy-seeded RNG and starts a session.
    pub fn new(observer: O, config: SessionConfig) -> Self {
        Self::with_rng(observer, config, StdRng::from_entropy())
    }

    /// Creates a game whose random choices are reproducible.
    pub fn with_seed(observer: O, config: SessionConfig, seed: u64) -> Self {
        Self::with_rng(observer, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(observer: O, config: SessionConfig, rng: StdRng) -> Self {
        let mut game = Self {
            session: Session::new(config),
            observer,
            rng,
        };
        game.observer.on_turn_changed(Mark::X);
        game
    }

    /// Replaces the session with a fresh one using the given mode.
    #[instrument(skip(self))]
    pub fn start_session(&mut self, single_player: bool, difficulty: Difficulty) {
        self.start(SessionConfig::new(single_player, difficulty));
    }

    /// Starts over with the current mode and difficulty.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.start(self.session.config());
    }

    fn start(&mut self, config: SessionConfig) {
        info!(?config, "New session");
        self.session = Session::new(config);
        self.observer.on_turn_changed(Mark::X);
    }

    /// Submits a human move; in single-player mode the computer replies
    /// before this returns.
    ///
    /// # Errors
    ///
    /// Rejected submissions leave the game untouched; see
    /// [`Session::submit_move`].
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, index: usize) -> Result<SessionState, MoveError> {
        let result = self
            .session
            .submit_move(index, &mut self.rng, &mut self.observer);
        log_rejection(index, &result);
        result
    }

    /// Submits a human move without triggering the computer's reply.
    ///
    /// # Errors
    ///
    /// See [`Session::submit_human_move`].
    #[instrument(skip(self))]
    pub fn submit_human_move(&mut self, index: usize) -> Result<SessionState, MoveError> {
        let result = self.session.submit_human_move(index, &mut self.observer);
        log_rejection(index, &result);
        result
    }

    /// Plays the computer's pending reply.
    ///
    /// # Errors
    ///
    /// See [`Session::play_computer_move`].
    #[instrument(skip(self))]
    pub fn play_computer_move(&mut self) -> Result<SessionState, MoveError> {
        self.session
            .play_computer_move(&mut self.rng, &mut self.observer)
    }

    /// Returns the current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably, e.g. to drain recorded events.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consumes the game, returning the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }
}

fn log_rejection(index: usize, result: &Result<SessionState, MoveError>) {
    if let Err(error) = result {
        warn!(index, %error, "Move rejected");
    }
}

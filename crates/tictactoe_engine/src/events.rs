//! Notifications from the engine to a presentation adapter.
//!
//! The engine pushes events; it never reads anything back from the
//! adapter. Rendering is driven entirely by these callbacks plus the
//! board accessors.

use crate::types::{GameOutcome, Mark};
use serde::{Deserialize, Serialize};

/// One engine notification as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A cell became occupied.
    MarkPlaced {
        /// Board index (0-8).
        index: usize,
        /// Mark placed there.
        mark: Mark,
    },
    /// It is now `next`'s turn.
    TurnChanged {
        /// Mark to move.
        next: Mark,
    },
    /// The match ended; the session is terminal.
    GameOver {
        /// `Win` or `Draw`.
        outcome: GameOutcome,
    },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::MarkPlaced { index, mark } => write!(f, "{mark} placed at {index}"),
            GameEvent::TurnChanged { next } => write!(f, "{next} to move"),
            GameEvent::GameOver { outcome } => write!(f, "Game over: {outcome}"),
        }
    }
}

/// Receiver of engine notifications.
pub trait GameObserver {
    /// A cell became occupied.
    fn on_mark_placed(&mut self, index: usize, mark: Mark);

    /// Whose turn it now is.
    fn on_turn_changed(&mut self, next: Mark);

    /// The match ended with `outcome`.
    fn on_game_over(&mut self, outcome: GameOutcome);

    /// Routes an event value to the matching callback.
    fn notify(&mut self, event: GameEvent) {
        match event {
            GameEvent::MarkPlaced { index, mark } => self.on_mark_placed(index, mark),
            GameEvent::TurnChanged { next } => self.on_turn_changed(next),
            GameEvent::GameOver { outcome } => self.on_game_over(outcome),
        }
    }
}

/// Discards every notification.
impl GameObserver for () {
    fn on_mark_placed(&mut self, _index: usize, _mark: Mark) {}
    fn on_turn_changed(&mut self, _next: Mark) {}
    fn on_game_over(&mut self, _outcome: GameOutcome) {}
}

impl<T: GameObserver + ?Sized> GameObserver for &mut T {
    fn on_mark_placed(&mut self, index: usize, mark: Mark) {
        (**self).on_mark_placed(index, mark);
    }

    fn on_turn_changed(&mut self, next: Mark) {
        (**self).on_turn_changed(next);
    }

    fn on_game_over(&mut self, outcome: GameOutcome) {
        (**self).on_game_over(outcome);
    }
}

/// Records notifications in order, for harnesses and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events seen so far.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The last `GameOver` outcome, if any.
    pub fn final_outcome(&self) -> Option<GameOutcome> {
        self.events.iter().rev().find_map(|event| match event {
            GameEvent::GameOver { outcome } => Some(*outcome),
            _ => None,
        })
    }
}

impl GameObserver for EventLog {
    fn on_mark_placed(&mut self, index: usize, mark: Mark) {
        self.events.push(GameEvent::MarkPlaced { index, mark });
    }

    fn on_turn_changed(&mut self, next: Mark) {
        self.events.push(GameEvent::TurnChanged { next });
    }

    fn on_game_over(&mut self, outcome: GameOutcome) {
        self.events.push(GameEvent::GameOver { outcome });
    }
}

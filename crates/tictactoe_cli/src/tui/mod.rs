//! Terminal UI for tictactoe.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tictactoe_engine::{
    Game, GameEvent, GameObserver, GameOutcome, Mark, SessionConfig, SessionState,
};
use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};
use tracing::{debug, error, info, instrument};

use crate::config::GameSettings;
use app::App;
use input::Action;

/// File the TUI writes its logs to.
pub const LOG_FILE: &str = "tictactoe_tui.log";

/// Forwards engine notifications to the UI loop.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<GameEvent>,
}

impl ChannelObserver {
    /// Wraps the sending half of the UI channel.
    pub fn new(tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        Self { tx }
    }

    fn send(&self, event: GameEvent) {
        if self.tx.send(event).is_err() {
            debug!(?event, "UI channel closed, dropping event");
        }
    }
}

impl GameObserver for ChannelObserver {
    fn on_mark_placed(&mut self, index: usize, mark: Mark) {
        self.send(GameEvent::MarkPlaced { index, mark });
    }

    fn on_turn_changed(&mut self, next: Mark) {
        self.send(GameEvent::TurnChanged { next });
    }

    fn on_game_over(&mut self, outcome: GameOutcome) {
        self.send(GameEvent::GameOver { outcome });
    }
}

/// Run the TUI client
pub async fn run_tui(settings: GameSettings) -> Result<()> {
    info!(?settings, "Starting tictactoe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, &settings).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    res
}

/// Local game loop: draw, wait for a key or the computer, repeat.
#[instrument(skip_all)]
async fn run_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    settings: &GameSettings,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let observer = ChannelObserver::new(event_tx);
    let mut game = match settings.seed() {
        Some(seed) => Game::with_seed(observer, settings.session_config(), *seed),
        None => Game::new(observer, settings.session_config()),
    };
    let delay = Duration::from_millis(*settings.computer_delay_ms());
    let mut app = App::new();

    loop {
        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event, game.session().computer_mark());
        }
        app.refresh_hints(game.session());
        terminal.draw(|f| ui::draw(f, &app, game.session()))?;

        if game.session().state() == SessionState::AwaitingComputerMove {
            debug!(delay_ms = delay.as_millis() as u64, "Computer reply pending");
            sleep(delay).await;
            discard_pending_keys()?;
            if let Err(e) = game.play_computer_move() {
                error!(error = %e, "Computer move failed");
                app.set_status(format!("Computer move failed: {e}"));
            }
            continue;
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match input::action_for(key.code) {
            Some(Action::Quit) => {
                info!("User quit");
                return Ok(());
            }
            Some(Action::Place(index)) => submit(&mut game, &mut app, index),
            Some(Action::PlaceAtCursor) => {
                let index = app.cursor().to_index();
                submit(&mut game, &mut app, index);
            }
            Some(Action::Cursor(direction)) => app.move_cursor(direction),
            Some(Action::Restart) => game.restart(),
            Some(Action::ToggleMode) => {
                let config = game.session().config();
                game.start_session(!config.single_player, config.difficulty);
            }
            Some(Action::SetDifficulty(difficulty)) => {
                let SessionConfig { single_player, .. } = game.session().config();
                game.start_session(single_player, difficulty);
            }
            Some(Action::ToggleHint) => app.toggle_hint(),
            None => {}
        }
    }
}

/// Submits the human half only, so the loop can pause before the reply.
fn submit(game: &mut Game<ChannelObserver>, app: &mut App, index: usize) {
    if let Err(e) = game.submit_human_move(index) {
        app.set_status(e.to_string());
    }
}

/// Drops keys typed while the computer was thinking.
fn discard_pending_keys() -> Result<()> {
    while event::poll(Duration::ZERO)? {
        let _ = event::read()?;
    }
    Ok(())
}

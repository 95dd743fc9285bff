//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Cell, Mark, Position, Session};

use super::app::{App, HintScores};

const HELP: &str = "1-9/arrows+Enter: move  r: restart  m: mode  e/d/h: difficulty  ?: hint  q: quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App, session: &Session) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(1), // Mode
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], session, app.cursor(), app.hint_scores());

    frame.render_widget(
        Paragraph::new(mode_line(session))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        chunks[2],
    );

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    frame.render_widget(
        Paragraph::new(HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        chunks[4],
    );
}

/// "Single player (hard)" or "Two players".
fn mode_line(session: &Session) -> String {
    let config = session.config();
    if config.single_player {
        format!("Single player ({}), you are X", config.difficulty)
    } else {
        "Two players".to_string()
    }
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    cursor: Position,
    scores: Option<&HintScores>,
) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let positions = [
            Position::ALL[row * 3],
            Position::ALL[row * 3 + 1],
            Position::ALL[row * 3 + 2],
        ];
        draw_row(frame, chunk, session, cursor, &positions, scores);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    cursor: Position,
    positions: &[Position; 3],
    scores: Option<&HintScores>,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[col * 2], session, cursor, *pos, scores);
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    cursor: Position,
    pos: Position,
    scores: Option<&HintScores>,
) {
    let index = pos.to_index();
    let (symbol, base_style) = match session.board().get(index) {
        Some(Cell::Occupied(Mark::X)) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Cell::Occupied(Mark::O)) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        _ => match scores.and_then(|scores| scores[index]) {
            Some(score) => (format!("{score:+}"), hint_style(score)),
            None => (
                (index + 1).to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        },
    };

    let style = if pos == cursor && !session.is_terminal() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {symbol} "), style)))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn hint_style(score: i8) -> Style {
    let color = match score {
        s if s > 0 => Color::Green,
        0 => Color::Yellow,
        _ => Color::Magenta,
    };
    Style::default().fg(color)
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─────────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use tictactoe_engine::{Difficulty, SessionConfig};

    fn render(app: &App, session: &Session) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app, session)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_mode_and_status() {
        let app = App::new();
        let session = Session::new(SessionConfig::new(true, Difficulty::Hard));
        let screen = render(&app, &session);
        assert!(screen.contains("Single player (hard), you are X"));
        assert!(screen.contains("X's turn"));
    }

    #[test]
    fn test_draw_reads_cached_hints() {
        let mut app = App::new();
        let session = Session::new(SessionConfig::new(false, Difficulty::Easy));
        assert!(!render(&app, &session).contains("+0"));

        app.toggle_hint();
        assert!(app.refresh_hints(&session));
        let first = render(&app, &session);
        assert!(first.contains("+0"));
        assert_eq!(render(&app, &session), first);
        assert!(!app.refresh_hints(&session));
    }
}

//! Keyboard mapping.

use crossterm::event::KeyCode;
use tictactoe_engine::{Difficulty, Direction, Position};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place at a cell (0-8).
    Place(usize),
    /// Place at the cursor.
    PlaceAtCursor,
    /// Move the cursor.
    Cursor(Direction),
    /// Start over with the same mode.
    Restart,
    /// Switch between one and two players and start over.
    ToggleMode,
    /// Pick a computer strength and start over.
    SetDifficulty(Difficulty),
    /// Show or hide minimax scores.
    ToggleHint,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action. Digits 1-9 are cells in reading order.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Action::Place(digit as usize - 1)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Up => Some(Action::Cursor(Direction::Up)),
        KeyCode::Down => Some(Action::Cursor(Direction::Down)),
        KeyCode::Left => Some(Action::Cursor(Direction::Left)),
        KeyCode::Right => Some(Action::Cursor(Direction::Right)),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('m') => Some(Action::ToggleMode),
        KeyCode::Char('e') => Some(Action::SetDifficulty(Difficulty::Easy)),
        KeyCode::Char('d') => Some(Action::SetDifficulty(Difficulty::Medium)),
        KeyCode::Char('h') => Some(Action::SetDifficulty(Difficulty::Hard)),
        KeyCode::Char('?') => Some(Action::ToggleHint),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    cursor.step(direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(action_for(KeyCode::Char('1')), Some(Action::Place(0)));
        assert_eq!(action_for(KeyCode::Char('9')), Some(Action::Place(8)));
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_command_keys() {
        assert_eq!(action_for(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(
            action_for(KeyCode::Char('h')),
            Some(Action::SetDifficulty(Difficulty::Hard))
        );
        assert_eq!(action_for(KeyCode::Enter), Some(Action::PlaceAtCursor));
    }

    #[test]
    fn test_cursor_stops_at_edge() {
        assert_eq!(
            move_cursor(Position::Center, Direction::Up),
            Position::TopCenter
        );
        assert_eq!(
            move_cursor(Position::TopCenter, Direction::Up),
            Position::TopCenter
        );
    }
}

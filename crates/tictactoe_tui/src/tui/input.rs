//! Keyboard mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tictactoe_engine::Position;

/// Direction of a cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward row 2.
    Down,
    /// Toward column 0.
    Left,
    /// Toward column 2.
    Right,
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the board cursor.
    Cursor(Direction),
    /// Place a mark under the cursor.
    Select,
    /// Place a mark on a cell index (0-8).
    Place(usize),
    /// Start a new game.
    Reset,
    /// Show or hide the history panel.
    ToggleHistory,
    /// Travel one step back.
    StepBack,
    /// Travel one step forward.
    StepForward,
    /// Travel to the empty board.
    JumpStart,
    /// Leave the application.
    Quit,
}

/// Maps a key event to a command; releases and unbound keys map to `None`.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Command::Cursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::Cursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Command::Cursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::Cursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Select),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Command::Place(d as usize - 1)),
        KeyCode::Char('0') | KeyCode::Home => Some(Command::JumpStart),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Char('t') | KeyCode::Tab => Some(Command::ToggleHistory),
        KeyCode::Char('[') | KeyCode::Char('<') => Some(Command::StepBack),
        KeyCode::Char(']') | KeyCode::Char('>') => Some(Command::StepForward),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => (row + 1, col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, col + 1),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

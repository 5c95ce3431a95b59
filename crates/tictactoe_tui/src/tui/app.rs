//! Application state: the engine session plus a board cursor.

use super::input::{Command, move_cursor};
use super::ui::cell_at;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe_engine::{Intent, Position, Session, Transition, ViewModel};
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    session: Session,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates an application around a fresh session.
    pub fn new(show_history: bool) -> Self {
        Self {
            session: Session::with_history_shown(show_history),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// The engine session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Derived view of the session.
    pub fn view(&self) -> ViewModel {
        self.session.view()
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Transition {
        match super::input::map_key(key) {
            Some(command) => self.handle(command),
            None => Transition::Ignored,
        }
    }

    /// Handles a mouse event on a frame of size `area`.
    ///
    /// A left click on a cell places a mark there, like its digit key.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Transition {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Transition::Ignored;
        }
        match cell_at(area, self.session.show_history(), mouse.column, mouse.row) {
            Some(pos) => self.handle(Command::Place(pos.to_index())),
            None => Transition::Ignored,
        }
    }

    /// Applies one command, dispatching at most one intent.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Transition {
        match command {
            Command::Cursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
                Transition::Changed
            }
            Command::Select => self.select(self.cursor),
            Command::Place(cell) => match Position::from_index(cell) {
                Some(pos) => {
                    self.cursor = pos;
                    self.select(pos)
                }
                None => Transition::Ignored,
            },
            Command::Reset => self.session.dispatch(Intent::Reset),
            Command::ToggleHistory => self.session.dispatch(Intent::ToggleHistoryView),
            Command::StepBack => match self.session.game().step().checked_sub(1) {
                Some(step) => self.session.dispatch(Intent::JumpTo(step)),
                None => Transition::Ignored,
            },
            Command::StepForward => {
                let step = self.session.game().step() + 1;
                self.session.dispatch(Intent::JumpTo(step))
            }
            Command::JumpStart => self.session.dispatch(Intent::JumpTo(0)),
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
                Transition::Changed
            }
        }
    }

    /// Forwards a move only for an enabled cell, as the board widget would.
    fn select(&mut self, pos: Position) -> Transition {
        let view = self.session.view();
        if view.cell(pos).disabled {
            debug!(position = %pos, "Cell disabled, selection dropped");
            return Transition::Ignored;
        }
        self.session.dispatch(Intent::Move(pos.to_index()))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(false)
    }
}

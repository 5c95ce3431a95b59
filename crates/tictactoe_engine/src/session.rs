//! Explicit state container driven by intents.
//!
//! A [`Session`] is everything the presentation layer needs to keep: the
//! game itself and whether the move history is on screen. Each intent is
//! reduced atomically; invalid intents leave the session untouched.

use super::action::Intent;
use super::game::Game;
use super::view::ViewModel;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Whether an intent changed the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// The intent was applied.
    Changed,
    /// The intent was rejected as a no-op.
    Ignored,
}

impl Transition {
    /// True if state changed.
    pub fn is_changed(self) -> bool {
        matches!(self, Transition::Changed)
    }
}

/// Game plus presentation toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    game: Game,
    show_history: bool,
}

impl Session {
    /// Creates a fresh session with the history panel hidden.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh session with the history panel toggled as given.
    #[instrument]
    pub fn with_history_shown(show_history: bool) -> Self {
        Self {
            game: Game::new(),
            show_history,
        }
    }

    /// The underlying game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Whether the move history list is visible.
    pub fn show_history(&self) -> bool {
        self.show_history
    }

    /// Applies one intent.
    ///
    /// Occupied cells, decided snapshots, out-of-range cells and
    /// out-of-range jump targets are ignored rather than reported.
    #[instrument(skip(self), fields(step = self.game.step()))]
    pub fn dispatch(&mut self, intent: Intent) -> Transition {
        match intent {
            Intent::Move(cell) => match self.game.place_index(cell) {
                Ok(_) => Transition::Changed,
                Err(e) => {
                    debug!(cell, error = %e, "Move ignored");
                    Transition::Ignored
                }
            },
            Intent::Reset => {
                info!("Game reset");
                self.game.reset();
                Transition::Changed
            }
            Intent::JumpTo(step) => match self.game.jump_to(step) {
                Ok(()) => Transition::Changed,
                Err(e) => {
                    debug!(step, error = %e, "Jump ignored");
                    Transition::Ignored
                }
            },
            Intent::ToggleHistoryView => {
                self.show_history = !self.show_history;
                debug!(show_history = self.show_history, "History view toggled");
                Transition::Changed
            }
        }
    }

    /// Derives the view model for the current state.
    pub fn view(&self) -> ViewModel {
        ViewModel::from_session(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_history_twice_restores() {
        let mut session = Session::new();
        assert!(!session.show_history());
        session.dispatch(Intent::ToggleHistoryView);
        assert!(session.show_history());
        session.dispatch(Intent::ToggleHistoryView);
        assert!(!session.show_history());
    }

    #[test]
    fn test_rejected_move_is_ignored() {
        let mut session = Session::new();
        assert_eq!(session.dispatch(Intent::Move(4)), Transition::Changed);
        let before = session.clone();
        assert_eq!(session.dispatch(Intent::Move(4)), Transition::Ignored);
        assert_eq!(session.dispatch(Intent::Move(42)), Transition::Ignored);
        assert_eq!(session, before);
    }

    #[test]
    fn test_out_of_range_jump_is_ignored() {
        let mut session = Session::new();
        session.dispatch(Intent::Move(0));
        let before = session.clone();
        assert_eq!(session.dispatch(Intent::JumpTo(2)), Transition::Ignored);
        assert_eq!(session, before);
    }

    #[test]
    fn test_reset_keeps_history_panel_setting() {
        let mut session = Session::with_history_shown(true);
        session.dispatch(Intent::Move(0));
        session.dispatch(Intent::Reset);
        assert!(session.show_history());
        assert_eq!(session.game().history().len(), 1);
        assert_eq!(session.game().step(), 0);
    }
}

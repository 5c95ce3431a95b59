//! The current step always points at an existing snapshot.

use super::Invariant;
use crate::Game;

/// Invariant: `step < history.len()`.
pub struct StepInBounds;

impl Invariant<Game> for StepInBounds {
    fn holds(game: &Game) -> bool {
        game.step() < game.history().len()
    }

    fn description() -> &'static str {
        "Current step indexes an existing snapshot"
    }
}

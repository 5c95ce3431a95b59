//! A decided snapshot ends the line of play.

use super::Invariant;
use crate::Game;
use crate::rules::{evaluate, is_full};

/// Invariant: every snapshot that has a successor was still undecided.
///
/// A won or drawn board may only ever be the last entry of a history.
pub struct NoMovesAfterOutcome;

impl Invariant<Game> for NoMovesAfterOutcome {
    fn holds(game: &Game) -> bool {
        let history = game.history();
        let Some((_, played)) = history.split_last() else {
            return true;
        };
        played.iter().all(|board| evaluate(board).winner.is_none() && !is_full(board))
    }

    fn description() -> &'static str {
        "No snapshot follows a won or drawn board"
    }
}

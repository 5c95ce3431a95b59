//! History always starts from the empty board.

use super::Invariant;
use crate::Game;

/// Invariant: history holds at least one snapshot and the first is empty.
pub struct NonEmptyHistory;

impl Invariant<Game> for NonEmptyHistory {
    fn holds(game: &Game) -> bool {
        game.history()
            .first()
            .is_some_and(|board| board.mark_count() == 0)
    }

    fn description() -> &'static str {
        "History starts with a single empty snapshot"
    }
}

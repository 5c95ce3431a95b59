//! Move count invariant: snapshot `i` carries exactly `i` marks.

use super::Invariant;
use crate::Game;

/// Invariant: the number of marks on each snapshot equals its index.
///
/// This is what makes turn parity derivable from the step alone.
pub struct MoveCountMatchesIndex;

impl Invariant<Game> for MoveCountMatchesIndex {
    fn holds(game: &Game) -> bool {
        game.history()
            .iter()
            .enumerate()
            .all(|(idx, board)| board.mark_count() == idx)
    }

    fn description() -> &'static str {
        "Each snapshot has as many marks as its history index"
    }
}

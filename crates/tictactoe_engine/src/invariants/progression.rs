//! Successive snapshots differ by exactly one newly placed mark.

use super::Invariant;
use crate::{Board, Game, Player, Square};

/// Invariant: snapshot `i + 1` is snapshot `i` plus one mark, placed on an
/// empty square, belonging to the player whose turn it was at `i`.
///
/// Together with [`MoveCountMatchesIndex`](super::MoveCountMatchesIndex)
/// this rules out overwrites and out-of-turn marks.
pub struct SingleCellProgression;

fn is_successor(before: &Board, after: &Board, mover: Player) -> bool {
    let mut placed = 0;
    for (old, new) in before.squares().iter().zip(after.squares()) {
        match (old, new) {
            (a, b) if a == b => {}
            (Square::Empty, Square::Occupied(p)) if *p == mover => placed += 1,
            _ => return false,
        }
    }
    placed == 1
}

impl Invariant<Game> for SingleCellProgression {
    fn holds(game: &Game) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(idx, pair)| is_successor(&pair[0], &pair[1], Player::for_move_count(idx)))
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark for the player to move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_played_game_holds() {
        let game = Game::replay(&[4, 0, 8, 2]).expect("legal moves");
        assert!(SingleCellProgression::holds(&game));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let first = Board::new().with_mark(Position::Center, Player::O);
        let game = Game::from_parts_unchecked(vec![Board::new(), first], 0);
        assert!(!SingleCellProgression::holds(&game));
    }

    #[test]
    fn test_overwrite_violates() {
        let first = Board::new().with_mark(Position::Center, Player::X);
        let overwritten = first.with_mark(Position::Center, Player::O);
        let game = Game::from_parts_unchecked(vec![Board::new(), first, overwritten], 0);
        assert!(!SingleCellProgression::holds(&game));
    }
}

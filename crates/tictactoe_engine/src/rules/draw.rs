//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Player};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A snapshot is drawn when nobody has won and no square is left.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, winner: Option<Player>) -> bool {
    winner.is_none() && is_full(board)
}

#[cfg(test)]
mod tests {
    use super::super::win::evaluate;
    use super::*;
    use crate::Position;

    fn fill(cells: [Player; 9]) -> Board {
        Position::ALL
            .iter()
            .zip(cells)
            .fold(Board::new(), |board, (pos, player)| board.with_mark(*pos, player))
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert!(!is_draw(&board, evaluate(&board).winner));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        // X O X / O X X / O X O
        let board = fill([X, O, X, O, X, X, O, X, O]);
        let winner = evaluate(&board).winner;
        assert_eq!(winner, None);
        assert!(is_draw(&board, winner));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        use Player::{O, X};
        // X X X / O O X / X O O
        let board = fill([X, X, X, O, O, X, X, O, O]);
        let winner = evaluate(&board).winner;
        assert_eq!(winner, Some(X));
        assert!(!is_draw(&board, winner));
    }
}

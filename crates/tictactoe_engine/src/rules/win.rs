//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning triples, in evaluation order.
///
/// Rows top-to-bottom, columns left-to-right, then the two diagonals.
/// [`evaluate`] reports the first uniform triple in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Outcome of judging a single snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Evaluation {
    /// Owner of the winning line, if any.
    pub winner: Option<Player>,
    /// The winning triple, if any.
    pub line: Option<[Position; 3]>,
}

impl Evaluation {
    /// True when the triple contains `pos`.
    pub fn in_line(&self, pos: Position) -> bool {
        self.line.is_some_and(|line| line.contains(&pos))
    }
}

/// Checks the board for three equal non-empty squares in a line.
///
/// Returns the first matching triple's mark and positions, or an empty
/// [`Evaluation`] when no line is uniform.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Evaluation {
                winner: Some(player),
                line: Some(line),
            };
        }
    }

    Evaluation::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, (pos, player)| board.with_mark(*pos, *player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), Evaluation::default());
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        let eval = evaluate(&board);
        assert_eq!(eval.winner, Some(Player::X));
        assert_eq!(
            eval.line,
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        let eval = evaluate(&board);
        assert_eq!(eval.winner, Some(Player::O));
        assert!(eval.in_line(Position::BottomLeft));
        assert!(!eval.in_line(Position::TopLeft));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(evaluate(&board).winner, None);
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            let board = board_with(&line.map(|pos| (pos, Player::O)));
            assert_eq!(evaluate(&board).line, Some(line));
        }
    }

    #[test]
    fn test_first_line_wins_tie_break() {
        // Not reachable in play, but the reported line must be deterministic.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        assert_eq!(evaluate(&board).line, Some(LINES[0]));
    }
}

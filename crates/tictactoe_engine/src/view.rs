//! Derived view model handed to presentation consumers.

use super::action::Move;
use super::session::Session;
use super::status::Status;
use super::{Board, Position, Square};
use serde::{Deserialize, Serialize};

/// One cell as a board renderer should draw it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Row-major index (0-8).
    pub index: usize,
    /// Occupant of the cell.
    pub square: Square,
    /// Selecting this cell would be ignored: the game is over or the cell is taken.
    pub disabled: bool,
    /// Part of the winning line.
    pub winning: bool,
    /// Accessible description, e.g. "Cell 5, X".
    pub label: String,
}

impl CellView {
    fn new(pos: Position, square: Square, game_over: bool, winning: bool) -> Self {
        let index = pos.to_index();
        let disabled = game_over || square != Square::Empty;
        let label = match square {
            Square::Occupied(player) => format!("Cell {}, {}", index + 1, player),
            Square::Empty if disabled => format!("Cell {}, empty.", index + 1),
            Square::Empty => format!("Cell {}, empty. Place mark here.", index + 1),
        };
        Self {
            index,
            square,
            disabled,
            winning,
            label,
        }
    }
}

/// One entry of the move history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// History index this entry jumps to.
    pub step: usize,
    /// "Go to game start" or "Go to move #N".
    pub description: String,
    /// The move that produced this snapshot; `None` for the start.
    pub mov: Option<Move>,
    /// This is the displayed snapshot.
    pub is_current: bool,
}

/// Everything a renderer reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
    /// The displayed snapshot.
    pub snapshot: Board,
    /// Status line.
    pub status: Status,
    /// No further moves are accepted on this snapshot.
    pub game_over: bool,
    /// Winning triple, if any.
    pub winning_line: Option<[Position; 3]>,
    /// Per-cell rendering data, row-major.
    pub cells: Vec<CellView>,
    /// Entries for the time-travel list, one per snapshot.
    pub history: Vec<HistoryEntry>,
    /// Whether the history list should be shown.
    pub show_history: bool,
}

impl ViewModel {
    /// Derives the view of `session`.
    pub fn from_session(session: &Session) -> Self {
        let game = session.game();
        let snapshot = *game.current();
        let evaluation = game.evaluation();
        let status = game.status();
        let game_over = status.is_over();

        let cells = Position::ALL
            .iter()
            .map(|pos| {
                CellView::new(*pos, snapshot.get(*pos), game_over, evaluation.in_line(*pos))
            })
            .collect();

        let moves = game.moves();
        let history = (0..game.history().len())
            .map(|step| HistoryEntry {
                step,
                description: if step == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{}", step)
                },
                mov: step.checked_sub(1).and_then(|idx| moves.get(idx).copied()),
                is_current: step == game.step(),
            })
            .collect();

        Self {
            snapshot,
            status,
            game_over,
            winning_line: evaluation.line,
            cells,
            history,
            show_history: session.show_history(),
        }
    }

    /// Cell view for `pos`.
    pub fn cell(&self, pos: Position) -> &CellView {
        &self.cells[pos.to_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Intent;

    #[test]
    fn test_initial_view() {
        let view = Session::new().view();
        assert_eq!(view.status.to_string(), "Next player: X");
        assert!(!view.game_over);
        assert_eq!(view.cells.len(), 9);
        assert!(view.cells.iter().all(|c| !c.disabled));
        assert_eq!(view.cell(Position::TopLeft).label, "Cell 1, empty. Place mark here.");
        assert_eq!(view.history.len(), 1);
        assert_eq!(view.history[0].description, "Go to game start");
        assert!(view.history[0].is_current);
    }

    #[test]
    fn test_occupied_cell_label_and_disabled() {
        let mut session = Session::new();
        session.dispatch(Intent::Move(4));
        let view = session.view();
        let center = view.cell(Position::Center);
        assert!(center.disabled);
        assert_eq!(center.label, "Cell 5, X");
        assert!(!view.cell(Position::TopLeft).disabled);
    }

    #[test]
    fn test_game_over_disables_empty_cells() {
        let mut session = Session::new();
        for cell in [0, 3, 1, 4, 2] {
            session.dispatch(Intent::Move(cell));
        }
        let view = session.view();
        assert!(view.game_over);
        assert_eq!(view.cell(Position::BottomRight).label, "Cell 9, empty.");
        assert!(view.cells.iter().all(|c| c.disabled));
        let winning: Vec<usize> =
            view.cells.iter().filter(|c| c.winning).map(|c| c.index).collect();
        assert_eq!(winning, vec![0, 1, 2]);
    }

    #[test]
    fn test_history_entries_follow_jump() {
        let mut session = Session::new();
        session.dispatch(Intent::Move(0));
        session.dispatch(Intent::Move(8));
        session.dispatch(Intent::JumpTo(1));
        let view = session.view();
        let descriptions: Vec<&str> = view.history.iter().map(|h| h.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Go to game start", "Go to move #1", "Go to move #2"]);
        assert!(view.history[1].is_current);
        assert_eq!(
            view.history[2].mov,
            Some(Move::new(crate::Player::O, Position::BottomRight))
        );
        assert_eq!(view.status.to_string(), "Next player: O");
    }
}

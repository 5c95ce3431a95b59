//! First-class action types for tic-tac-toe.
//!
//! Moves and intents are domain events, not side effects. They represent
//! what the player asked for and can be validated independently of
//! execution.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// A discrete request coming up from the presentation layer.
///
/// Cell and step indices are raw so that out-of-range values from a
/// consumer are rejected by the engine rather than by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Place the current player's mark at a cell index (0-8).
    Move(usize),
    /// Start over with an empty board.
    Reset,
    /// Display the snapshot at the given history step.
    JumpTo(usize),
    /// Show or hide the move history list.
    ToggleHistoryView,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Move(cell) => write!(f, "move({})", cell),
            Intent::Reset => write!(f, "reset()"),
            Intent::JumpTo(step) => write!(f, "jumpTo({})", step),
            Intent::ToggleHistoryView => write!(f, "toggleHistoryView()"),
        }
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The displayed snapshot is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The cell index is not on the board.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),
}

/// Error returned when a time-travel target does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpError {
    /// The target step is past the end of history.
    #[display("Step {} out of range (history has {} snapshots)", target, len)]
    OutOfRange {
        /// Requested step.
        target: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

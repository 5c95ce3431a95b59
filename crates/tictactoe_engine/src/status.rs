//! Derived game status.

use super::rules::{Evaluation, is_draw};
use super::{Board, Player};
use serde::{Deserialize, Serialize};

/// Status of a snapshot, in presentation priority order.
///
/// A win outranks a draw, and a draw outranks the turn indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A player completed a line.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// The board is full and nobody won.
    #[display("Draw! No moves left.")]
    Draw,
    /// The game continues with this player to move.
    #[display("Next player: {}", _0)]
    Next(Player),
}

impl Status {
    /// Derives the status of `board` given its evaluation and the player to move.
    pub fn derive(board: &Board, evaluation: &Evaluation, to_move: Player) -> Self {
        if let Some(winner) = evaluation.winner {
            Status::Won(winner)
        } else if is_draw(board, evaluation.winner) {
            Status::Draw
        } else {
            Status::Next(to_move)
        }
    }

    /// True for a won or drawn snapshot.
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::Next(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::Won(player) => Some(*player),
            Status::Draw | Status::Next(_) => None,
        }
    }
}

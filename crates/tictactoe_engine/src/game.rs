//! History engine: an append-only list of snapshots plus a step pointer.
//!
//! Every accepted move takes the snapshot at the current step, adds one
//! mark, drops any snapshots after the step, and appends the result. The
//! step may point anywhere in the history (time travel); the player to
//! move is derived from it.

use super::action::{JumpError, Move, MoveError};
use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use super::rules::{Evaluation, evaluate};
use super::status::Status;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tic-tac-toe game with time travel.
///
/// Deserializing goes through [`Game::from_parts`], so a stored game that
/// breaks a history invariant is refused instead of loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGame")]
pub struct Game {
    history: Vec<Board>,
    step: usize,
}

/// Wire shape of a [`Game`] before validation.
#[derive(Deserialize)]
struct RawGame {
    history: Vec<Board>,
    step: usize,
}

impl TryFrom<RawGame> for Game {
    type Error = HistoryError;

    fn try_from(raw: RawGame) -> Result<Self, Self::Error> {
        Game::from_parts(raw.history, raw.step)
    }
}

/// A history rejected by [`Game::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error)]
pub struct HistoryError {
    /// Every invariant the parts failed.
    pub violations: Vec<InvariantViolation>,
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let descriptions = self
            .violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Invalid history: {}", descriptions)
    }
}

impl Game {
    /// Creates a new game: one empty snapshot at step 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step: 0,
        }
    }

    /// Rebuilds a game from a history and step, checking every invariant.
    #[instrument(skip(history), fields(len = history.len()))]
    pub fn from_parts(history: Vec<Board>, step: usize) -> Result<Self, HistoryError> {
        let game = Self::from_parts_unchecked(history, step);
        HistoryInvariants::check_all(&game).map_err(|violations| HistoryError { violations })?;
        Ok(game)
    }

    pub(crate) fn from_parts_unchecked(history: Vec<Board>, step: usize) -> Self {
        Self { history, step }
    }

    /// Plays a sequence of cell indices from a fresh game.
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &cell in cells {
            game.place_index(cell)?;
        }
        Ok(game)
    }

    /// Discards all history and starts over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.history.clear();
        self.history.push(Board::new());
        self.step = 0;
        self.debug_check();
    }

    /// All snapshots, index 0 being the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The displayed snapshot.
    pub fn current(&self) -> &Board {
        // step < history.len() is an invariant of every constructor
        &self.history[self.step]
    }

    /// Player to move at the current step: X on even steps, O on odd.
    pub fn to_move(&self) -> Player {
        Player::for_move_count(self.step)
    }

    /// Winner and winning line of the displayed snapshot.
    pub fn evaluation(&self) -> Evaluation {
        evaluate(self.current())
    }

    /// Status of the displayed snapshot.
    pub fn status(&self) -> Status {
        Status::derive(self.current(), &self.evaluation(), self.to_move())
    }

    /// True when the displayed snapshot is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Moves leading up to each snapshot; entry `i` produced snapshot `i + 1`.
    pub fn moves(&self) -> Vec<Move> {
        self.history
            .windows(2)
            .enumerate()
            .filter_map(|(idx, pair)| {
                Position::ALL
                    .iter()
                    .copied()
                    .find(|pos| pair[0].get(*pos) != pair[1].get(*pos))
                    .map(|pos| Move::new(Player::for_move_count(idx), pos))
            })
            .collect()
    }

    /// Places the current player's mark on a raw cell index.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn place_index(&mut self, cell: usize) -> Result<Move, MoveError> {
        let pos = Position::from_index(cell).ok_or(MoveError::OutOfBounds(cell))?;
        self.place(pos)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Rejects the move without touching state if the displayed snapshot is
    /// already decided or the square is taken. On success, snapshots after
    /// the current step are discarded before the new one is appended.
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move()))]
    pub fn place(&mut self, pos: Position) -> Result<Move, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.current().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mov = Move::new(self.to_move(), pos);
        let next = self.current().with_mark(pos, mov.player);

        let dropped = self.history.len() - (self.step + 1);
        if dropped > 0 {
            debug!(dropped, "Discarding future snapshots");
        }
        self.history.truncate(self.step + 1);
        self.history.push(next);
        self.step += 1;
        self.debug_check();

        debug!(%mov, "Move applied");
        Ok(mov)
    }

    /// Displays the snapshot at `target` without changing history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, target: usize) -> Result<(), JumpError> {
        if target >= self.history.len() {
            return Err(JumpError::OutOfRange {
                target,
                len: self.history.len(),
            });
        }
        self.step = target;
        self.debug_check();
        Ok(())
    }

    fn debug_check(&self) {
        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "History invariants violated: {:?}",
            HistoryInvariants::check_all(self)
        );
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

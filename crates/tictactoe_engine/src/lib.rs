//! Tic-tac-toe state engine with move history and time travel.
//!
//! The engine keeps an ordered list of board snapshots and a step pointer
//! into it. Everything else (whose turn it is, the winner, the winning
//! line, whether the board is drawn) is derived from the snapshot at the
//! current step.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`], [`Position`]
//! - **Rules**: [`rules::evaluate`], [`rules::is_draw`]
//! - **Game**: [`Game`] owns history and step
//! - **Session**: [`Session`] reduces [`Intent`]s and derives a [`ViewModel`]
//! - **Invariants**: [`invariants::HistoryInvariants`] guard every transition
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Intent, Session, Status, Player};
//!
//! let mut session = Session::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     session.dispatch(Intent::Move(cell));
//! }
//! let view = session.view();
//! assert_eq!(view.status, Status::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod status;
mod types;
mod view;

pub use action::{Intent, JumpError, Move, MoveError};
pub use game::{Game, HistoryError};
pub use position::Position;
pub use session::{Session, Transition};
pub use status::Status;
pub use types::{Board, Player, Square};
pub use view::{CellView, HistoryEntry, ViewModel};

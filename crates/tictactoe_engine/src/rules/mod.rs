//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board) snapshot. Rules are
//! kept apart from history bookkeeping so every snapshot in a history can be
//! judged on its own.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Evaluation, LINES, evaluate};

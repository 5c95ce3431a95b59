//! Terminal front-end for the tic-tac-toe state engine.
//!
//! The engine owns all game state; this crate only maps keys to intents,
//! renders the derived view model, and wires up configuration and logging.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use config::{ConfigError, TuiConfig};

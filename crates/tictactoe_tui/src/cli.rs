//! Command-line interface for the `tictactoe` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::Position;

/// Tic Tac Toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if it does not exist)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Open with the move history panel visible
        #[arg(long)]
        show_history: bool,
    },

    /// Apply moves without a terminal and print the result
    Replay {
        /// Cells in move order, as indices (0-8) or labels such as "center"
        #[arg(value_parser = parse_cell)]
        cells: Vec<usize>,

        /// Print the full view model as JSON
        #[arg(long)]
        json: bool,

        /// Fail on the first rejected move instead of skipping it
        #[arg(long)]
        strict: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            show_history: false,
        }
    }
}

/// Reads a cell as a raw index or a position label.
///
/// Numbers pass through unchecked so the engine reports out-of-range
/// cells the same way it reports any other rejected move.
fn parse_cell(s: &str) -> Result<usize, String> {
    if let Ok(cell) = s.trim().parse::<usize>() {
        return Ok(cell);
    }
    Position::from_label_or_number(s)
        .map(Position::to_index)
        .ok_or_else(|| format!("unknown cell '{}' (expected 0-8 or a label like top-left)", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["tictactoe"]).expect("valid args");
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::try_parse_from(["tictactoe", "replay", "0", "3", "1", "--json"])
            .expect("valid args");
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                cells: vec![0, 3, 1],
                json: true,
                strict: false,
            })
        );
    }

    #[test]
    fn test_replay_accepts_labels() {
        let cli = Cli::try_parse_from(["tictactoe", "replay", "center", "Top-left", "8"])
            .expect("valid args");
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                cells: vec![4, 0, 8],
                json: false,
                strict: false,
            })
        );
    }

    #[test]
    fn test_out_of_range_index_reaches_engine() {
        assert_eq!(parse_cell("11"), Ok(11));
        assert!(parse_cell("middle").is_err());
    }

    #[test]
    fn test_negative_cell_rejected() {
        assert!(Cli::try_parse_from(["tictactoe", "replay", "--", "-1"]).is_err());
    }
}

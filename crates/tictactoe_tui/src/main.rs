//! Tic Tac Toe - terminal front-end.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::cli::{Cli, Command};
use tictactoe_tui::{TuiConfig, logging, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or_default() {
        Command::Play { show_history } => {
            logging::init_file(&config)?;
            tui::run(&config, show_history)
        }
        Command::Replay {
            cells,
            json,
            strict,
        } => {
            logging::init_stderr(&config);
            info!(moves = cells.len(), "Replaying moves");
            let view = replay::run(&cells, strict)?;
            println!("{}", replay::render(&view, json)?);
            Ok(())
        }
    }
}

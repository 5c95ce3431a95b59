//! Interactive terminal UI.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Command, Direction, map_key, move_cursor};
pub use ui::{cell_at, draw};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

use crate::TuiConfig;

/// Runs the interactive game until the user quits.
///
/// The terminal is restored before any error is returned.
#[instrument(skip(config))]
pub fn run(config: &TuiConfig, show_history: bool) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(show_history || *config.show_history());
    let res = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(step = app.session().game().step(), "TUI exited");
    res
}

/// One intent per event, then redraw.
fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let mut area = Rect::default();
        terminal.draw(|frame| {
            area = frame.area();
            draw(frame, app);
        })?;

        match event::read()? {
            Event::Key(key) => {
                app.handle_key(key);
            }
            Event::Mouse(mouse) => {
                app.handle_mouse(mouse, area);
            }
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

//! Headless replay of a move list.

use anyhow::Result;
use tictactoe_engine::{Game, Intent, Session, ViewModel};
use tracing::{info, instrument, warn};

/// Applies `cells` to a fresh session.
///
/// Rejected moves are skipped the same way the interactive board skips
/// them; with `strict` the first rejection is an error instead.
#[instrument]
pub fn run(cells: &[usize], strict: bool) -> Result<ViewModel> {
    if strict {
        let game = Game::replay(cells)?;
        let mut session = Session::new();
        for mov in game.moves() {
            session.dispatch(Intent::Move(mov.position.to_index()));
        }
        return Ok(session.view());
    }

    let mut session = Session::new();
    let mut ignored = 0usize;
    for &cell in cells {
        if !session.dispatch(Intent::Move(cell)).is_changed() {
            warn!(cell, "Skipping rejected move");
            ignored += 1;
        }
    }
    info!(applied = cells.len() - ignored, ignored, "Replay finished");
    Ok(session.view())
}

/// Formats a view for stdout: the board grid followed by the status line,
/// or the whole view model as pretty JSON.
pub fn render(view: &ViewModel, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(view)?)
    } else {
        Ok(format!("{}\n\n{}", view.snapshot.display(), view.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{Player, Status};

    #[test]
    fn test_lenient_replay_skips_rejections() {
        let view = run(&[0, 0, 3, 1, 4, 2], false).expect("lenient replay");
        assert_eq!(view.status, Status::Won(Player::X));
        assert_eq!(view.history.len(), 6);
    }

    #[test]
    fn test_strict_replay_fails_on_rejection() {
        let err = run(&[0, 0], true).unwrap_err();
        assert!(err.to_string().contains("already occupied"));
    }

    #[test]
    fn test_render_text() {
        let view = run(&[0, 3, 1, 4, 2], true).expect("strict replay");
        let text = render(&view, false).expect("text render");
        assert_eq!(text, "X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9\n\nWinner: X");
    }

    #[test]
    fn test_render_json() {
        let view = run(&[4], false).expect("lenient replay");
        let json = render(&view, true).expect("json render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["game_over"], serde_json::Value::Bool(false));
        assert_eq!(value["history"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["cells"][4]["label"], "Cell 5, X");
    }
}

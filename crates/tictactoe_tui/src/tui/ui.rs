//! Stateless UI rendering.
//!
//! Everything here reads the engine's [`ViewModel`]; nothing decides game
//! state.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as Point, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::rc::Rc;
use tictactoe_engine::{CellView, Player, Position, Square, Status, ViewModel};

use super::app::App;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const HISTORY_WIDTH: u16 = 40;

const HELP: &str =
    "←↑↓→ move · Enter/1-9/click place · [ ] step · 0 start · t history · r reset · q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();
    let chunks = screen_chunks(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_status(frame, chunks[1], &view.status);

    let (board, history) = split_main(chunks[2], view.show_history);
    draw_board(frame, board, &view, app.cursor());
    if let Some(history) = history {
        draw_history(frame, history, &view);
    }

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn draw_status(frame: &mut Frame, area: Rect, status: &Status) {
    let color = match status {
        Status::Won(_) => Color::Green,
        Status::Draw => Color::Magenta,
        Status::Next(_) => Color::Yellow,
    };
    let paragraph = Paragraph::new(status.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Renders the 3x3 grid, one square widget per cell.
fn draw_board(frame: &mut Frame, area: Rect, view: &ViewModel, cursor: Position) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Board")
        .border_style(if view.game_over {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (pos, cell_area) in cell_rects(inner) {
        draw_square(frame, cell_area, view.cell(pos), pos == cursor);
    }
}

/// Renders one cell. Enablement is already folded into `cell.disabled`.
fn draw_square(frame: &mut Frame, area: Rect, cell: &CellView, focused: bool) {
    let (symbol, mut style) = match cell.square {
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Square::Empty if cell.disabled => ("·".to_string(), Style::default().fg(Color::DarkGray)),
        Square::Empty => ((cell.index + 1).to_string(), Style::default().fg(Color::DarkGray)),
    };

    if cell.winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let border = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let items: Vec<ListItem> = view
        .history
        .iter()
        .map(|entry| {
            let text = match entry.mov {
                Some(mov) => format!("{} ({})", entry.description, mov),
                None => entry.description.clone(),
            };
            ListItem::new(text)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Move History"))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(view.history.iter().position(|entry| entry.is_current));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Finds the board cell under a terminal coordinate.
///
/// `area` is the whole frame; the layout is the one [`draw`] uses.
pub fn cell_at(area: Rect, show_history: bool, column: u16, row: u16) -> Option<Position> {
    let (board, _) = split_main(screen_chunks(area)[2], show_history);
    let inner = Block::default().borders(Borders::ALL).inner(board);
    cell_rects(inner)
        .into_iter()
        .find(|(_, rect)| rect.contains(Point::new(column, row)))
        .map(|(pos, _)| pos)
}

/// Title, status, main area and help, top to bottom.
fn screen_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Status
            Constraint::Min(CELL_HEIGHT * 3 + 2),
            Constraint::Length(3), // Help
        ])
        .split(area)
}

/// Board on the left, history panel on the right when shown.
fn split_main(area: Rect, show_history: bool) -> (Rect, Option<Rect>) {
    if !show_history {
        return (area, None);
    }
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(CELL_WIDTH * 3 + 2), Constraint::Length(HISTORY_WIDTH)])
        .split(area);
    (main[0], Some(main[1]))
}

/// Screen rectangle of each cell, row-major, centered inside the board block.
fn cell_rects(inner: Rect) -> Vec<(Position, Rect)> {
    let grid = center_rect(inner, CELL_WIDTH * 3, CELL_HEIGHT * 3);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(grid);

    let mut cells = Vec::with_capacity(9);
    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row_area);
        for (col, cell_area) in cols.iter().enumerate() {
            if let Some(pos) = Position::from_row_col(row, col) {
                cells.push((pos, *cell_area));
            }
        }
    }
    cells
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hits(area: Rect, show_history: bool, pos: Position) -> usize {
        (0..area.height)
            .flat_map(|row| (0..area.width).map(move |column| (column, row)))
            .filter(|(column, row)| cell_at(area, show_history, *column, *row) == Some(pos))
            .count()
    }

    #[test]
    fn test_every_cell_is_clickable() {
        let area = Rect::new(0, 0, 80, 24);
        for show_history in [false, true] {
            for pos in Position::ALL {
                let expected = usize::from(CELL_WIDTH * CELL_HEIGHT);
                assert_eq!(hits(area, show_history, pos), expected, "{:?}", pos);
            }
        }
    }

    #[test]
    fn test_click_outside_board_misses() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(cell_at(area, false, 0, 0), None);
        assert_eq!(cell_at(area, true, 79, 10), None);
    }
}

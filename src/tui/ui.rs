//! Stateless UI rendering for tic-tac-toe.
//!
//! Rendering and mouse hit-testing share [`ScreenLayout`], so a click lands
//! on exactly the cell or history entry that was drawn there.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use timeline_tictactoe::{Player, Position, Square, Status, winning_line};

use super::app::{App, Focus};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Where every widget goes for a given terminal area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// Bounding box of the 3x3 grid.
    pub board: Rect,
    /// Each cell, row-major.
    pub cells: [Rect; 9],
    /// Bordered history block.
    pub history: Rect,
    /// Status box.
    pub status: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into the game's regions.
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),             // Title
                Constraint::Min(BOARD_HEIGHT + 2), // Board + history
                Constraint::Length(3),             // Status
                Constraint::Length(2),             // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BOARD_WIDTH + 4), Constraint::Min(24)])
            .split(rows[1]);

        let board = center_rect(body[0], BOARD_WIDTH, BOARD_HEIGHT);

        Self {
            title: rows[0],
            board,
            cells: cell_rects(board),
            history: body[1],
            status: rows[2],
            help: rows[3],
        }
    }

    /// The cell under terminal coordinates, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cells
            .iter()
            .position(|cell| contains(*cell, column, row))
            .and_then(Position::from_index)
    }

    /// The history step under terminal coordinates, if any.
    pub fn entry_at(&self, column: u16, row: u16, selected: usize, len: usize) -> Option<usize> {
        let inner = history_inner(self.history);
        if !contains(inner, column, row) {
            return None;
        }
        let step = history_offset(selected, inner.height) + usize::from(row - inner.y);
        (step < len).then_some(step)
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());
    let game = app.game();

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    draw_board(frame, &layout, app);
    draw_history(frame, &layout, app);

    let status = game.status();
    let status_style = match status {
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::Draw => Style::default().fg(Color::Magenta),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    let status_text = Paragraph::new(status.to_string())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, layout.status);

    let help = Paragraph::new(
        "arrows: move  enter/1-9: play  tab: history  r: reset game  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

fn draw_board(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let board = app.game().board();
    let winning = winning_line(board).map(|(_, line)| line);
    let playable = app.game().valid_moves();
    let board_focused = app.focus() == Focus::Board;

    for pos in Position::ALL {
        let (symbol, base_style) = match board.get(pos) {
            Square::Empty if app.show_position_hints() && playable.contains(&pos) => (
                format!("{}", pos.to_index() + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Square::Empty => (String::new(), Style::default()),
            Square::Occupied(Player::X) => (
                "X".to_string(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Square::Occupied(Player::O) => (
                "O".to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };

        let style = if board_focused && pos == app.cursor() {
            base_style.bg(Color::White).fg(Color::Black)
        } else if winning.is_some_and(|line| line.contains(&pos)) {
            base_style.bg(Color::Green)
        } else {
            base_style
        };

        let cell = Paragraph::new(Line::from(Span::styled(symbol, style)))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(
                Style::default().fg(Color::DarkGray),
            ))
            .style(style);
        frame.render_widget(cell, layout.cells[pos.to_index()]);
    }
}

fn draw_history(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let entries = app.game().history().entries();
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("{}. {}", entry.step + 1, entry),
                style,
            )))
        })
        .collect();

    let border_style = if app.focus() == Focus::History {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title("History")
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
        .highlight_symbol("> ");

    let inner = history_inner(layout.history);
    let mut state = ListState::default()
        .with_offset(history_offset(app.history_selected(), inner.height))
        .with_selected(Some(app.history_selected()));
    frame.render_stateful_widget(list, layout.history, &mut state);
}

/// Lays the nine cells out in a 3x3 grid with one-column gaps.
fn cell_rects(board: Rect) -> [Rect; 9] {
    let mut cells = [Rect::default(); 9];
    for pos in Position::ALL {
        cells[pos.to_index()] = Rect {
            x: board.x + pos.col() as u16 * (CELL_WIDTH + 1),
            y: board.y + pos.row() as u16 * (CELL_HEIGHT + 1),
            width: CELL_WIDTH,
            height: CELL_HEIGHT,
        }
        .intersection(board);
    }
    cells
}

/// Area inside the history block's border.
fn history_inner(history: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(history)
}

/// First visible history row when `selected` must stay on screen.
fn history_offset(selected: usize, visible_rows: u16) -> usize {
    selected.saturating_sub(usize::from(visible_rows.max(1)) - 1)
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use timeline_tictactoe::{GameAction, TuiConfig};

    fn layout() -> ScreenLayout {
        ScreenLayout::new(Rect::new(0, 0, 100, 30))
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let layout = layout();
        for (i, a) in layout.cells.iter().enumerate() {
            assert_eq!(a.width, CELL_WIDTH);
            assert_eq!(a.height, CELL_HEIGHT);
            for b in &layout.cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_cell_hit_testing_matches_layout() {
        let layout = layout();
        for pos in Position::ALL {
            let cell = layout.cells[pos.to_index()];
            assert_eq!(layout.cell_at(cell.x, cell.y), Some(pos));
            assert_eq!(layout.cell_at(cell.right() - 1, cell.bottom() - 1), Some(pos));
        }
        assert_eq!(layout.cell_at(0, 0), None);
    }

    #[test]
    fn test_entry_hit_testing() {
        let layout = layout();
        let inner = history_inner(layout.history);
        assert_eq!(layout.entry_at(inner.x, inner.y, 0, 3), Some(0));
        assert_eq!(layout.entry_at(inner.x, inner.y + 2, 0, 3), Some(2));
        assert_eq!(layout.entry_at(inner.x, inner.y + 3, 0, 3), None);
        assert_eq!(layout.entry_at(layout.history.x, inner.y, 0, 3), None);
    }

    #[test]
    fn test_history_offset_keeps_selection_visible() {
        assert_eq!(history_offset(0, 5), 0);
        assert_eq!(history_offset(4, 5), 0);
        assert_eq!(history_offset(7, 5), 3);
        assert_eq!(history_offset(3, 0), 3);
    }

    /// Text on the middle row of `pos` after drawing `app`.
    fn rendered_cell(app: &App, pos: Position) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");
        let cell = layout().cells[pos.to_index()];
        let buffer = terminal.backend().buffer();
        (cell.x + 1..cell.right() - 1)
            .map(|x| buffer[(x, cell.y + 1)].symbol().to_string())
            .collect::<String>()
            .trim()
            .to_string()
    }

    #[test]
    fn test_hints_only_on_playable_cells() {
        let mut app = App::new(&TuiConfig::default());
        assert_eq!(rendered_cell(&app, Position::TopLeft), "1");
        assert_eq!(rendered_cell(&app, Position::Center), "5");

        // X takes the left column; remaining empty cells lose their numbers.
        for cell in [0, 1, 3, 2, 6] {
            app.dispatch(GameAction::Click(cell));
        }
        assert_eq!(rendered_cell(&app, Position::TopLeft), "X");
        assert_eq!(rendered_cell(&app, Position::Center), "");

        app.dispatch(GameAction::JumpTo(4));
        assert_eq!(rendered_cell(&app, Position::Center), "5");
    }
}

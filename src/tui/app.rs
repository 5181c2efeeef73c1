//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use timeline_tictactoe::{Game, GameAction, Position, TuiConfig};
use tracing::{debug, info};

use super::input::{digit_cell, move_cursor, move_selection};
use super::ui::ScreenLayout;

/// Which panel receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 grid.
    Board,
    /// The move list.
    History,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    history_selected: usize,
    show_position_hints: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            history_selected: 0,
            show_position_hints: *config.show_position_hints(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Board cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted row in the move list.
    pub fn history_selected(&self) -> usize {
        self.history_selected
    }

    /// Whether empty cells show their numbers.
    pub fn show_position_hints(&self) -> bool {
        self.show_position_hints
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sends an action to the game and resyncs the move-list highlight.
    pub fn dispatch(&mut self, action: GameAction) {
        self.game.dispatch(action);
        self.history_selected = self.game.history().cursor();
        debug!(?action, status = %self.game.status(), "Action dispatched");
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('r') => {
                info!("Resetting game");
                self.dispatch(GameAction::Reset);
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.history_selected = self.game.history().cursor();
            }
            KeyCode::Char(' ') => self.handle_focused_key(KeyCode::Enter),
            KeyCode::Char(c) => {
                if let Some(index) = digit_cell(c) {
                    self.cursor = Position::from_index(index).unwrap_or(self.cursor);
                    self.dispatch(GameAction::Click(index));
                }
            }
            code => self.handle_focused_key(code),
        }
    }

    fn handle_focused_key(&mut self, code: KeyCode) {
        match self.focus {
            Focus::Board => self.handle_board_key(code),
            Focus::History => self.handle_history_key(code),
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.dispatch(GameAction::Click(self.cursor.to_index())),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.dispatch(GameAction::JumpTo(self.history_selected)),
            code => {
                self.history_selected =
                    move_selection(self.history_selected, self.game.history().len(), code);
            }
        }
    }

    /// Handles a mouse event against the layout that was last drawn.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, layout: &ScreenLayout) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if let Some(pos) = layout.cell_at(mouse.column, mouse.row) {
            self.focus = Focus::Board;
            self.cursor = pos;
            self.dispatch(GameAction::Click(pos.to_index()));
        } else if let Some(step) = layout.entry_at(
            mouse.column,
            mouse.row,
            self.history_selected,
            self.game.history().len(),
        ) {
            self.focus = Focus::History;
            self.dispatch(GameAction::JumpTo(step));
        }
    }

    fn quit(&mut self) {
        info!("User quit");
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;
    use timeline_tictactoe::{Player, Square, Status};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(app: &mut App, layout: &ScreenLayout, column: u16, row: u16) {
        app.handle_mouse(
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
            layout,
        );
    }

    #[test]
    fn test_enter_plays_cursor_cell() {
        let mut app = App::new(&TuiConfig::default());
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.game().board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.game().board().get(Position::TopCenter),
            Square::Occupied(Player::O)
        );
    }

    #[test]
    fn test_digits_play_cells() {
        let mut app = App::new(&TuiConfig::default());
        for c in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.game().status(), Status::Winner(Player::X));
    }

    #[test]
    fn test_history_navigation_jumps() {
        let mut app = App::new(&TuiConfig::default());
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.history_selected(), 2);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game().history().cursor(), 0);
        assert_eq!(app.game().history().len(), 3);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = App::new(&TuiConfig::default());
        app.handle_key(KeyEvent {
            code: KeyCode::Char('5'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(app.game().history().len(), 1);
    }

    #[test]
    fn test_mouse_clicks_cells_and_history() {
        let mut app = App::new(&TuiConfig::default());
        let layout = ScreenLayout::new(Rect::new(0, 0, 100, 30));

        let top_left = layout.cells[0];
        click(&mut app, &layout, top_left.x + 1, top_left.y + 1);
        assert_eq!(
            app.game().board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );

        // First entry sits one row below the history border.
        click(&mut app, &layout, layout.history.x + 2, layout.history.y + 1);
        assert_eq!(app.game().history().cursor(), 0);
        assert_eq!(app.focus(), Focus::History);
    }

    #[test]
    fn test_quit_and_reset() {
        let mut app = App::new(&TuiConfig::default());
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game(), &Game::new());
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}

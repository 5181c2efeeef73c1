//! Game store: history plus the reducer that drives it.
//!
//! All input funnels through [`Game::reduce`], which takes the previous
//! state and returns the next. Illegal actions return the state unchanged.

use super::action::apply_move;
use super::history::{History, HistoryEntry};
use super::rules::{Status, calculate_status, calculate_turns, calculate_winner};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Something the presentation layer asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// A cell (0-8) was clicked.
    Click(usize),
    /// A history entry was clicked.
    JumpTo(usize),
    /// The reset control was clicked.
    Reset,
}

/// Error parsing a textual action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid action {:?}: expected a cell 0-8, `jump:N` or `reset`", input)]
pub struct ActionParseError {
    /// The rejected text.
    pub input: String,
}

impl FromStr for GameAction {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ActionParseError {
            input: s.to_string(),
        };

        if trimmed.eq_ignore_ascii_case("reset") {
            return Ok(GameAction::Reset);
        }

        if let Some(step) = trimmed.strip_prefix("jump:") {
            return step.parse().map(GameAction::JumpTo).map_err(|_| err());
        }

        trimmed.parse().map(GameAction::Click).map_err(|_| err())
    }
}

/// Complete game state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    history: History,
}

impl Game {
    /// Creates a new game.
    pub fn new() -> Self {
        Self {
            history: History::new(),
        }
    }

    /// Returns the history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The displayed board.
    pub fn board(&self) -> &Board {
        self.history.current()
    }

    /// The player whose mark the next click places.
    pub fn current_player(&self) -> Player {
        self.history.current_player()
    }

    /// Whether X moves next.
    pub fn x_is_next(&self) -> bool {
        self.history.x_is_next()
    }

    /// Status of the displayed board.
    pub fn status(&self) -> Status {
        let board = self.board();
        calculate_status(
            calculate_winner(board),
            calculate_turns(board),
            self.current_player(),
        )
    }

    /// Empty cells that still accept a mark; none once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(self.board())
        }
    }

    /// Applies `action`, returning the next state.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn reduce(mut self, action: GameAction) -> Self {
        match action {
            GameAction::Click(index) => {
                match apply_move(self.board(), index, self.current_player()) {
                    Ok(next) => self.history.play(next),
                    Err(reason) => debug!(%reason, "Click ignored"),
                }
            }
            GameAction::JumpTo(step) => {
                if let Err(reason) = self.history.jump_to(step) {
                    debug!(%reason, "Jump ignored");
                }
            }
            GameAction::Reset => self.history.reset(),
        }
        self
    }

    /// Applies `action` in place.
    pub fn dispatch(&mut self, action: GameAction) {
        *self = std::mem::take(self).reduce(action);
    }

    /// Everything the presentation layer reads, in one value.
    pub fn view(&self) -> GameView {
        GameView {
            board: *self.board(),
            status: self.status(),
            current_player: self.current_player(),
            cursor: self.history.cursor(),
            entries: self.history.entries(),
        }
    }
}

/// Read-only snapshot for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Displayed board.
    pub board: Board,
    /// Status of the displayed board.
    pub status: Status,
    /// Player to move.
    pub current_player: Player,
    /// History cursor.
    pub cursor: usize,
    /// Move list.
    pub entries: Vec<HistoryEntry>,
}

impl std::fmt::Display for GameView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board.display())?;
        writeln!(f)?;
        writeln!(f, "{}", self.status)?;
        writeln!(f)?;
        for entry in &self.entries {
            let marker = if entry.is_current { '>' } else { ' ' };
            writeln!(f, "{} {}. {}", marker, entry.step + 1, entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions() {
        assert_eq!("4".parse(), Ok(GameAction::Click(4)));
        assert_eq!(" jump:2 ".parse(), Ok(GameAction::JumpTo(2)));
        assert_eq!("RESET".parse(), Ok(GameAction::Reset));
        assert!("jump:x".parse::<GameAction>().is_err());
        assert!("undo".parse::<GameAction>().is_err());
    }

    #[test]
    fn test_click_places_current_player() {
        let game = Game::new().reduce(GameAction::Click(0));
        assert_eq!(game.board().squares()[0], super::super::Square::Occupied(Player::X));
        assert_eq!(game.current_player(), Player::O);
    }

    #[test]
    fn test_bad_jump_is_noop() {
        let game = Game::new().reduce(GameAction::Click(0));
        let same = game.clone().reduce(GameAction::JumpTo(7));
        assert_eq!(game, same);
    }

    #[test]
    fn test_valid_moves_follow_status() {
        let game = Game::new().reduce(GameAction::Click(4));
        let moves = game.valid_moves();
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Position::Center));

        // X wins the left column; nothing is playable afterwards.
        let won = [0, 1, 3, 2, 6]
            .into_iter()
            .fold(Game::new(), |game, cell| game.reduce(GameAction::Click(cell)));
        assert!(won.status().is_terminal());
        assert!(won.valid_moves().is_empty());
        assert_eq!(Position::valid_moves(won.board()).len(), 4);
    }

    #[test]
    fn test_dispatch_in_place() {
        let mut game = Game::new();
        game.dispatch(GameAction::Click(4));
        game.dispatch(GameAction::Reset);
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_view_text() {
        let view = Game::new().reduce(GameAction::Click(4)).view();
        let text = view.to_string();
        assert!(text.starts_with("1|2|3\n-+-+-\n4|X|6"));
        assert!(text.contains("Next player: O"));
        assert!(text.contains("> 2. Go to move #1"));
    }
}

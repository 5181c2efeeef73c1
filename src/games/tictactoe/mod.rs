//! Tic-tac-toe with a time-travel move history.

mod action;
mod game;
mod history;
mod position;
mod rules;
mod types;

pub use action::{MoveRejected, apply_move};
pub use game::{ActionParseError, Game, GameAction, GameView};
pub use history::{History, HistoryEntry, HistoryError, JumpError};
pub use position::Position;
pub use rules::{
    LINES, Status, calculate_status, calculate_turns, calculate_winner, is_full, winning_line,
};
pub use types::{Board, Player, Square};

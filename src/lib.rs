//! Tic-tac-toe with a time-travel move history.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over one board (winner, remaining turns, status)
//! - **History**: board snapshots plus a cursor, with branch overwrite
//! - **Game**: a reducer over [`GameAction`] and the [`GameView`] it renders from
//! - **Config**: optional TOML settings for the terminal client
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{Game, GameAction, Player, Status};
//!
//! let game = [0, 1, 4, 2, 8]
//!     .into_iter()
//!     .fold(Game::new(), |game, cell| game.reduce(GameAction::Click(cell)));
//!
//! assert_eq!(game.status(), Status::Winner(Player::X));
//! assert_eq!(game.status().to_string(), "Winner is X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, TuiConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    ActionParseError, Board, Game, GameAction, GameView, History, HistoryEntry, HistoryError,
    JumpError, LINES,
    MoveRejected, Player, Position, Square, Status, apply_move, calculate_status,
    calculate_turns, calculate_winner, is_full, winning_line,
};

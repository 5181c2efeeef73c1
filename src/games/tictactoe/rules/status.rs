//! Status line derived from a board.

use super::super::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the status line says about the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// Board is full and nobody has a line.
    #[display("Draw")]
    Draw,
    /// Someone completed a line.
    #[display("Winner is {}", _0)]
    Winner(Player),
    /// Game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// True when no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

/// Computes the status from a winner, the remaining turns and the player to move.
///
/// The draw branch only fires without a winner, so a full board that also
/// holds a line reports the winner.
#[instrument]
pub fn calculate_status(winner: Option<Player>, remaining_turns: usize, player: Player) -> Status {
    match winner {
        None if remaining_turns == 0 => Status::Draw,
        Some(winner) => Status::Winner(winner),
        None => Status::NextPlayer(player),
    }
}

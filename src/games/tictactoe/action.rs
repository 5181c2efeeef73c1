//! Move application: turning a clicked cell into the next board.
//!
//! Rejections are values, not failures. The store drops them and keeps
//! its state; they exist so the reason can be logged.

use super::rules::calculate_winner;
use super::{Board, Player, Position};
use tracing::instrument;

/// Why a cell click did not produce a new board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveRejected {
    /// The index does not name a cell.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The board already has a winner.
    #[display("Game is already over")]
    GameOver,
}

/// Places `player` at cell `index`, returning the resulting board.
///
/// The input board is left untouched; a legal move yields a fresh snapshot
/// differing in exactly one square.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, index: usize, player: Player) -> Result<Board, MoveRejected> {
    let pos = Position::from_index(index).ok_or(MoveRejected::OutOfBounds(index))?;

    if !board.is_empty(pos) {
        return Err(MoveRejected::SquareOccupied(pos));
    }

    if calculate_winner(board).is_some() {
        return Err(MoveRejected::GameOver);
    }

    Ok(board.with_mark(pos, player))
}

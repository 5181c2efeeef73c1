//! Remaining-turn and full-board checks for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Counts the empty squares left on the board.
#[instrument(skip(board))]
pub fn calculate_turns(board: &Board) -> usize {
    board
        .squares()
        .iter()
        .filter(|s| **s == Square::Empty)
        .count()
}

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    calculate_turns(board) == 0
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::super::win::calculate_winner;
    use super::*;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && calculate_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_has_nine_turns() {
        let board = Board::new();
        assert_eq!(calculate_turns(&board), 9);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert_eq!(calculate_turns(&board), 8);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert_eq!(calculate_turns(&board), 0);
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::O));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        board.set(Position::MiddleLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::X));
        board.set(Position::MiddleRight, Square::Occupied(Player::X));
        board.set(Position::BottomLeft, Square::Occupied(Player::O));
        board.set(Position::BottomCenter, Square::Occupied(Player::X));
        board.set(Position::BottomRight, Square::Occupied(Player::O));

        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        board.set(Position::MiddleLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));

        assert!(!is_draw(&board));
    }
}

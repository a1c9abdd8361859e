//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the board is drawn.
///
/// Only meaningful once [`check_winner`](super::check_winner) has come back
/// empty: a full board with a completed line is a win, not a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::super::win::check_winner;
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
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

        assert_eq!(check_winner(&board), None);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_a_win() {
        let mut board = Board::new();
        // X X X / O O X / X O O
        for (pos, player) in Position::ALL.into_iter().zip([
            Player::X,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
        ]) {
            board.set(pos, Square::Occupied(player));
        }

        assert!(is_full(&board));
        assert_eq!(check_winner(&board), Some(Player::X));
    }
}

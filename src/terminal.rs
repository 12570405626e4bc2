//! Detection of finished games

use crate::board::{Board, Piece};

/// Whether `piece` has four aligned tiles horizontally, vertically or diagonally
pub fn has_four_in_row(board: &Board, piece: Piece) -> bool {
    if piece.is_empty() {
        return false;
    }
    board
        .windows()
        .any(|window| window.iter().all(|&cell| cell == piece))
}

/// Whether the game is over, either by a win for one side or a full board
pub fn is_terminal(board: &Board) -> bool {
    has_four_in_row(board, Piece::Player)
        || has_four_in_row(board, Piece::Machine)
        || board.valid_moves().is_empty()
}

/// The side with four in a row, checking the machine first
pub fn winner(board: &Board) -> Option<Piece> {
    [Piece::Machine, Piece::Player]
        .iter()
        .copied()
        .find(|&piece| has_four_in_row(board, piece))
}

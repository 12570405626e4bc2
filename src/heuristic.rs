//! Static evaluation of non-terminal positions

use crate::{board::*, CENTER_COLUMN, HEIGHT};

pub use crate::board::Window;

/// Bonus for each of our tiles in the center column
const CENTER_WEIGHT: i32 = 3;

/// Scores a single window from the perspective of `piece`
///
/// Four of our own tiles is worth 100, three with a gap 5, two with two gaps 2,
/// and an opponent three with a gap costs 4. Any other window scores 0. The
/// tile counts of a 4-cell window can satisfy at most one of these rules.
pub fn score_window(window: &Window, piece: Piece) -> i32 {
    let opponent = piece.opponent();
    let own = window.iter().filter(|&&cell| cell == piece).count();
    let theirs = window.iter().filter(|&&cell| cell == opponent).count();
    let empty = window.iter().filter(|cell| cell.is_empty()).count();

    match (own, theirs, empty) {
        (4, _, _) => 100,
        (3, _, 1) => 5,
        (2, _, 2) => 2,
        (_, 3, 1) => -4,
        _ => 0,
    }
}

/// Scores a board from the perspective of `piece`
///
/// The sum of [`score_window`] over every window on the board, plus a bonus for
/// each of our tiles in the center column. The opponent's center tiles are not
/// subtracted.
pub fn score_position(board: &Board, piece: Piece) -> i32 {
    let center = (0..HEIGHT)
        .filter(|&row| board.get(row, CENTER_COLUMN) == piece)
        .count() as i32;

    board
        .windows()
        .map(|window| score_window(&window, piece))
        .sum::<i32>()
        + CENTER_WEIGHT * center
}

/// Greedily picks the column that gives `piece` the best immediate score
///
/// Columns are tried in ascending order and only a strictly better score
/// replaces the current choice. Returns `None` on a full board.
pub fn pick_best_move(board: &Board, piece: Piece) -> Option<usize> {
    let moves = board.valid_moves();
    let mut best_column = *moves.first()?;
    let mut best_score = -10_000;

    for column in moves {
        let mut next = *board;
        next.drop(next.next_open_row(column), column, piece);
        let score = score_position(&next, piece);
        if score > best_score {
            best_score = score;
            best_column = column;
        }
    }
    Some(best_column)
}

use anyhow::{anyhow, Result};

use crate::{terminal::has_four_in_row, HEIGHT, WIDTH, WINDOW_LENGTH};

/// The contents of a single board cell
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Piece {
    Empty,
    Player,
    Machine,
}

impl Piece {
    pub fn is_empty(&self) -> bool {
        matches!(self, Piece::Empty)
    }

    /// The piece of the other side, `Empty` has no opponent
    pub fn opponent(&self) -> Piece {
        match self {
            Piece::Player => Piece::Machine,
            Piece::Machine => Piece::Player,
            Piece::Empty => Piece::Empty,
        }
    }
}

/// A straight run of cells read from the board, used as a scoring unit
pub type Window = [Piece; WINDOW_LENGTH];

// (row step, column step) of the horizontal, vertical and both diagonal lines
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// A fixed 7x6 Connect 4 grid
///
/// Rows are indexed bottom-to-top, so row 0 is where a piece dropped into an
/// empty column lands. Boards are `Copy`: exploring a hypothetical move is
/// done on a copy and never disturbs the original.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Board {
    cells: [Piece; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Piece::Empty; WIDTH * HEIGHT],
        }
    }

    /// Builds a board from a string of 1-indexed columns
    ///
    /// Moves alternate between the player and the machine, starting with the player.
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut piece = Piece::Player;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    // abort if the position is already won
                    if has_four_in_row(&board, Piece::Player)
                        || has_four_in_row(&board, Piece::Machine)
                    {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    board.play_checked(column - 1, piece)?;
                    piece = piece.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Piece {
        self.cells[Self::index(row, column)]
    }

    fn index(row: usize, column: usize) -> usize {
        assert!(
            row < HEIGHT && column < WIDTH,
            "cell ({}, {}) is outside the board",
            row,
            column
        );
        column + WIDTH * row
    }

    /// Whether a piece can be dropped into `column`
    pub fn is_valid_move(&self, column: usize) -> bool {
        column < WIDTH && self.get(HEIGHT - 1, column).is_empty()
    }

    /// The lowest empty row of `column`
    ///
    /// # Panics
    /// If the column is full or out of range, check [`is_valid_move`] first.
    ///
    /// [`is_valid_move`]: #method.is_valid_move
    pub fn next_open_row(&self, column: usize) -> usize {
        assert!(column < WIDTH, "column {} out of range", column);
        (0..HEIGHT)
            .find(|&row| self.get(row, column).is_empty())
            .unwrap_or_else(|| panic!("column {} is full", column))
    }

    /// Places `piece` at (`row`, `column`)
    ///
    /// # Panics
    /// If `row` is not the next open row of `column`, as writing anywhere else
    /// would leave a gap below the piece.
    pub fn drop(&mut self, row: usize, column: usize, piece: Piece) {
        assert_eq!(
            row,
            self.next_open_row(column),
            "piece dropped into column {} at row {} would float",
            column,
            row
        );
        self.cells[Self::index(row, column)] = piece;
    }

    /// Drops `piece` into `column` after validating the move
    ///
    /// Returns the row the piece landed in.
    pub fn play_checked(&mut self, column: usize, piece: Piece) -> Result<usize> {
        if column >= WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column + 1,
                WIDTH
            ));
        }
        if !self.is_valid_move(column) {
            return Err(anyhow!("Invalid move, column {} full", column + 1));
        }
        let row = self.next_open_row(column);
        self.drop(row, column, piece);
        Ok(row)
    }

    /// Columns that can still be played, in ascending order
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&column| self.is_valid_move(column)).collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|&&cell| cell == piece).count()
    }

    /// The board reflected left-to-right
    pub fn mirror(&self) -> Self {
        let mut mirrored = Self::new();
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                mirrored.cells[Self::index(row, WIDTH - 1 - column)] = self.get(row, column);
            }
        }
        mirrored
    }

    /// Every window of the board along all four line directions
    pub fn windows(&self) -> impl Iterator<Item = Window> + '_ {
        DIRECTIONS.iter().flat_map(move |&(row_step, column_step)| {
            (0..HEIGHT).flat_map(move |row| {
                (0..WIDTH)
                    .filter_map(move |column| self.window(row, column, row_step, column_step))
            })
        })
    }

    /// The window starting at (`row`, `column`), if it fits on the board
    fn window(
        &self,
        row: usize,
        column: usize,
        row_step: isize,
        column_step: isize,
    ) -> Option<Window> {
        let span = WINDOW_LENGTH as isize - 1;
        let last_row = row as isize + row_step * span;
        let last_column = column as isize + column_step * span;
        if last_row < 0
            || last_row >= HEIGHT as isize
            || last_column < 0
            || last_column >= WIDTH as isize
        {
            return None;
        }

        let mut window = [Piece::Empty; WINDOW_LENGTH];
        for (i, cell) in window.iter_mut().enumerate() {
            let r = row as isize + row_step * i as isize;
            let c = column as isize + column_step * i as isize;
            *cell = self.get(r as usize, c as usize);
        }
        Some(window)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

//! A depth-limited agent for playing the board game 'Connect 4'
//!
//! This agent uses a minimax game tree search with alpha-beta pruning
//! and a positional heuristic to choose the machine's move.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{board::Board, search::{Searcher, SearchConfig}};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // moves alternate between the player and the machine, player first;
//! // the machine completes its column of four rather than blocking
//! let board = Board::from_moves("172737")?;
//! let mut searcher = Searcher::new(SearchConfig::default());
//! let result = searcher.best_move(&board);
//!
//! assert_eq!(result.column, Some(6));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod terminal;

pub mod heuristic;

pub mod search;

pub mod game;


pub use board::{Board, Piece};
pub use game::{Game, GameState, TurnReport};
pub use search::{SearchConfig, SearchResult, Searcher};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win, and the length of a scoring window
pub const WINDOW_LENGTH: usize = 4;

/// The column favoured by the heuristic
pub const CENTER_COLUMN: usize = WIDTH / 2;

// ensure that a window fits along every axis of the board
const_assert!(WIDTH >= WINDOW_LENGTH);
const_assert!(HEIGHT >= WINDOW_LENGTH);

//! An agent to choose the machine's move in Connect 4

use rayon::prelude::*;

use crate::{board::*, heuristic::score_position, terminal::*};

/// The value of a position won by the machine, larger than any heuristic score
pub const WIN_SCORE: i32 = 1_000_000;

/// The open bound of a search window
pub const INFINITY: i32 = i32::MAX;

/// The lookahead used by the machine unless configured otherwise, in plies
pub const DEFAULT_DEPTH: usize = 4;

/// The outcome of a search
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SearchResult {
    /// The chosen column, absent only when no move can be played
    pub column: Option<usize>,
    /// The backed-up value of the position, from the machine's perspective
    pub value: i32,
}

/// Settings for a [`Searcher`]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SearchConfig {
    /// Number of plies to look ahead
    pub depth: usize,
    /// Explore the root moves on the rayon thread pool
    pub parallel: bool,
    /// Log search progress to stdout
    pub verbose: bool,
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            parallel: false,
            verbose: false,
        }
    }
}

/// A depth-limited minimax agent
///
/// # Notes
/// The machine is always the maximizing side and the player the minimizing side.
/// Leaves are scored with [`score_position`] from the machine's perspective, and
/// decided games with `WIN_SCORE`, `-WIN_SCORE` or 0 for a draw.
///
/// Every explored move is played on a copy of the board, so sibling branches never
/// see each other's tiles and the caller's board is left untouched.
///
/// [`score_position`]: ../heuristic/fn.score_position.html
#[derive(Clone, Debug)]
pub struct Searcher {
    config: SearchConfig,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` with the given settings
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            node_count: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Chooses the machine's move with the configured depth
    pub fn best_move(&mut self, board: &Board) -> SearchResult {
        let start_count = self.node_count;
        let result = if self.config.parallel {
            self.search_parallel(board, self.config.depth)
        } else {
            self.search(board, self.config.depth, -INFINITY, INFINITY, true)
        };

        if self.config.verbose {
            println!(
                "Search depth: {}, best move: {}, value: {}, positions: {}",
                self.config.depth,
                result
                    .column
                    .map_or_else(|| "none".to_string(), |column| (column + 1).to_string()),
                result.value,
                self.node_count - start_count
            );
        }
        result
    }

    /// Performs game tree search with alpha-beta pruning
    ///
    /// Returns the best column for the side to move, which is the machine when
    /// `maximizing` is set, and the backed-up value of the position. The column is
    /// `None` at the depth limit and in finished games.
    pub fn search(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.node_count += 1;

        let moves = board.valid_moves();
        if depth == 0 || is_terminal(board) {
            return SearchResult {
                column: None,
                value: Self::evaluate(board),
            };
        }

        let piece = if maximizing {
            Piece::Machine
        } else {
            Piece::Player
        };
        // a non-terminal board always has a move
        let mut best_column = moves[0];
        let mut value = if maximizing { -INFINITY } else { INFINITY };

        for column in moves {
            let mut next = *board;
            next.drop(next.next_open_row(column), column, piece);
            let score = self.search(&next, depth - 1, alpha, beta, !maximizing).value;

            if maximizing {
                if score > value {
                    value = score;
                    best_column = column;
                }
                alpha = alpha.max(value);
            } else {
                if score < value {
                    value = score;
                    best_column = column;
                }
                beta = beta.min(value);
            }
            // the opponent will never allow this line, skip the remaining moves
            if alpha >= beta {
                break;
            }
        }

        SearchResult {
            column: Some(best_column),
            value,
        }
    }

    /// Performs exhaustive minimax without pruning
    ///
    /// Always agrees with [`search`] on the value of a position when `search` is
    /// started with an open window, at a much higher node count.
    ///
    /// [`search`]: #method.search
    pub fn minimax(&mut self, board: &Board, depth: usize, maximizing: bool) -> SearchResult {
        self.node_count += 1;

        let moves = board.valid_moves();
        if depth == 0 || is_terminal(board) {
            return SearchResult {
                column: None,
                value: Self::evaluate(board),
            };
        }

        let piece = if maximizing {
            Piece::Machine
        } else {
            Piece::Player
        };
        let mut best = SearchResult {
            column: Some(moves[0]),
            value: if maximizing { -INFINITY } else { INFINITY },
        };

        for column in moves {
            let mut next = *board;
            next.drop(next.next_open_row(column), column, piece);
            let score = self.minimax(&next, depth - 1, !maximizing).value;
            if (maximizing && score > best.value) || (!maximizing && score < best.value) {
                best = SearchResult {
                    column: Some(column),
                    value: score,
                };
            }
        }
        best
    }

    /// Searches each of the machine's moves concurrently with an open window
    ///
    /// The lowest column holding the best value is chosen, which is the same
    /// move and value the sequential search finds.
    pub fn search_parallel(&mut self, board: &Board, depth: usize) -> SearchResult {
        if depth == 0 || is_terminal(board) {
            self.node_count += 1;
            return SearchResult {
                column: None,
                value: Self::evaluate(board),
            };
        }

        let config = self.config;
        let children: Vec<(usize, i32, usize)> = board
            .valid_moves()
            .into_par_iter()
            .map(|column| {
                let mut next = *board;
                next.drop(next.next_open_row(column), column, Piece::Machine);
                let mut child = Searcher::new(config);
                let value = child.search(&next, depth - 1, -INFINITY, INFINITY, false).value;
                (column, value, child.node_count)
            })
            .collect();

        self.node_count += 1;
        let mut best = SearchResult {
            column: None,
            value: -INFINITY,
        };
        for (column, value, node_count) in children {
            self.node_count += node_count;
            if self.config.verbose {
                println!(
                    "Column {}: value {}, positions {}",
                    column + 1,
                    value,
                    node_count
                );
            }
            if best.column.is_none() || value > best.value {
                best = SearchResult {
                    column: Some(column),
                    value,
                };
            }
        }
        best
    }

    /// Scores a leaf of the search tree from the machine's perspective
    fn evaluate(board: &Board) -> i32 {
        if has_four_in_row(board, Piece::Machine) {
            WIN_SCORE
        } else if has_four_in_row(board, Piece::Player) {
            -WIN_SCORE
        } else if board.valid_moves().is_empty() {
            0
        } else {
            score_position(board, Piece::Machine)
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// Runs a single search with a fresh [`Searcher`]
pub fn search(board: &Board, depth: usize, alpha: i32, beta: i32, maximizing: bool) -> SearchResult {
    Searcher::default().search(board, depth, alpha, beta, maximizing)
}

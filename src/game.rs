//! A single game between a human player and the machine

use anyhow::{anyhow, Result};

use crate::{
    board::*,
    search::{SearchConfig, SearchResult, Searcher},
    terminal::has_four_in_row,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GameState {
    Playing,
    PlayerWin,
    MachineWin,
    Draw,
}

/// The result of a human move and the machine's reply
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TurnReport {
    pub player_wins: bool,
    /// The column the machine played, `None` if it did not move
    pub machine_move: Option<usize>,
    pub machine_wins: bool,
    pub state: GameState,
}

/// The authoritative board of one game, and the agent playing against it
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    searcher: Searcher,
    state: GameState,
    last_search: Option<SearchResult>,
    // 1-indexed columns in the order they were played
    moves: String,
}

impl Game {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            board: Board::new(),
            searcher: Searcher::new(config),
            state: GameState::Playing,
            last_search: None,
            moves: String::new(),
        }
    }

    /// Clears the board to start a new game
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.state = GameState::Playing;
        self.last_search = None;
        self.moves.clear();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// The search behind the machine's most recent move
    pub fn last_search(&self) -> Option<SearchResult> {
        self.last_search
    }

    /// The moves played so far as a string of 1-indexed columns
    pub fn moves(&self) -> &str {
        &self.moves
    }

    /// Plays the human move into `column`
    pub fn play_player(&mut self, column: usize) -> Result<GameState> {
        self.play(column, Piece::Player)?;
        Ok(self.state)
    }

    /// Lets the machine choose and play its move
    ///
    /// Returns `None` without touching the board when no move is available.
    pub fn play_machine(&mut self) -> Result<Option<usize>> {
        if self.state != GameState::Playing {
            return Err(anyhow!("Invalid move, the game is over"));
        }

        let result = self.searcher.best_move(&self.board);
        self.last_search = Some(result);
        match result.column {
            Some(column) => {
                self.play(column, Piece::Machine)?;
                Ok(Some(column))
            }
            None => Ok(None),
        }
    }

    /// Plays the human move into `column` followed by the machine's reply
    pub fn respond(&mut self, column: usize) -> Result<TurnReport> {
        let state = self.play_player(column)?;
        let machine_move = match state {
            GameState::Playing => self.play_machine()?,
            _ => None,
        };

        Ok(TurnReport {
            player_wins: state == GameState::PlayerWin,
            machine_move,
            machine_wins: self.state == GameState::MachineWin,
            state: self.state,
        })
    }

    fn play(&mut self, column: usize, piece: Piece) -> Result<()> {
        if self.state != GameState::Playing {
            return Err(anyhow!("Invalid move, the game is over"));
        }
        self.board.play_checked(column, piece)?;
        self.moves.push_str(&(column + 1).to_string());

        self.state = if has_four_in_row(&self.board, piece) {
            match piece {
                Piece::Machine => GameState::MachineWin,
                _ => GameState::PlayerWin,
            }
        } else if self.board.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        };
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

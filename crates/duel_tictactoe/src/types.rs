//! Core domain types for pairwise tic-tac-toe.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Board size used by the canonical 3x3 game.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Identifier of a user taking part in a game.
pub type UserId = String;

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Seat {
    /// The side that moves first.
    First,
    /// The side that moves second.
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Returns the piece this seat places.
    pub fn piece(self) -> Piece {
        match self {
            Seat::First => Piece::FirstPlayer,
            Seat::Second => Piece::SecondPlayer,
        }
    }

    /// Index into per-seat arrays.
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// The result reported when this seat completes a line.
    pub fn winning_result(self) -> GameResult {
        match self {
            Seat::First => GameResult::FirstPlayerWin,
            Seat::Second => GameResult::SecondPlayerWin,
        }
    }
}

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Piece {
    /// Piece of the first mover, rendered as `O`.
    FirstPlayer,
    /// Piece of the second mover, rendered as `X`.
    SecondPlayer,
    /// Empty cell.
    #[default]
    Blank,
}

impl Piece {
    /// Returns the seat owning this piece, or `None` for a blank cell.
    pub fn seat(self) -> Option<Seat> {
        match self {
            Piece::FirstPlayer => Some(Seat::First),
            Piece::SecondPlayer => Some(Seat::Second),
            Piece::Blank => None,
        }
    }

    /// Single-character symbol for text rendering.
    pub fn symbol(self) -> char {
        match self {
            Piece::FirstPlayer => 'O',
            Piece::SecondPlayer => 'X',
            Piece::Blank => '.',
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Outcome of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameResult {
    /// The first mover completed a line.
    #[display("first player wins")]
    FirstPlayerWin,
    /// The second mover completed a line.
    #[display("second player wins")]
    SecondPlayerWin,
    /// The board filled up without a completed line.
    #[display("tie")]
    Tie,
    /// No winner yet and the board still has blank cells.
    #[display("pending")]
    Pending,
}

impl GameResult {
    /// True for every result other than [`GameResult::Pending`].
    pub fn is_terminal(self) -> bool {
        self != GameResult::Pending
    }

    /// Returns the winning seat, if any.
    pub fn winner(self) -> Option<Seat> {
        match self {
            GameResult::FirstPlayerWin => Some(Seat::First),
            GameResult::SecondPlayerWin => Some(Seat::Second),
            GameResult::Tie | GameResult::Pending => None,
        }
    }
}

/// Lifecycle status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// A terminal result was produced; no further moves are accepted.
    Finished(GameResult),
}

impl GameStatus {
    /// True once a terminal result has been recorded.
    pub fn is_finished(self) -> bool {
        matches!(self, GameStatus::Finished(_))
    }

    /// The terminal result, if the game is over.
    pub fn result(self) -> Option<GameResult> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Finished(result) => Some(result),
        }
    }
}

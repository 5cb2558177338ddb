//! Move validation errors.

use super::types::{GameResult, UserId};

/// Error that can occur when validating or applying a move.
///
/// Every variant leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The mover is not the player whose turn it is.
    #[display("It's not player {mover}'s turn (waiting for {expected})")]
    WrongTurn {
        /// Who tried to move.
        mover: UserId,
        /// Who is due to move.
        expected: UserId,
    },

    /// Coordinates fall outside the board.
    #[display("Board position {x} {y} is out of range for a {size}x{size} board")]
    OutOfRange {
        /// Requested row.
        x: i64,
        /// Requested column.
        y: i64,
        /// Board side length.
        size: usize,
    },

    /// The target cell already holds a piece.
    #[display("Board position {x} {y} is not empty")]
    CellOccupied {
        /// Row of the occupied cell.
        x: usize,
        /// Column of the occupied cell.
        y: usize,
    },

    /// A terminal result was already produced.
    #[display("Game is already over ({result})")]
    GameAlreadyFinished {
        /// The result that ended the game.
        result: GameResult,
    },

    /// The user is not one of the two players.
    #[display("Player {user} is not part of this game")]
    NotAParticipant {
        /// The stranger.
        user: UserId,
    },

    /// Internal bookkeeping diverged from the board.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

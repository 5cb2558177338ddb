//! Pairwise tic-tac-toe engine.
//!
//! Tracks one game between two named users on an N x N board, validates
//! moves and decides after each placement whether the game is won, tied or
//! still pending.
//!
//! # Architecture
//!
//! - **Board**: fixed-size grid of [`Piece`]s
//! - **LineCounters**: per-seat row, column and diagonal tallies, giving
//!   constant-time win checks
//! - **GameState**: owns the board and both seats' counters, rotates turns
//!   and records the terminal result
//! - **Invariants**: bookkeeping properties checked against the board
//!
//! # Example
//!
//! ```
//! use duel_tictactoe::{GameResult, TicTacToe};
//!
//! let mut game = TicTacToe::start("alice", "bob");
//! assert_eq!(game.make_move("alice", 1, 1), Ok(GameResult::Pending));
//! assert_eq!(game.current_mover(), "bob");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod counters;
mod error;
mod game;
pub mod invariants;
mod rules;
mod snapshot;
mod types;

pub use board::Board;
pub use counters::{Diagonal, DiagonalMembership, LineCounters};
pub use error::MoveError;
pub use game::{GameState, TicTacToe};
pub use rules::scan_winner;
pub use snapshot::GameSnapshot;
pub use types::{DEFAULT_BOARD_SIZE, GameResult, GameStatus, Piece, Seat, UserId};

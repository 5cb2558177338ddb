//! Game state and move application.

use super::board::Board;
use super::counters::LineCounters;
use super::error::MoveError;
use super::invariants::{GameInvariants, InvariantSet};
use super::snapshot::GameSnapshot;
use super::types::{DEFAULT_BOARD_SIZE, GameResult, GameStatus, Piece, Seat, UserId};
use tracing::{debug, error, info, instrument, warn};

/// The canonical 3x3 game.
pub type TicTacToe = GameState<DEFAULT_BOARD_SIZE>;

/// One game between two named users on an N x N board.
///
/// Owns its board and both seats' line counters. Win detection only looks at
/// the counters for lines through the last placement, so each move costs O(1)
/// regardless of N.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState<const N: usize> {
    pub(crate) board: Board<N>,
    pub(crate) counters: [LineCounters<N>; 2],
    pub(crate) players: [UserId; 2],
    pub(crate) to_move: Seat,
    pub(crate) total_pieces: usize,
    pub(crate) status: GameStatus,
}

impl<const N: usize> GameState<N> {
    /// Starts a game on an empty board. `first` moves first.
    #[instrument(skip_all)]
    pub fn start(first: impl Into<UserId>, second: impl Into<UserId>) -> Self {
        let players = [first.into(), second.into()];
        info!(first = %players[0], second = %players[1], size = N, "Starting game");
        Self {
            board: Board::new(),
            counters: [LineCounters::new(), LineCounters::new()],
            players,
            to_move: Seat::First,
            total_pieces: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Places the current piece at `(x, y)` on behalf of `mover`.
    ///
    /// Rejects, in order: a finished game, a mover whose turn it isn't,
    /// coordinates off the board, and an occupied cell. A rejected move
    /// changes nothing. On success returns the result of the move; when it is
    /// terminal the game is marked finished, otherwise the turn passes.
    #[instrument(skip(self), fields(expected = %self.current_mover()))]
    pub fn make_move(&mut self, mover: &str, x: i64, y: i64) -> Result<GameResult, MoveError> {
        let (x, y) = self
            .validate(mover, x, y)
            .inspect_err(|e| warn!(error = %e, "Rejected move"))?;

        if cfg!(debug_assertions) {
            // Check the bookkeeping on a copy so a violation commits nothing
            let mut candidate = self.clone();
            let result = candidate.apply(x, y);
            candidate.verify()?;
            *self = candidate;
            return Ok(result);
        }

        Ok(self.apply(x, y))
    }

    /// Places the current piece at a validated `(x, y)` and settles the turn.
    fn apply(&mut self, x: usize, y: usize) -> GameResult {
        let seat = self.to_move;
        self.board.set(x, y, seat.piece());
        self.total_pieces += 1;
        self.counters[seat.index()].record(x, y);

        let result = self.evaluate(seat, x, y);
        if result.is_terminal() {
            self.status = GameStatus::Finished(result);
            info!(%result, total_pieces = self.total_pieces, "Game over");
        } else {
            self.to_move = seat.opponent();
            debug!(x, y, next = %self.current_mover(), "Move accepted");
        }
        result
    }

    /// Concedes the game on behalf of `user`; the other seat wins.
    #[instrument(skip(self))]
    pub fn forfeit(&mut self, user: &str) -> Result<GameResult, MoveError> {
        if let GameStatus::Finished(result) = self.status {
            return Err(MoveError::GameAlreadyFinished { result });
        }
        let seat = self.seat_of(user).ok_or_else(|| MoveError::NotAParticipant {
            user: user.to_string(),
        })?;
        let result = seat.opponent().winning_result();
        self.status = GameStatus::Finished(result);
        info!(%result, "Game forfeited");
        Ok(result)
    }

    fn validate(&self, mover: &str, x: i64, y: i64) -> Result<(usize, usize), MoveError> {
        if let GameStatus::Finished(result) = self.status {
            return Err(MoveError::GameAlreadyFinished { result });
        }

        if mover != self.current_mover() {
            return Err(MoveError::WrongTurn {
                mover: mover.to_string(),
                expected: self.current_mover().to_string(),
            });
        }

        let (x, y) = Board::<N>::locate(x, y).ok_or(MoveError::OutOfRange { x, y, size: N })?;

        if self.board.get(x, y) != Piece::Blank {
            return Err(MoveError::CellOccupied { x, y });
        }

        Ok((x, y))
    }

    /// Result of the placement `seat` just made at `(x, y)`.
    fn evaluate(&self, seat: Seat, x: usize, y: usize) -> GameResult {
        if self.counters[seat.index()].completes_line(x, y) {
            seat.winning_result()
        } else if self.total_pieces == Board::<N>::CELLS {
            GameResult::Tie
        } else {
            GameResult::Pending
        }
    }

    /// Checks the bookkeeping invariants against the board.
    pub fn verify(&self) -> Result<(), MoveError> {
        GameInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            error!(%descriptions, "Game invariants violated");
            MoveError::InvariantViolation(descriptions)
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    /// Seat whose turn it is. After a terminal move this stays on the seat
    /// that made it.
    pub fn to_move(&self) -> Seat {
        self.to_move
    }

    /// Piece the current mover places.
    pub fn current_piece(&self) -> Piece {
        self.to_move.piece()
    }

    /// User whose turn it is.
    pub fn current_mover(&self) -> &str {
        self.player(self.to_move)
    }

    /// User who moves after the current mover.
    pub fn next_mover(&self) -> &str {
        self.player(self.to_move.opponent())
    }

    /// User sitting in `seat`.
    pub fn player(&self, seat: Seat) -> &str {
        &self.players[seat.index()]
    }

    /// Seat of `user`, or `None` for a stranger.
    pub fn seat_of(&self, user: &str) -> Option<Seat> {
        if self.players[0] == user {
            Some(Seat::First)
        } else if self.players[1] == user {
            Some(Seat::Second)
        } else {
            None
        }
    }

    /// Pieces placed so far.
    pub fn total_pieces(&self) -> usize {
        self.total_pieces
    }

    /// Lifecycle status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once a terminal result has been produced.
    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Line counters of `seat`.
    pub fn counters(&self, seat: Seat) -> &LineCounters<N> {
        &self.counters[seat.index()]
    }

    /// Serializable view for rendering and relaying.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}

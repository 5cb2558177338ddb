//! Serializable view of a game for rendering and relaying.

use super::game::GameState;
use super::types::{GameStatus, Piece, UserId};
use serde::{Deserialize, Serialize};

/// Point-in-time copy of a game's visible state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board side length.
    pub size: usize,
    /// Board contents, `rows[x][y]`.
    pub rows: Vec<Vec<Piece>>,
    /// User in the first seat.
    pub first_player: UserId,
    /// User in the second seat.
    pub second_player: UserId,
    /// User whose turn it is.
    pub current_mover: UserId,
    /// Piece the current mover places.
    pub current_piece: Piece,
    /// Pieces placed so far.
    pub total_pieces: usize,
    /// Lifecycle status.
    pub status: GameStatus,
}

impl<const N: usize> From<&GameState<N>> for GameSnapshot {
    fn from(game: &GameState<N>) -> Self {
        Self {
            size: N,
            rows: game.board().rows().iter().map(|row| row.to_vec()).collect(),
            first_player: game.player(crate::Seat::First).to_string(),
            second_player: game.player(crate::Seat::Second).to_string(),
            current_mover: game.current_mover().to_string(),
            current_piece: game.current_piece(),
            total_pieces: game.total_pieces(),
            status: game.status(),
        }
    }
}

impl std::fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            let line = row
                .iter()
                .map(|piece| piece.symbol().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        match self.status {
            GameStatus::InProgress => write!(
                f,
                "{} ({}) to move",
                self.current_mover, self.current_piece
            ),
            GameStatus::Finished(result) => write!(f, "game over: {result}"),
        }
    }
}

//! Piece count invariant: the running total matches the board.

use super::Invariant;
use crate::{Board, GameState, Piece};

/// Invariant: `total_pieces` equals the number of non-blank cells and never
/// exceeds N².
pub struct PieceCountInvariant;

impl<const N: usize> Invariant<GameState<N>> for PieceCountInvariant {
    fn holds(game: &GameState<N>) -> bool {
        let placed = Board::<N>::CELLS - game.board().count(Piece::Blank);
        game.total_pieces() == placed && placed <= Board::<N>::CELLS
    }

    fn description() -> &'static str {
        "Piece total equals the number of occupied cells"
    }
}

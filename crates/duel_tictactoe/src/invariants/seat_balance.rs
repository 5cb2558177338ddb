//! Seat balance invariant: seats take turns placing pieces.

use super::Invariant;
use crate::{GameState, GameStatus, Seat};

/// Invariant: the first seat has placed as many pieces as the second, or one
/// more. While the game runs, the seat to move is the one that is behind
/// or level.
pub struct SeatBalanceInvariant;

impl<const N: usize> Invariant<GameState<N>> for SeatBalanceInvariant {
    fn holds(game: &GameState<N>) -> bool {
        let first = game.board().count(Seat::First.piece());
        let second = game.board().count(Seat::Second.piece());
        let balanced = first == second || first == second + 1;

        match game.status() {
            GameStatus::InProgress => {
                let expected = if first == second {
                    Seat::First
                } else {
                    Seat::Second
                };
                balanced && game.to_move() == expected
            }
            GameStatus::Finished(_) => balanced,
        }
    }

    fn description() -> &'static str {
        "Seats alternate (first seat has equal or one more piece)"
    }
}

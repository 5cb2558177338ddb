//! Counter consistency invariant: incremental tallies equal a recount.

use super::Invariant;
use crate::{GameState, LineCounters, Seat};
use strum::IntoEnumIterator;

/// Invariant: each seat's line counters equal a fresh tally of the board.
pub struct CountersMatchBoardInvariant;

impl<const N: usize> Invariant<GameState<N>> for CountersMatchBoardInvariant {
    fn holds(game: &GameState<N>) -> bool {
        Seat::iter().all(|seat| *game.counters(seat) == LineCounters::tally(game.board(), seat))
    }

    fn description() -> &'static str {
        "Line counters match the board"
    }
}

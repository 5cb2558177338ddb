//! Exhaustive win detection by scanning every line.

use super::super::{Board, Diagonal, Piece, Seat};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Scans all rows, columns and both diagonals for a seat owning a full line.
///
/// Runs in O(N^2). The engine never calls this on the move path; it backs the
/// invariant checks and serves as the reference the counters must agree with.
#[instrument(skip(board))]
pub fn scan_winner<const N: usize>(board: &Board<N>) -> Option<Seat> {
    if N == 0 {
        return None;
    }

    for i in 0..N {
        if let Some(seat) = line_owner((0..N).map(|y| board.get(i, y))) {
            return Some(seat);
        }
        if let Some(seat) = line_owner((0..N).map(|x| board.get(x, i))) {
            return Some(seat);
        }
    }

    Diagonal::iter().find_map(|diagonal| {
        line_owner((0..N).map(|x| match diagonal {
            Diagonal::Main => board.get(x, x),
            Diagonal::Anti => board.get(x, N - 1 - x),
        }))
    })
}

/// Seat holding every cell of the line, if any.
fn line_owner(mut cells: impl Iterator<Item = Piece>) -> Option<Seat> {
    let first = cells.next()?;
    let seat = first.seat()?;
    cells.all(|cell| cell == first).then_some(seat)
}

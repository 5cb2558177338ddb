//! Per-seat line tallies for constant-time win detection.
//!
//! Every placement bumps the row, column and diagonal counts of the seat that
//! placed it. Because cells never revert, a count reaching N means the seat
//! holds that whole line.

use super::board::Board;
use super::types::Seat;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// One of the two full-length diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Diagonal {
    /// Cells with `x == y`.
    Main,
    /// Cells with `x + y == N - 1`.
    Anti,
}

impl Diagonal {
    /// Index into the diagonal counters.
    pub fn index(self) -> usize {
        match self {
            Diagonal::Main => 0,
            Diagonal::Anti => 1,
        }
    }

    /// True if `(x, y)` lies on this diagonal of an N x N board.
    pub(crate) fn contains<const N: usize>(self, x: usize, y: usize) -> bool {
        match self {
            Diagonal::Main => x == y,
            Diagonal::Anti => x + y + 1 == N,
        }
    }
}

/// Which diagonals a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagonalMembership {
    /// Off both diagonals.
    Neither,
    /// Main diagonal only.
    Main,
    /// Anti-diagonal only.
    Anti,
    /// Centre cell of an odd board (or the only cell when N == 1).
    Both,
}

impl DiagonalMembership {
    /// Classifies `(x, y)` on an N x N board.
    ///
    /// The two tests are independent, so the centre of an odd board
    /// reports [`DiagonalMembership::Both`].
    pub fn classify<const N: usize>(x: usize, y: usize) -> Self {
        match (
            Diagonal::Main.contains::<N>(x, y),
            Diagonal::Anti.contains::<N>(x, y),
        ) {
            (false, false) => DiagonalMembership::Neither,
            (true, false) => DiagonalMembership::Main,
            (false, true) => DiagonalMembership::Anti,
            (true, true) => DiagonalMembership::Both,
        }
    }

    /// The diagonals in this membership.
    pub fn diagonals(self) -> &'static [Diagonal] {
        match self {
            DiagonalMembership::Neither => &[],
            DiagonalMembership::Main => &[Diagonal::Main],
            DiagonalMembership::Anti => &[Diagonal::Anti],
            DiagonalMembership::Both => &[Diagonal::Main, Diagonal::Anti],
        }
    }
}

/// Pieces one seat has placed in each row, column and diagonal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineCounters<const N: usize> {
    rows: [usize; N],
    columns: [usize; N],
    diagonals: [usize; 2],
}

impl<const N: usize> LineCounters<N> {
    /// All counts zero.
    pub fn new() -> Self {
        Self {
            rows: [0; N],
            columns: [0; N],
            diagonals: [0; 2],
        }
    }

    /// Recounts a seat's lines from scratch by scanning the board.
    pub fn tally(board: &Board<N>, seat: Seat) -> Self {
        let mut counters = Self::new();
        for (x, row) in board.rows().iter().enumerate() {
            for (y, &cell) in row.iter().enumerate() {
                if cell.seat() == Some(seat) {
                    counters.record(x, y);
                }
            }
        }
        counters
    }

    /// Records a piece placed at `(x, y)`. Coordinates must be in range.
    pub(crate) fn record(&mut self, x: usize, y: usize) {
        self.rows[x] += 1;
        self.columns[y] += 1;
        for diagonal in DiagonalMembership::classify::<N>(x, y).diagonals() {
            self.diagonals[diagonal.index()] += 1;
        }
    }

    /// True if any line through `(x, y)` is complete.
    ///
    /// Only lines through the last placement can newly complete, so checking
    /// those is enough after each move. Out-of-range coordinates panic.
    pub fn completes_line(&self, x: usize, y: usize) -> bool {
        self.rows[x] == N
            || self.columns[y] == N
            || DiagonalMembership::classify::<N>(x, y)
                .diagonals()
                .iter()
                .any(|diagonal| self.diagonals[diagonal.index()] == N)
    }

    /// Count in row `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= N`.
    pub fn row(&self, x: usize) -> usize {
        self.rows[x]
    }

    /// Count in column `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= N`.
    pub fn column(&self, y: usize) -> usize {
        self.columns[y]
    }

    /// Count on a diagonal.
    pub fn diagonal(&self, diagonal: Diagonal) -> usize {
        self.diagonals[diagonal.index()]
    }

    /// Total pieces recorded.
    pub fn total(&self) -> usize {
        self.rows.iter().sum()
    }
}

impl<const N: usize> Default for LineCounters<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_corners_and_edges() {
        assert_eq!(DiagonalMembership::classify::<3>(0, 0), DiagonalMembership::Main);
        assert_eq!(DiagonalMembership::classify::<3>(2, 2), DiagonalMembership::Main);
        assert_eq!(DiagonalMembership::classify::<3>(0, 2), DiagonalMembership::Anti);
        assert_eq!(DiagonalMembership::classify::<3>(2, 0), DiagonalMembership::Anti);
        assert_eq!(DiagonalMembership::classify::<3>(0, 1), DiagonalMembership::Neither);
    }

    #[test]
    fn test_centre_of_odd_board_is_on_both() {
        assert_eq!(DiagonalMembership::classify::<3>(1, 1), DiagonalMembership::Both);
        assert_eq!(DiagonalMembership::classify::<5>(2, 2), DiagonalMembership::Both);
        assert_eq!(DiagonalMembership::classify::<1>(0, 0), DiagonalMembership::Both);
    }

    #[test]
    fn test_even_board_has_no_shared_cell() {
        for x in 0..4 {
            for y in 0..4 {
                assert_ne!(DiagonalMembership::classify::<4>(x, y), DiagonalMembership::Both);
            }
        }
        // Inner cells of a 4x4 sit on one diagonal each
        assert_eq!(DiagonalMembership::classify::<4>(1, 1), DiagonalMembership::Main);
        assert_eq!(DiagonalMembership::classify::<4>(1, 2), DiagonalMembership::Anti);
    }

    #[test]
    fn test_record_centre_bumps_both_diagonals() {
        let mut counters = LineCounters::<3>::new();
        counters.record(1, 1);
        assert_eq!(counters.diagonal(Diagonal::Main), 1);
        assert_eq!(counters.diagonal(Diagonal::Anti), 1);
        assert_eq!(counters.row(1), 1);
        assert_eq!(counters.column(1), 1);
        assert_eq!(counters.total(), 1);
    }

    #[test]
    fn test_anti_diagonal_through_centre_completes() {
        let mut counters = LineCounters::<3>::new();
        counters.record(0, 2);
        counters.record(2, 0);
        assert!(!counters.completes_line(2, 0));
        counters.record(1, 1);
        assert!(counters.completes_line(1, 1));
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_range_panics() {
        LineCounters::<3>::new().row(3);
    }

    #[test]
    fn test_anti_diagonal_membership_off_board() {
        // (3, 0) is past the edge of a 3x3 board
        assert!(!Diagonal::Anti.contains::<3>(3, 0));
        assert!(Diagonal::Anti.contains::<3>(1, 1));
    }

    #[test]
    fn test_column_uses_y() {
        let mut counters = LineCounters::<3>::new();
        counters.record(0, 1);
        counters.record(1, 1);
        counters.record(2, 1);
        assert_eq!(counters.column(1), 3);
        assert!(counters.completes_line(2, 1));
        assert_eq!(counters.row(2), 1);
    }
}

//! Fixed-size N x N board.

use super::types::Piece;

/// Square grid of pieces, addressed as `(x, y)` where `x` selects the row
/// and `y` the column.
///
/// A cell only ever moves from [`Piece::Blank`] to a player piece; nothing
/// outside this crate can write to the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board<const N: usize> {
    cells: [[Piece; N]; N],
}

impl<const N: usize> Board<N> {
    /// Side length of the board.
    pub const SIZE: usize = N;

    /// Number of cells on the board.
    pub const CELLS: usize = N * N;

    /// Creates a board with every cell blank.
    pub fn new() -> Self {
        Self {
            cells: [[Piece::Blank; N]; N],
        }
    }

    /// Converts signed coordinates to cell indices, or `None` when either
    /// falls outside `[0, N)`.
    pub fn locate(x: i64, y: i64) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok().filter(|&x| x < N)?;
        let y = usize::try_from(y).ok().filter(|&y| y < N)?;
        Some((x, y))
    }

    /// Returns the piece at `(x, y)`.
    ///
    /// Coordinates are not validated; out-of-range indices panic. Callers
    /// validate through [`Board::locate`] first.
    pub fn get(&self, x: usize, y: usize) -> Piece {
        self.cells[x][y]
    }

    /// Returns the piece at `(x, y)`, or `None` if out of range.
    pub fn checked_get(&self, x: usize, y: usize) -> Option<Piece> {
        self.cells.get(x)?.get(y).copied()
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, piece: Piece) {
        self.cells[x][y] = piece;
    }

    /// Rows of the board, `rows()[x][y]`.
    pub fn rows(&self) -> &[[Piece; N]; N] {
        &self.cells
    }

    /// Number of cells holding `piece`.
    pub fn count(&self, piece: Piece) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == piece)
            .count()
    }

    /// True when no blank cell remains.
    pub fn is_full(&self) -> bool {
        self.count(Piece::Blank) == 0
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> std::fmt::Display for Board<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (x, row) in self.cells.iter().enumerate() {
            if x > 0 {
                writeln!(f)?;
            }
            for (y, cell) in row.iter().enumerate() {
                if y > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

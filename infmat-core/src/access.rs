//! Coordinate handle returned by [`Matrix::access`]

use crate::traits::MatrixElement;
use crate::{Coord, Matrix, Result, Triple};

/// Read/write handle on one `(row, column)` position
///
/// Holding an `Access` does not create storage. [`read`](Self::read) is
/// side-effect free; [`assign`](Self::assign) is the only mutation and
/// follows the entry assignment contract: non-default values are stored,
/// the default value removes whatever is stored.
#[derive(Debug)]
pub struct Access<'a, T> {
    matrix: &'a mut Matrix<T>,
    row: Coord,
    column: Coord,
}

impl<'a, T: MatrixElement> Access<'a, T> {
    pub(crate) fn new(matrix: &'a mut Matrix<T>, row: Coord, column: Coord) -> Self {
        Self {
            matrix,
            row,
            column,
        }
    }

    #[inline]
    pub fn row(&self) -> Coord {
        self.row
    }

    #[inline]
    pub fn column(&self) -> Coord {
        self.column
    }

    /// Current value, or the matrix default if nothing is stored
    pub fn read(&self) -> T {
        self.matrix.get(self.row, self.column)
    }

    /// Whether an entry is stored at this position
    pub fn is_stored(&self) -> bool {
        self.matrix.contains(self.row, self.column)
    }

    /// Position and current value together
    pub fn triple(&self) -> Triple<T> {
        Triple::new(self.row, self.column, self.read())
    }

    /// Store `value` at this position; the default value removes the entry
    pub fn assign(&mut self, value: T) -> Result<()> {
        self.matrix.set(self.row, self.column, value)
    }
}

impl<T: MatrixElement> PartialEq<T> for Access<'_, T> {
    fn eq(&self, other: &T) -> bool {
        self.read() == *other
    }
}

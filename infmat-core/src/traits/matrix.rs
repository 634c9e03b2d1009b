//! Read-only matrix abstraction
//!
//! Everything outside the storage engine (rendering, reporting, tests)
//! only needs to read values, count entries and walk the stored triples.

use super::element::MatrixElement;
use crate::{Coord, Result, Triple};

/// Format-agnostic read access to an unbounded sparse matrix
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Iterator over stored triples in row-major order
    type Triples<'a>: Iterator<Item = Triple<Self::Element>>
    where
        Self: 'a;

    /// The value that stands for "no entry"
    fn default_value(&self) -> Self::Element;

    /// Get the value at the specified position
    ///
    /// Returns the default value when nothing is stored there. Never
    /// mutates the matrix.
    fn get(&self, row: Coord, column: Coord) -> Self::Element;

    /// Get number of stored (non-default) entries
    fn nnz(&self) -> usize;

    /// Walk all stored entries, ascending by row then column
    fn triples(&self) -> Self::Triples<'_>;

    /// Highest stored row index, `None` when nothing is stored
    fn last_row(&self) -> Option<Coord>;

    /// Highest stored column index over all rows, `None` when nothing is
    /// stored
    fn max_column(&self) -> Result<Option<Coord>>;
}

//! The public sparse container
//!
//! A [`Matrix`] owns an ascending, duplicate-free list of [`Row`]s, each of
//! which owns an ascending, duplicate-free list of entries. Between any two
//! public calls:
//!
//! - no row is empty and no entry holds the default value
//! - `size()` equals the number of entries across all rows
//!
//! Reads never create anything. Writes create rows and entries on demand
//! and compact them away again when the default value is assigned.

use alloc::vec::Vec;
use core::ops::Index;

use tracing::trace;

use crate::access::Access;
use crate::cursor::Cursor;
use crate::entry::{Assignment, Entry};
use crate::row::{Row, RowState};
use crate::traits::{MatrixElement, SparseMatrix};
use crate::{Coord, Result, Triple};

/// Unbounded two-dimensional sparse matrix
///
/// Every integer coordinate pair is valid. Only coordinates whose value
/// differs from the matrix's default consume storage.
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    rows: Vec<Row<T>>,
    default: T,
    len: usize,
}

impl<T: MatrixElement> Matrix<T> {
    /// Create an empty matrix where `default` stands for "no entry"
    pub const fn new(default: T) -> Self {
        Self {
            rows: Vec::new(),
            default,
            len: 0,
        }
    }

    /// Build a matrix by assigning each triple in order
    ///
    /// Later triples overwrite earlier ones at the same position, and
    /// triples carrying the default value compact away like any other
    /// assignment.
    pub fn from_triples<I, E>(default: T, triples: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Triple<T>>,
    {
        let mut matrix = Self::new(default);
        matrix.try_extend(triples)?;
        Ok(matrix)
    }

    /// Assign every triple in order, stopping at the first failure
    pub fn try_extend<I, E>(&mut self, triples: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<Triple<T>>,
    {
        for triple in triples {
            let Triple { row, column, value } = triple.into();
            self.set(row, column, value)?;
        }
        Ok(())
    }

    /// The value that stands for "no entry"
    #[inline]
    pub fn default_value(&self) -> T {
        self.default
    }

    /// Number of stored entries
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of rows holding at least one entry
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Read/write handle on one coordinate
    ///
    /// Creating the handle does not touch storage; only
    /// [`Access::assign`] does.
    pub fn access(&mut self, row: Coord, column: Coord) -> Access<'_, T> {
        Access::new(self, row, column)
    }

    /// Value at `(row, column)`, or the default if nothing is stored there
    pub fn get(&self, row: Coord, column: Coord) -> T {
        self.entry(row, column).map_or(self.default, Entry::read)
    }

    /// Whether an entry is stored at `(row, column)`
    pub fn contains(&self, row: Coord, column: Coord) -> bool {
        self.entry(row, column).is_some()
    }

    /// Stored row with the given index
    pub fn row(&self, index: Coord) -> Option<&Row<T>> {
        self.row_position(index).ok().map(|pos| &self.rows[pos])
    }

    /// All stored rows, ascending by index
    pub fn rows(&self) -> core::slice::Iter<'_, Row<T>> {
        self.rows.iter()
    }

    /// Lowest stored row index
    pub fn first_row(&self) -> Option<Coord> {
        self.rows.first().map(Row::index)
    }

    /// Highest stored row index
    pub fn last_row(&self) -> Option<Coord> {
        self.rows.last().map(Row::index)
    }

    /// Highest stored column index across all rows, `None` when empty
    pub fn max_column(&self) -> Result<Option<Coord>> {
        let mut max: Option<Coord> = None;
        for row in &self.rows {
            let column = row.max_column()?;
            max = Some(max.map_or(column, |m| m.max(column)));
        }
        Ok(max)
    }

    /// Write `value` at `(row, column)`
    ///
    /// Writing the default removes the entry (and its row, if it was the
    /// last one there); writing the default where nothing is stored is a
    /// no-op. Only storage reservation can fail.
    pub fn set(&mut self, row: Coord, column: Coord, value: T) -> Result<()> {
        let default = self.default;

        if let Ok(row_pos) = self.row_position(row) {
            if let Some(entry) = self.rows[row_pos].get_mut(column) {
                if entry.assign(value, &default) == Assignment::Vacated {
                    self.erase(row_pos, column);
                }
                return Ok(());
            }
        }

        if value.is_default(&default) {
            return Ok(());
        }

        let (row_pos, new_row) = self.locate_or_create_row(row)?;
        match self.rows[row_pos].locate_or_create(column, default) {
            Ok((entry, _)) => {
                let stored = entry.assign(value, &default);
                debug_assert_eq!(stored, Assignment::Stored);
            }
            Err(err) => {
                if new_row {
                    self.rows.remove(row_pos);
                }
                return Err(err);
            }
        }
        self.len += 1;
        Ok(())
    }

    /// Remove the entry at `(row, column)` and return its value
    pub fn take(&mut self, row: Coord, column: Coord) -> Option<T> {
        let row_pos = self.row_position(row).ok()?;
        self.erase(row_pos, column)
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.rows.clear();
        self.len = 0;
    }

    /// Cursor on the first stored entry
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::begin(&self.rows, self.len)
    }

    /// Cursor in the end state
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::end(&self.rows)
    }

    /// Iterate stored triples in row-major order
    pub fn iter(&self) -> Cursor<'_, T> {
        self.begin()
    }

    fn entry(&self, row: Coord, column: Coord) -> Option<&Entry<T>> {
        self.row(row)?.get(column)
    }

    fn row_position(&self, index: Coord) -> core::result::Result<usize, usize> {
        self.rows.binary_search_by_key(&index, Row::index)
    }

    fn locate_or_create_row(&mut self, index: Coord) -> Result<(usize, bool)> {
        match self.row_position(index) {
            Ok(pos) => Ok((pos, false)),
            Err(pos) => {
                self.rows.try_reserve(1)?;
                self.rows.insert(pos, Row::new(index));
                trace!(row = index, "materialized row");
                Ok((pos, true))
            }
        }
    }

    /// Remove one entry from the row at `row_pos`, dropping the row if it
    /// was the last entry
    fn erase(&mut self, row_pos: usize, column: Coord) -> Option<T> {
        let (value, state) = self.rows[row_pos].remove(column)?;
        self.len -= 1;
        trace!(row = self.rows[row_pos].index(), column, "compacted entry");
        if state == RowState::Emptied {
            let row = self.rows.remove(row_pos);
            trace!(row = row.index(), "dropped empty row");
        }
        Some(value)
    }
}

impl<T: MatrixElement + Default> Default for Matrix<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Matrices are equal when they share a default and store the same triples
impl<T: MatrixElement> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.default == other.default && self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: MatrixElement> Index<(Coord, Coord)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, column): (Coord, Coord)) -> &T {
        self.entry(row, column)
            .map_or(&self.default, Entry::value_ref)
    }
}

impl<'a, T: MatrixElement> IntoIterator for &'a Matrix<T> {
    type Item = Triple<T>;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}

impl<T: MatrixElement> SparseMatrix for Matrix<T> {
    type Element = T;
    type Triples<'a>
        = Cursor<'a, T>
    where
        Self: 'a;

    fn default_value(&self) -> T {
        self.default
    }

    fn get(&self, row: Coord, column: Coord) -> T {
        Matrix::get(self, row, column)
    }

    fn nnz(&self) -> usize {
        self.len
    }

    fn triples(&self) -> Cursor<'_, T> {
        self.begin()
    }

    fn last_row(&self) -> Option<Coord> {
        Matrix::last_row(self)
    }

    fn max_column(&self) -> Result<Option<Coord>> {
        Matrix::max_column(self)
    }
}

#[cfg(feature = "serde")]
impl<T: MatrixElement + serde::Serialize> serde::Serialize for Matrix<T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatrixError;

    #[test]
    fn test_read_does_not_materialize() {
        let mut matrix = Matrix::new(-1);
        assert_eq!(matrix.size(), 0);
        assert_eq!(matrix.access(0, 0).read(), -1);
        assert!(matrix.access(0, 0) == -1);
        assert_eq!(matrix.get(7, -7), -1);
        assert_eq!(matrix[(3, 3)], -1);
        assert_eq!(matrix.size(), 0);
        assert_eq!(matrix.row_count(), 0);
    }

    #[test]
    fn test_write_then_read() {
        let mut matrix = Matrix::new(-1);
        matrix.access(100, 100).assign(314).unwrap();
        assert!(matrix.access(100, 100) == 314);
        assert_eq!(matrix.size(), 1);
        assert_eq!(matrix.row_count(), 1);

        // Overwriting keeps the count
        matrix.set(100, 100, 42).unwrap();
        assert_eq!(matrix[(100, 100)], 42);
        assert_eq!(matrix.size(), 1);
    }

    #[test]
    fn test_default_assignment_cascades_row_removal() {
        let mut matrix = Matrix::new(0);
        matrix.set(5, 1, 10).unwrap();
        matrix.set(5, 2, 20).unwrap();
        matrix.set(6, 1, 30).unwrap();

        matrix.set(5, 1, 0).unwrap();
        assert_eq!(matrix.size(), 2);
        assert!(matrix.row(5).is_some());

        matrix.set(5, 2, 0).unwrap();
        assert_eq!(matrix.size(), 1);
        assert!(matrix.row(5).is_none());
        assert_eq!(matrix.first_row(), Some(6));
    }

    #[test]
    fn test_default_assignment_on_absent_is_noop() {
        let mut matrix = Matrix::new(0);
        matrix.set(1, 1, 0).unwrap();
        assert_eq!(matrix.size(), 0);
        assert_eq!(matrix.row_count(), 0);

        matrix.set(1, 2, 5).unwrap();
        matrix.set(1, 1, 0).unwrap();
        assert_eq!(matrix.size(), 1);
        assert_eq!(matrix.row(1).map(Row::size), Some(1));
    }

    #[test]
    fn test_negative_and_extreme_coordinates() {
        let mut matrix = Matrix::new(0i64);
        matrix.set(Coord::MIN, Coord::MAX, 1).unwrap();
        matrix.set(Coord::MAX, Coord::MIN, 2).unwrap();
        matrix.set(-4, -4, 3).unwrap();

        let triples: Vec<_> = matrix.iter().map(Triple::into_tuple).collect();
        assert_eq!(
            triples,
            vec![
                (Coord::MIN, Coord::MAX, 1),
                (-4, -4, 3),
                (Coord::MAX, Coord::MIN, 2),
            ]
        );
    }

    #[test]
    fn test_take_and_clear() {
        let mut matrix = Matrix::new(0);
        matrix.set(0, 0, 1).unwrap();
        matrix.set(0, 1, 2).unwrap();

        assert_eq!(matrix.take(0, 0), Some(1));
        assert_eq!(matrix.take(0, 0), None);
        assert_eq!(matrix.take(9, 9), None);
        assert_eq!(matrix.size(), 1);

        matrix.clear();
        assert!(matrix.is_empty());
        assert_eq!(matrix.begin(), matrix.end());
    }

    #[test]
    fn test_max_column_and_row_extent() {
        let mut matrix = Matrix::new(0);
        assert_eq!(matrix.max_column(), Ok(None));
        assert_eq!(matrix.last_row(), None);

        matrix.set(3, 8, 1).unwrap();
        matrix.set(-2, 11, 1).unwrap();
        matrix.set(7, 0, 1).unwrap();
        assert_eq!(matrix.max_column(), Ok(Some(11)));
        assert_eq!(matrix.first_row(), Some(-2));
        assert_eq!(matrix.last_row(), Some(7));
    }

    #[test]
    fn test_max_column_guards_empty_row() {
        let mut matrix: Matrix<i32> = Matrix::new(0);
        matrix.rows.push(Row::new(0));
        assert_eq!(matrix.max_column(), Err(MatrixError::EmptyRow));
    }

    #[test]
    fn test_from_triples_and_equality() {
        let a = Matrix::from_triples(
            0,
            [
                Triple::new(1, 1, 5),
                Triple::new(0, 2, 3),
                Triple::new(1, 1, 6),
                Triple::new(4, 4, 0),
            ],
        )
        .unwrap();
        assert_eq!(a.size(), 2);
        assert_eq!(a.get(1, 1), 6);

        let mut b = Matrix::new(0);
        b.set(0, 2, 3).unwrap();
        b.set(1, 1, 6).unwrap();
        assert_eq!(a, b);

        b.set(1, 1, 7).unwrap();
        assert_ne!(a, b);
        assert_ne!(Matrix::<i32>::new(0), Matrix::new(1));
    }

    #[test]
    fn test_access_triple() {
        let mut matrix = Matrix::new(0);
        matrix.set(2, 3, 9).unwrap();
        let access = matrix.access(2, 3);
        assert!(access.is_stored());
        assert_eq!(access.triple(), Triple::new(2, 3, 9));

        let access = matrix.access(2, 4);
        assert!(!access.is_stored());
        assert_eq!(access.triple().into_tuple(), (2, 4, 0));
    }
}

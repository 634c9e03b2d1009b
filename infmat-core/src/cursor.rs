//! Row-major traversal over stored entries
//!
//! The [`Cursor`] flattens the row list and each row's entry list into a
//! single position `(row_position, entry_position)`. It is a plain state
//! machine rather than a composition of nested iterators:
//!
//! - *mid*: `row_position` and `entry_position` both point at an entry
//! - *row boundary*: `entry_position` ran off the current row; the cursor
//!   immediately moves on to the first entry of the next row
//! - *end*: `row_position` is past the last row
//!
//! A cursor borrows the matrix immutably, so the matrix cannot change
//! structurally while one is alive.

use core::fmt;
use core::iter::FusedIterator;

use crate::row::Row;
use crate::traits::MatrixElement;
use crate::Triple;

/// Forward-only iterator over `(row, column, value)` triples in ascending
/// row-major order
pub struct Cursor<'a, T> {
    rows: &'a [Row<T>],
    row_position: usize,
    entry_position: usize,
    remaining: usize,
}

impl<'a, T: MatrixElement> Cursor<'a, T> {
    /// Cursor on the first entry of the first row, or at the end if there
    /// are no rows
    ///
    /// `len` must be the total entry count across `rows`.
    pub(crate) fn begin(rows: &'a [Row<T>], len: usize) -> Self {
        Self {
            rows,
            row_position: 0,
            entry_position: 0,
            remaining: len,
        }
    }

    /// Cursor already in the end state
    pub(crate) fn end(rows: &'a [Row<T>]) -> Self {
        Self {
            rows,
            row_position: rows.len(),
            entry_position: 0,
            remaining: 0,
        }
    }

    /// Whether the traversal is exhausted
    #[inline]
    pub fn is_end(&self) -> bool {
        self.row_position >= self.rows.len()
    }

    /// The triple under the cursor without moving it
    pub fn peek(&self) -> Option<Triple<T>> {
        let row = self.rows.get(self.row_position)?;
        let entry = row.entries().get(self.entry_position)?;
        Some(Triple::new(row.index(), entry.column(), entry.read()))
    }

    /// Step to the next entry, crossing into the next row at a boundary
    fn advance(&mut self) {
        if self.is_end() {
            return;
        }
        self.entry_position += 1;
        if self.entry_position >= self.rows[self.row_position].size() {
            self.row_position += 1;
            self.entry_position = 0;
        }
        self.remaining = self.remaining.saturating_sub(1);
    }
}

impl<T: MatrixElement> Iterator for Cursor<'_, T> {
    type Item = Triple<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let triple = self.peek()?;
        self.advance();
        Some(triple)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: MatrixElement> ExactSizeIterator for Cursor<'_, T> {}

impl<T: MatrixElement> FusedIterator for Cursor<'_, T> {}

/// Cursors are equal when they sit on the same position of the same
/// matrix. Every exhausted cursor equals every other exhausted cursor.
impl<T: MatrixElement> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_end(), other.is_end()) {
            (true, true) => true,
            (false, false) => {
                core::ptr::eq(self.rows.as_ptr(), other.rows.as_ptr())
                    && self.row_position == other.row_position
                    && self.entry_position == other.entry_position
            }
            _ => false,
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows,
            row_position: self.row_position,
            entry_position: self.entry_position,
            remaining: self.remaining,
        }
    }
}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("row_position", &self.row_position)
            .field("entry_position", &self.entry_position)
            .field("remaining", &self.remaining)
            .finish()
    }
}

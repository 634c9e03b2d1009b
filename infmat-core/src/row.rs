//! One matrix row: entries sharing a row index, ordered by column

use alloc::vec::Vec;

use crate::entry::Entry;
use crate::traits::MatrixElement;
use crate::{Coord, MatrixError, Result};

/// State of a row after one of its entries has been removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub(crate) enum RowState {
    /// The row still holds at least one entry
    Live,
    /// The last entry is gone; the owning matrix must drop the row
    Emptied,
}

/// Ordered, duplicate-free collection of [`Entry`] values sharing one row
/// index
///
/// Rows are created and destroyed by their [`Matrix`](crate::Matrix). A row
/// reachable through the public API always holds at least one entry.
#[derive(Debug, Clone)]
pub struct Row<T> {
    index: Coord,
    entries: Vec<Entry<T>>,
}

impl<T: MatrixElement> Row<T> {
    pub(crate) const fn new(index: Coord) -> Self {
        Self {
            index,
            entries: Vec::new(),
        }
    }

    /// Row index shared by every entry
    #[inline]
    pub fn index(&self) -> Coord {
        self.index
    }

    /// Number of entries in this row
    #[inline]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Column of the highest-index entry
    ///
    /// Fails with [`MatrixError::EmptyRow`] if the row has no entries.
    pub fn max_column(&self) -> Result<Coord> {
        self.entries
            .last()
            .map(Entry::column)
            .ok_or(MatrixError::EmptyRow)
    }

    /// Entry stored at `column`, if any
    pub fn get(&self, column: Coord) -> Option<&Entry<T>> {
        self.position(column).ok().map(|pos| &self.entries[pos])
    }

    /// All entries, ascending by column
    #[inline]
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    fn position(&self, column: Coord) -> core::result::Result<usize, usize> {
        self.entries.binary_search_by_key(&column, Entry::column)
    }

    pub(crate) fn get_mut(&mut self, column: Coord) -> Option<&mut Entry<T>> {
        match self.position(column) {
            Ok(pos) => Some(&mut self.entries[pos]),
            Err(_) => None,
        }
    }

    /// Find the entry at `column`, inserting one holding `default` at its
    /// sorted position if there is none
    ///
    /// Returns the entry and whether it was just created. The caller is
    /// responsible for assigning a non-default value to a fresh entry or
    /// removing it again before returning control to users.
    pub(crate) fn locate_or_create(
        &mut self,
        column: Coord,
        default: T,
    ) -> Result<(&mut Entry<T>, bool)> {
        match self.position(column) {
            Ok(pos) => Ok((&mut self.entries[pos], false)),
            Err(pos) => {
                self.entries.try_reserve(1)?;
                self.entries.insert(pos, Entry::new(column, default));
                Ok((&mut self.entries[pos], true))
            }
        }
    }

    /// Erase the entry at `column`, returning its value and whether the row
    /// has been left empty
    pub(crate) fn remove(&mut self, column: Coord) -> Option<(T, RowState)> {
        let pos = self.position(column).ok()?;
        let entry = self.entries.remove(pos);
        let state = if self.entries.is_empty() {
            RowState::Emptied
        } else {
            RowState::Live
        };
        Some((entry.read(), state))
    }
}

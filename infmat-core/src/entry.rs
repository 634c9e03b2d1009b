//! Single stored cell of a matrix row

use crate::traits::MatrixElement;
use crate::Coord;

/// Outcome of assigning a value to an [`Entry`]
///
/// An entry cannot remove itself from its row. Instead it reports that it
/// has been vacated and the owning row erases it by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Assignment {
    /// The new value was stored in place
    Stored,
    /// The default value was assigned; the entry must be removed
    Vacated,
}

/// A stored `(column, value)` cell, owned by exactly one [`Row`](crate::Row)
#[derive(Debug, Clone)]
pub struct Entry<T> {
    column: Coord,
    value: T,
}

impl<T: MatrixElement> Entry<T> {
    pub(crate) const fn new(column: Coord, value: T) -> Self {
        Self { column, value }
    }

    /// Column index of this entry
    #[inline]
    pub fn column(&self) -> Coord {
        self.column
    }

    /// Stored value; no side effects
    #[inline]
    pub fn read(&self) -> T {
        self.value
    }

    #[inline]
    pub(crate) fn value_ref(&self) -> &T {
        &self.value
    }

    /// Store `value`, or report that the entry is vacated if `value` is the
    /// matrix default. A vacated entry keeps its previous value until the
    /// owner erases it.
    pub fn assign(&mut self, value: T, default: &T) -> Assignment {
        if value.is_default(default) {
            return Assignment::Vacated;
        }
        self.value = value;
        Assignment::Stored
    }
}

/// Entries compare against a bare value by their stored value only
impl<T: MatrixElement> PartialEq<T> for Entry<T> {
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}

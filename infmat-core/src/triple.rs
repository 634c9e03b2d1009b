//! Position and value of one stored entry, as produced by traversal

use crate::Coord;

/// A `(row, column, value)` triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triple<T> {
    pub row: Coord,
    pub column: Coord,
    pub value: T,
}

impl<T> Triple<T> {
    pub const fn new(row: Coord, column: Coord, value: T) -> Self {
        Self { row, column, value }
    }

    /// Split into a plain tuple
    pub fn into_tuple(self) -> (Coord, Coord, T) {
        (self.row, self.column, self.value)
    }

    /// Position without the value
    pub fn position(&self) -> (Coord, Coord) {
        (self.row, self.column)
    }
}

impl<T> From<(Coord, Coord, T)> for Triple<T> {
    fn from((row, column, value): (Coord, Coord, T)) -> Self {
        Self::new(row, column, value)
    }
}

impl<T> From<Triple<T>> for (Coord, Coord, T) {
    fn from(triple: Triple<T>) -> Self {
        triple.into_tuple()
    }
}

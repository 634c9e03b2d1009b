//! Error types for sparse matrix operations

/// Errors that can occur while operating on a sparse matrix
///
/// Coordinate access never fails: every integer pair is a valid position.
/// These variants cover the two conditions the storage engine can still
/// run into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// A row with no entries was queried; rows are removed as soon as their
    /// last entry goes, so this is an internal invariant violation
    EmptyRow,
    /// Storage for a new entry or row could not be reserved
    AllocationFailure,
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            MatrixError::EmptyRow => "Row holds no entries",
            MatrixError::AllocationFailure => "Failed to allocate matrix storage",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for MatrixError {}

impl From<alloc::collections::TryReserveError> for MatrixError {
    fn from(_: alloc::collections::TryReserveError) -> Self {
        MatrixError::AllocationFailure
    }
}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;

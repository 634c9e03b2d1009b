#![cfg_attr(not(test), no_std)]

//! infmat core - storage engine for unbounded sparse matrices
//!
//! This crate maps integer `(row, column)` pairs to values of a fixed type.
//! One designated default value means "absent", and only coordinates holding
//! something else take up storage.
//!
//! Storage is a two-level ordering: a [`Matrix`] holds [`Row`]s ascending by
//! row index, and each row holds [`Entry`] cells ascending by column. Entries
//! and rows appear when a non-default value is written and disappear the
//! moment the last non-default value in them is overwritten with the default.
//!
//! ```
//! use infmat_core::Matrix;
//!
//! let mut matrix = Matrix::new(-1);
//! assert_eq!(matrix.access(0, 0).read(), -1);
//! assert_eq!(matrix.size(), 0);
//!
//! matrix.access(100, 100).assign(314)?;
//! assert_eq!(matrix.size(), 1);
//!
//! let triples: Vec<_> = matrix.iter().map(|t| t.into_tuple()).collect();
//! assert_eq!(triples, vec![(100, 100, 314)]);
//! # Ok::<(), infmat_core::MatrixError>(())
//! ```

extern crate alloc;

pub mod access;
pub mod cursor;
pub mod entry;
pub mod error;
pub mod matrix;
pub mod row;
pub mod traits;
pub mod triple;

pub use access::Access;
pub use cursor::Cursor;
pub use entry::{Assignment, Entry};
pub use error::*;
pub use matrix::Matrix;
pub use row::Row;
pub use traits::*;
pub use triple::Triple;

/// Row and column coordinate type; every value is a valid position
pub type Coord = i64;

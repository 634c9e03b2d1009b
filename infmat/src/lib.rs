//! infmat - unbounded two-dimensional sparse matrices
//!
//! This library stores values at arbitrary integer `(row, column)` pairs,
//! keeping only the ones that differ from a per-matrix default, and adds
//! the pieces that sit on top of the storage engine: formatted printing of
//! a matrix window, its configuration, and argument parsing for the demo.
//!
//! ## Architecture
//!
//! - **infmat-core**: storage engine, traversal cursor and traits (`no_std`)
//! - **infmat**: rendering, configuration and the `infmat-demo` program
//!
//! ## Quick Start
//!
//! ```rust
//! use infmat::{render_to_string, Matrix, PrintConfig};
//!
//! fn example() -> infmat::Result<()> {
//!     let mut matrix = Matrix::new(0);
//!     matrix.access(1, 1).assign(5)?;
//!     matrix.access(0, 2).assign(3)?;
//!
//!     for triple in &matrix {
//!         println!("{} {} {}", triple.row, triple.column, triple.value);
//!     }
//!
//!     let text = render_to_string(&matrix, &PrintConfig::default())?;
//!     assert_eq!(text, "0 0 3 \n0 5 0 \n");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

// Re-export the storage engine
pub use infmat_core::{
    // Core types
    Access, Coord, Cursor, Entry, Matrix, Row, Triple,
    // Traits
    MatrixElement, SparseMatrix,
    // Error handling
    MatrixError,
};

pub mod config;
pub mod error;
pub mod parsing;
pub mod pattern;
pub mod render;

pub use config::PrintConfig;
pub use error::{Error, Result};
pub use parsing::parse_window;
pub use pattern::diagonal_cross;
pub use render::{print, render_to_string};

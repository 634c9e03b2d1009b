//! Crate-level error type

use infmat_core::{Coord, MatrixError};

/// Errors from rendering, configuration loading and argument parsing
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Matrix error: {0}")]
    Matrix(#[from] MatrixError),

    #[error("Invalid window: row {start} is past row {end}")]
    InvalidWindow { start: Coord, end: Coord },

    #[error("Invalid range: {0:?}")]
    InvalidRange(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

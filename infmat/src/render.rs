//! Formatted printing of a rectangular matrix window
//!
//! The renderer only reads through [`SparseMatrix`]: the default value, the
//! extent queries and the ordered triple stream. Stored cells are merged
//! into the window as the stream is walked, so printing costs one pass
//! over the stored entries plus one write per cell.

use std::fmt::Display;
use std::io::Write;

use infmat_core::SparseMatrix;
use tracing::debug;

use crate::{Error, PrintConfig, Result};

/// Write rows `row_start..=row_end`, columns `0..=max_column` of `matrix`
/// to `out`, one line per row
///
/// Cells without a stored entry print as the default value. Each cell is
/// followed by `config.separator`. If a bound is not configured and the
/// matrix is empty, nothing is written.
pub fn print<M, W>(matrix: &M, config: &PrintConfig, out: &mut W) -> Result<()>
where
    M: SparseMatrix,
    M::Element: Display,
    W: Write,
{
    let Some(row_end) = config.row_end.or_else(|| matrix.last_row()) else {
        return Ok(());
    };
    let max_column = match config.max_column {
        Some(column) => column,
        None => match matrix.max_column()? {
            Some(column) => column,
            None => return Ok(()),
        },
    };
    let row_start = config.row_start;
    if row_start > row_end {
        return Err(Error::InvalidWindow {
            start: row_start,
            end: row_end,
        });
    }
    debug!(row_start, row_end, max_column, "printing matrix window");

    let default = matrix.default_value();
    let separator = config.separator.as_str();
    let mut triples = matrix
        .triples()
        .skip_while(|t| t.row < row_start)
        .peekable();

    for row in row_start..=row_end {
        // Stored cells left of column 0 are outside the window
        while triples.next_if(|t| t.row == row && t.column < 0).is_some() {}

        for column in 0..=max_column {
            match triples.next_if(|t| t.row == row && t.column == column) {
                Some(t) => write!(out, "{}{separator}", t.value)?,
                None => write!(out, "{default}{separator}")?,
            }
        }

        while triples.next_if(|t| t.row == row).is_some() {}
        writeln!(out)?;
    }
    Ok(())
}

/// Render the window into a `String`
pub fn render_to_string<M>(matrix: &M, config: &PrintConfig) -> Result<String>
where
    M: SparseMatrix,
    M::Element: Display,
{
    let mut buffer = Vec::new();
    print(matrix, config, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

//! Parsing of row windows given on the command line

use std::ops::RangeInclusive;

use infmat_core::Coord;

use crate::{Error, Result};

/// Parse an inclusive window in the format "start:end", or a single "n"
/// meaning "n:n"
///
/// Both bounds may be negative. Returns an error if either bound is not an
/// integer or if `start > end`.
pub fn parse_window(window: &str) -> Result<RangeInclusive<Coord>> {
    let invalid = || Error::InvalidRange(window.to_string());

    let (start, end) = match window.split_once(':') {
        Some((start, end)) => (parse_coord(start), parse_coord(end)),
        None => (parse_coord(window), parse_coord(window)),
    };
    let (start, end) = (start.ok_or_else(invalid)?, end.ok_or_else(invalid)?);

    if start > end {
        return Err(invalid());
    }
    Ok(start..=end)
}

fn parse_coord(s: &str) -> Option<Coord> {
    s.trim().parse().ok()
}

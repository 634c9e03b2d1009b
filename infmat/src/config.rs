//! Configuration for formatted range printing

use infmat_core::Coord;

/// Window and layout for [`print`](crate::render::print)
///
/// Unset bounds are derived from the matrix: `row_end` from the last
/// stored row and `max_column` from the widest row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrintConfig {
    /// First printed row
    pub row_start: Coord,
    /// Last printed row (inclusive)
    pub row_end: Option<Coord>,
    /// Last printed column (inclusive); columns start at 0
    pub max_column: Option<Coord>,
    /// Text written after every cell
    pub separator: String,
}

impl PrintConfig {
    /// Set the first printed row
    pub fn with_row_start(mut self, row_start: Coord) -> Self {
        self.row_start = row_start;
        self
    }

    /// Set the last printed row
    pub fn with_row_end(mut self, row_end: Coord) -> Self {
        self.row_end = Some(row_end);
        self
    }

    /// Set both row bounds from an inclusive range
    pub fn with_rows(self, rows: std::ops::RangeInclusive<Coord>) -> Self {
        let (start, end) = rows.into_inner();
        self.with_row_start(start).with_row_end(end)
    }

    /// Set the last printed column
    pub fn with_max_column(mut self, max_column: Coord) -> Self {
        self.max_column = Some(max_column);
        self
    }

    /// Set the cell separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Load a config from a JSON file; missing fields take their defaults
    #[cfg(feature = "serde")]
    pub fn from_json_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            row_start: 0,
            row_end: None,
            max_column: None,
            separator: " ".to_string(),
        }
    }
}

//! Error types for cellscan.

use thiserror::Error;

/// Grid construction errors.
#[derive(Debug, Error)]
pub enum GridError {
    /// A row has a different number of cells than the first row.
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell address outside the grid.
    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Grid data could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Settings errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}

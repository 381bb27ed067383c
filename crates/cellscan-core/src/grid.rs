//! The host grid as seen by plugins.

use crate::meta::CellMeta;
use crate::value::CellValue;

/// Access to a host grid's data and cell metadata.
///
/// Plugins never own the grid; they borrow it for the duration of a call.
///
/// # Panics
///
/// Implementations panic when `row` or `col` is outside
/// `row_count()` x `col_count()`. Plugins only iterate within those bounds,
/// so an out-of-range access is an integration bug in the host.
pub trait GridHandle {
    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Number of columns.
    fn col_count(&self) -> usize;

    /// Value of a cell.
    fn data_at_cell(&self, row: usize, col: usize) -> CellValue;

    /// Metadata of a cell, if any was ever written.
    fn cell_meta(&self, row: usize, col: usize) -> Option<&CellMeta>;

    /// Mutable metadata of a cell, created on first access.
    fn cell_meta_mut(&mut self, row: usize, col: usize) -> &mut CellMeta;
}

//! Result callbacks.
//!
//! A callback runs for every scanned cell, matched or not, right after the
//! query method decided the outcome. It receives a `CellVisit` giving access
//! to the host grid and the scanned cell.

use cellscan_core::{CellValue, GridHandle};

/// Context handed to a result callback for one scanned cell.
///
/// Fields: row, col, value, is_match
/// Host access: host, host_mut
pub struct CellVisit<'a> {
    host: &'a mut dyn GridHandle,
    row: usize,
    col: usize,
    value: &'a CellValue,
    is_match: bool,
}

impl<'a> CellVisit<'a> {
    /// Create a new visit context.
    pub fn new(
        host: &'a mut dyn GridHandle,
        row: usize,
        col: usize,
        value: &'a CellValue,
        is_match: bool,
    ) -> Self {
        Self {
            host,
            row,
            col,
            value,
            is_match,
        }
    }

    /// The grid being scanned.
    pub fn host(&self) -> &(dyn GridHandle + 'a) {
        &*self.host
    }

    /// The grid being scanned, mutably.
    pub fn host_mut(&mut self) -> &mut (dyn GridHandle + 'a) {
        &mut *self.host
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// The scanned cell's value.
    pub fn value(&self) -> &CellValue {
        self.value
    }

    /// Whether the query method matched this cell.
    pub fn is_match(&self) -> bool {
        self.is_match
    }

    /// Set the cell's `is_search_result` flag.
    pub fn mark_search_result(&mut self, flag: bool) {
        self.host.cell_meta_mut(self.row, self.col).is_search_result = flag;
    }
}

/// Invoked once per scanned cell.
pub trait ResultCallback: Send + Sync {
    fn on_cell(&self, visit: &mut CellVisit<'_>);
}

impl<F> ResultCallback for F
where
    F: Fn(&mut CellVisit<'_>) + Send + Sync,
{
    fn on_cell(&self, visit: &mut CellVisit<'_>) {
        self(visit)
    }
}

/// The built-in callback.
pub const DEFAULT_CALLBACK: fn(&mut CellVisit<'_>) = default_callback;

/// Records the match outcome in the cell's metadata.
///
/// Non-matches are written too, so flags left by a previous query never survive.
pub fn default_callback(visit: &mut CellVisit<'_>) {
    let is_match = visit.is_match();
    visit.mark_search_result(is_match);
}

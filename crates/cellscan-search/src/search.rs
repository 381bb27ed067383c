//! Query execution.
//!
//! `Search` holds the plugin-level defaults. A query first resolves its
//! strategies into a `ResolvedQuery` (cheap `Arc` clones), which then scans
//! the host grid. Resolving before scanning means the scan can borrow the
//! whole host mutably even when the host owns the plugin.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use cellscan_core::{CellValue, GridHandle};

use crate::callback::{CellVisit, ResultCallback, DEFAULT_CALLBACK};
use crate::query_method::{QueryMethod, DEFAULT_QUERY_METHOD};

/// A cell matched by a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub row: usize,
    pub col: usize,
    pub data: CellValue,
}

/// Per-call overrides for a single query. Never changes the plugin defaults.
#[derive(Clone, Default)]
pub struct QueryOptions {
    callback: Option<Arc<dyn ResultCallback>>,
    query_method: Option<Arc<dyn QueryMethod>>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `callback` for this query instead of the default.
    pub fn callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&mut CellVisit<'_>) + Send + Sync + 'static,
    {
        self.callback = Some(Arc::new(callback));
        self
    }

    /// Use `query_method` for this query instead of the default.
    pub fn query_method<F>(mut self, query_method: F) -> Self
    where
        F: Fn(&str, &CellValue) -> bool + Send + Sync + 'static,
    {
        self.query_method = Some(Arc::new(query_method));
        self
    }
}

impl fmt::Debug for QueryOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryOptions")
            .field("has_callback", &self.callback.is_some())
            .field("has_query_method", &self.query_method.is_some())
            .finish()
    }
}

/// Plugin-level query defaults.
///
/// Unset defaults fall back to the built-in query method and callback.
#[derive(Clone, Default)]
pub struct Search {
    query_method: Option<Arc<dyn QueryMethod>>,
    callback: Option<Arc<dyn ResultCallback>>,
}

impl Search {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default query method.
    pub fn set_query_method(&mut self, query_method: Arc<dyn QueryMethod>) {
        self.query_method = Some(query_method);
    }

    /// Replace the default callback.
    pub fn set_callback(&mut self, callback: Arc<dyn ResultCallback>) {
        self.callback = Some(callback);
    }

    /// The effective default query method.
    pub fn query_method(&self) -> Arc<dyn QueryMethod> {
        self.query_method
            .clone()
            .unwrap_or_else(|| Arc::new(DEFAULT_QUERY_METHOD) as Arc<dyn QueryMethod>)
    }

    /// The effective default callback.
    pub fn callback(&self) -> Arc<dyn ResultCallback> {
        self.callback
            .clone()
            .unwrap_or_else(|| Arc::new(DEFAULT_CALLBACK) as Arc<dyn ResultCallback>)
    }

    /// Check if a custom default query method is set.
    pub fn has_custom_query_method(&self) -> bool {
        self.query_method.is_some()
    }

    /// Check if a custom default callback is set.
    pub fn has_custom_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Resolve the strategies for one query: per-call override, then plugin default, then built-in.
    pub fn resolve(&self, options: QueryOptions) -> ResolvedQuery {
        ResolvedQuery {
            query_method: options.query_method.unwrap_or_else(|| self.query_method()),
            callback: options.callback.unwrap_or_else(|| self.callback()),
        }
    }
}

impl fmt::Debug for Search {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Search")
            .field("has_custom_query_method", &self.has_custom_query_method())
            .field("has_custom_callback", &self.has_custom_callback())
            .finish()
    }
}

/// Strategies chosen for a single query.
#[derive(Clone)]
pub struct ResolvedQuery {
    query_method: Arc<dyn QueryMethod>,
    callback: Arc<dyn ResultCallback>,
}

impl ResolvedQuery {
    /// Scan every cell of `host` in row-major order.
    ///
    /// The query method and the callback each run exactly once per cell.
    /// Returns the matched cells in scan order.
    pub fn run(&self, host: &mut dyn GridHandle, phrase: &str) -> Vec<SearchMatch> {
        let rows = host.row_count();
        let cols = host.col_count();
        let mut matches = Vec::new();

        for row in 0..rows {
            for col in 0..cols {
                let value = host.data_at_cell(row, col);
                let is_match = self.query_method.matches(phrase, &value);

                let mut visit = CellVisit::new(&mut *host, row, col, &value, is_match);
                self.callback.on_cell(&mut visit);

                if is_match {
                    matches.push(SearchMatch {
                        row,
                        col,
                        data: value,
                    });
                }
            }
        }

        tracing::debug!(
            "Query '{}' scanned {} cells, {} matches",
            phrase,
            rows * cols,
            matches.len()
        );
        matches
    }
}

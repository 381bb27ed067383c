//! Query methods.
//!
//! A query method is a pure predicate over (phrase, cell value). It runs once
//! per scanned cell and must not keep state between invocations.

use cellscan_core::CellValue;

/// Decides whether a cell value matches a query phrase.
pub trait QueryMethod: Send + Sync {
    fn matches(&self, phrase: &str, value: &CellValue) -> bool;
}

impl<F> QueryMethod for F
where
    F: Fn(&str, &CellValue) -> bool + Send + Sync,
{
    fn matches(&self, phrase: &str, value: &CellValue) -> bool {
        self(phrase, value)
    }
}

/// The built-in query method.
pub const DEFAULT_QUERY_METHOD: fn(&str, &CellValue) -> bool = default_query_method;

/// Case-insensitive literal substring match against the value's display string.
///
/// The phrase is never interpreted as a pattern: `"A*"` only matches values
/// containing an actual `*`. An empty phrase and an empty cell never match.
pub fn default_query_method(phrase: &str, value: &CellValue) -> bool {
    if phrase.is_empty() || value.is_empty() {
        return false;
    }
    value
        .display_string()
        .to_lowercase()
        .contains(&phrase.to_lowercase())
}

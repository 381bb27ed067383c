//! Search plugin for cellscan grids.
//!
//! This crate provides:
//! - Query methods deciding whether a cell matches a phrase
//! - Result callbacks recording matches in cell metadata
//! - The render-time decorator styling matched cells
//! - The plugin lifecycle (enable/disable driven by grid settings)
//! - The `SearchHandle` capability exposed by hosts while the plugin is enabled
//!
//! ## Resolution
//!
//! Each query resolves its query method and callback independently:
//! 1. The per-call override from `QueryOptions`
//! 2. The plugin-level default set through the handle
//! 3. The built-in default (`DEFAULT_QUERY_METHOD`, `DEFAULT_CALLBACK`)

pub mod callback;
pub mod decorator;
pub mod handle;
pub mod plugin;
pub mod query_method;
pub mod search;

pub use callback::{default_callback, CellVisit, ResultCallback, DEFAULT_CALLBACK};
pub use decorator::{SearchCellDecorator, DEFAULT_SEARCH_RESULT_CLASS};
pub use handle::{SearchHandle, SearchHost};
pub use plugin::{SearchPlugin, PLUGIN_NAME};
pub use query_method::{default_query_method, QueryMethod, DEFAULT_QUERY_METHOD};
pub use search::{QueryOptions, ResolvedQuery, Search, SearchMatch};

//! In-memory host grid for the cellscan search plugin.
//!
//! `Grid` owns cell data, cell metadata, rendered elements, render hooks and
//! settings. It hosts the search plugin and exposes its capability handle
//! through `Grid::search()` while the plugin is enabled.

pub mod cli;
mod grid;
mod observable_settings;

pub use grid::Grid;
pub use observable_settings::ObservableSettings;

// Re-export the plugin surface for convenience
pub use cellscan_core::{
    CellElement, CellMeta, CellValue, DisablePolicy, GridError, GridHandle, GridSettings,
    SettingsUpdate,
};
pub use cellscan_search::{
    CellVisit, QueryMethod, QueryOptions, ResultCallback, SearchHandle, SearchMatch,
    DEFAULT_CALLBACK, DEFAULT_QUERY_METHOD, DEFAULT_SEARCH_RESULT_CLASS,
};

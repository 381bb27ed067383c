//! The in-memory host grid.

use std::sync::Arc;

use tokio::sync::watch;

use cellscan_core::{
    spreadsheet, CellElement, CellMeta, CellMetaStore, CellValue, GridError, GridHandle,
    GridSettings, HookRegistry, SettingsUpdate,
};
use cellscan_search::{SearchHandle, SearchHost, SearchPlugin};

use crate::observable_settings::ObservableSettings;

/// A rectangular grid of cell values hosting the search plugin.
///
/// ## Render pass
///
/// `render()` rebuilds the element of every cell: the base renderer sets the
/// display text and the base classes from `CellMeta::class_name`, then every
/// registered render hook runs in registration order.
pub struct Grid {
    data: Vec<Vec<CellValue>>,
    cols: usize,
    meta: CellMetaStore,

    /// Row-major rendered elements, empty until the first render.
    elements: Vec<CellElement>,

    hooks: Arc<HookRegistry>,
    settings: ObservableSettings,
    search: SearchPlugin,
}

impl Grid {
    /// Create a grid over `data`. All rows must have the same length.
    pub fn new(data: Vec<Vec<CellValue>>, settings: GridSettings) -> Result<Self, GridError> {
        let cols = data.first().map_or(0, Vec::len);
        if let Some((row, cells)) = data.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(GridError::RaggedRow {
                row,
                expected: cols,
                found: cells.len(),
            });
        }

        Ok(Self::build(data, cols, settings))
    }

    /// Create a grid from a JSON array of rows.
    pub fn from_json(json: &str, settings: GridSettings) -> Result<Self, GridError> {
        let data: Vec<Vec<CellValue>> =
            serde_json::from_str(json).map_err(|e| GridError::Parse(e.to_string()))?;
        Self::new(data, settings)
    }

    /// Create a grid filled with spreadsheet sample data (`A0`, `B0`, ...).
    pub fn sample(rows: usize, cols: usize, settings: GridSettings) -> Self {
        Self::build(spreadsheet::sample_data(rows, cols), cols, settings)
    }

    fn build(data: Vec<Vec<CellValue>>, cols: usize, settings: GridSettings) -> Self {
        let hooks = Arc::new(HookRegistry::new());
        let search = SearchPlugin::from_settings(&settings, &hooks);

        tracing::debug!(
            "Grid created: {}x{}, search {}",
            data.len(),
            cols,
            if search.is_enabled() { "enabled" } else { "disabled" }
        );

        Self {
            data,
            cols,
            meta: CellMetaStore::new(),
            elements: Vec::new(),
            hooks,
            settings: ObservableSettings::new(settings),
            search,
        }
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Current settings.
    pub fn settings(&self) -> GridSettings {
        self.settings.get()
    }

    /// Subscribe to settings changes.
    pub fn subscribe_settings(&self) -> watch::Receiver<GridSettings> {
        self.settings.subscribe()
    }

    /// Merge a partial settings update and bring plugins in line with it.
    pub fn update_settings(&mut self, update: SettingsUpdate) {
        if let Some(settings) = self.settings.apply(update) {
            self.search.update_settings(&settings, &self.hooks);
        }
    }

    // =========================================================================
    // Plugins
    // =========================================================================

    /// The search capability, present only while the plugin is enabled.
    pub fn search(&mut self) -> Option<SearchHandle<'_, Self>> {
        SearchHandle::new(self)
    }

    /// Check if the search plugin is enabled.
    pub fn has_search(&self) -> bool {
        self.search.is_enabled()
    }

    /// The render hook registry (shared Arc).
    pub fn hooks(&self) -> Arc<HookRegistry> {
        self.hooks.clone()
    }

    // =========================================================================
    // Data
    // =========================================================================

    /// Replace the value of a cell.
    pub fn set_data_at_cell(
        &mut self,
        row: usize,
        col: usize,
        value: impl Into<CellValue>,
    ) -> Result<(), GridError> {
        if row >= self.data.len() || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.data.len(),
                cols: self.cols,
            });
        }
        self.data[row][col] = value.into();
        Ok(())
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render every cell.
    pub fn render(&mut self) {
        let rows = self.data.len();
        let chain = self.hooks.get_chain();
        self.elements.resize_with(rows * self.cols, CellElement::default);

        for (row, values) in self.data.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                let meta = self.meta.get(row, col);
                let element = &mut self.elements[row * self.cols + col];

                element.set_text(value.display_string());
                element.reset_classes(meta.and_then(|m| m.class_name.as_deref()));
                for hook in &chain {
                    hook.after_render_cell(row, col, meta, element);
                }
            }
        }

        tracing::debug!(
            "Rendered {} cells with {} hooks",
            rows * self.cols,
            chain.len()
        );
    }

    /// The rendered element of a cell, None before the first render or out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellElement> {
        if row >= self.data.len() || col >= self.cols {
            return None;
        }
        self.elements.get(row * self.cols + col)
    }

    fn assert_in_bounds(&self, row: usize, col: usize) {
        assert!(
            row < self.data.len() && col < self.cols,
            "cell ({}, {}) is outside the {}x{} grid",
            row,
            col,
            self.data.len(),
            self.cols
        );
    }
}

impl GridHandle for Grid {
    fn row_count(&self) -> usize {
        self.data.len()
    }

    fn col_count(&self) -> usize {
        self.cols
    }

    fn data_at_cell(&self, row: usize, col: usize) -> CellValue {
        self.assert_in_bounds(row, col);
        self.data[row][col].clone()
    }

    fn cell_meta(&self, row: usize, col: usize) -> Option<&CellMeta> {
        self.assert_in_bounds(row, col);
        self.meta.get(row, col)
    }

    fn cell_meta_mut(&mut self, row: usize, col: usize) -> &mut CellMeta {
        self.assert_in_bounds(row, col);
        self.meta.get_mut(row, col)
    }
}

impl SearchHost for Grid {
    fn search_plugin(&self) -> &SearchPlugin {
        &self.search
    }

    fn search_plugin_mut(&mut self) -> &mut SearchPlugin {
        &mut self.search
    }
}

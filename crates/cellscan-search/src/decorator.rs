//! Search result decorator.
//!
//! Registered as a render hook while the plugin is enabled. For every rendered
//! cell it reads the `is_search_result` flag left by the default callback and
//! adds or removes the result class on the cell's element.

use parking_lot::RwLock;

use cellscan_core::{CellElement, CellMeta, RenderHook};

/// Class applied to matched cells unless the grid configures another one.
pub const DEFAULT_SEARCH_RESULT_CLASS: &str = "htSearchResult";

/// Render hook styling cells flagged as search results.
#[derive(Debug)]
pub struct SearchCellDecorator {
    class: RwLock<String>,
}

impl SearchCellDecorator {
    /// Create a decorator applying `class`.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: RwLock::new(class.into()),
        }
    }

    /// The class currently applied to matched cells.
    pub fn class(&self) -> String {
        self.class.read().clone()
    }

    /// Replace the applied class, returning the previous one.
    pub fn set_class(&self, class: impl Into<String>) -> String {
        std::mem::replace(&mut *self.class.write(), class.into())
    }

    /// Apply the flag in `meta` to `element`. Idempotent.
    pub fn decorate(&self, meta: Option<&CellMeta>, element: &mut CellElement) {
        let class = self.class.read();
        if meta.is_some_and(|m| m.is_search_result) {
            element.add_class(&class);
        } else {
            element.remove_class(&class);
        }
    }
}

impl Default for SearchCellDecorator {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_RESULT_CLASS)
    }
}

impl RenderHook for SearchCellDecorator {
    fn after_render_cell(
        &self,
        _row: usize,
        _col: usize,
        meta: Option<&CellMeta>,
        element: &mut CellElement,
    ) {
        self.decorate(meta, element);
    }
}

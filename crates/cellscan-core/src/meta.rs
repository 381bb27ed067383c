//! Per-cell metadata.
//!
//! Metadata is owned by the host grid and persists across renders. Plugins
//! write to it while they run and the render pass reads it afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Attributes attached to a single cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellMeta {
    /// Set by the search plugin's default callback when the cell matched the last query.
    #[serde(default)]
    pub is_search_result: bool,

    /// Base class applied by the renderer before any hook runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

/// Owned store of cell metadata keyed by (row, col).
///
/// Entries are created lazily the first time a cell's metadata is written.
#[derive(Debug, Clone, Default)]
pub struct CellMetaStore {
    cells: HashMap<(usize, usize), CellMeta>,
}

impl CellMetaStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the metadata of a cell, if any was ever written.
    pub fn get(&self, row: usize, col: usize) -> Option<&CellMeta> {
        self.cells.get(&(row, col))
    }

    /// Get mutable metadata of a cell, creating a default entry if needed.
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut CellMeta {
        self.cells.entry((row, col)).or_default()
    }

    /// Number of cells with metadata.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cell has metadata.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Coordinates of every cell currently flagged as a search result, row-major.
    pub fn search_results(&self) -> Vec<(usize, usize)> {
        let mut coords: Vec<_> = self
            .cells
            .iter()
            .filter(|(_, meta)| meta.is_search_result)
            .map(|(coords, _)| *coords)
            .collect();
        coords.sort_unstable();
        coords
    }
}

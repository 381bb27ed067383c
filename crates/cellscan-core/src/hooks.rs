//! Render hooks.
//!
//! This module provides:
//! - `RenderHook` - Per-cell callback run by the host's render pass
//! - `HookEntry` - Individual hook registration
//! - `HookRegistry` - Storage for registered hooks
//!
//! ## Execution Order
//!
//! For every rendered cell the host first runs its base renderer (text and
//! base classes from cell metadata), then every registered hook in
//! registration order. Each hook sees the element as left by the previous one.
//!
//! ## Ownership
//!
//! Every entry records the name of the plugin that added it, so a plugin can
//! check it is registered exactly once and remove its hooks when disabled.

use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::element::CellElement;
use crate::meta::CellMeta;

/// Global counter for generating unique hook IDs.
static HOOK_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a unique hook ID.
fn generate_hook_id() -> String {
    let id = HOOK_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("hook:{}", id)
}

/// A hook run once per rendered cell.
pub trait RenderHook: Send + Sync {
    /// Adjust the rendered element of the cell at (`row`, `col`).
    ///
    /// `meta` is None when nothing was ever written to the cell's metadata.
    fn after_render_cell(
        &self,
        row: usize,
        col: usize,
        meta: Option<&CellMeta>,
        element: &mut CellElement,
    );
}

/// A registered hook entry.
struct HookEntry {
    /// Unique identifier for removal.
    id: String,

    /// Name of the plugin that registered the hook.
    owner: String,

    /// The hook itself.
    hook: Arc<dyn RenderHook>,
}

impl fmt::Debug for HookEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookEntry")
            .field("id", &self.id)
            .field("owner", &self.owner)
            .finish()
    }
}

/// Registry for render hooks.
pub struct HookRegistry {
    hooks: RwLock<Vec<HookEntry>>,
}

impl HookRegistry {
    /// Create a new empty hook registry.
    pub fn new() -> Self {
        Self {
            hooks: RwLock::new(Vec::new()),
        }
    }

    /// Add a hook on behalf of `owner`.
    ///
    /// Returns the hook ID for later removal.
    pub fn add(&self, owner: &str, hook: Arc<dyn RenderHook>) -> String {
        let id = generate_hook_id();
        self.hooks.write().push(HookEntry {
            id: id.clone(),
            owner: owner.to_string(),
            hook,
        });
        tracing::debug!("Added render hook for '{}' (id: {})", owner, id);
        id
    }

    /// Remove a hook by ID.
    ///
    /// Returns true if the hook was found and removed.
    pub fn remove(&self, id: &str) -> bool {
        let mut hooks = self.hooks.write();
        if let Some(pos) = hooks.iter().position(|h| h.id == id) {
            hooks.remove(pos);
            tracing::debug!("Removed render hook (id: {})", id);
            return true;
        }
        false
    }

    /// Get the hooks in execution order.
    pub fn get_chain(&self) -> Vec<Arc<dyn RenderHook>> {
        self.hooks.read().iter().map(|h| h.hook.clone()).collect()
    }

    /// Total number of registered hooks.
    pub fn count(&self) -> usize {
        self.hooks.read().len()
    }

    /// Number of hooks registered by `owner`.
    pub fn count_for(&self, owner: &str) -> usize {
        self.hooks.read().iter().filter(|h| h.owner == owner).count()
    }

    /// Clear all hooks (useful for testing).
    #[cfg(test)]
    pub fn clear(&self) {
        self.hooks.write().clear();
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

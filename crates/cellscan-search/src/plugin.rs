//! Search plugin lifecycle.
//!
//! ```text
//!            enable / settings.search = true
//!   Disabled ───────────────────────────────► Enabled
//!      ▲                                         │
//!      └─────────────────────────────────────────┘
//!            disable / settings.search = false
//! ```
//!
//! Enabling registers the result decorator with the host's render hooks.
//! Disabling removes it and, under `DisablePolicy::Reset`, discards custom
//! query defaults. Both transitions are idempotent.

use std::sync::Arc;

use cellscan_core::{DisablePolicy, GridSettings, HookRegistry};

use crate::decorator::{SearchCellDecorator, DEFAULT_SEARCH_RESULT_CLASS};
use crate::search::Search;

/// Name under which the plugin registers its render hook.
pub const PLUGIN_NAME: &str = "search";

#[derive(Debug)]
enum Lifecycle {
    Disabled,
    Enabled { hook_id: String },
}

/// Plugin state owned by a host grid.
#[derive(Debug)]
pub struct SearchPlugin {
    lifecycle: Lifecycle,
    search: Search,
    decorator: Arc<SearchCellDecorator>,
    disable_policy: DisablePolicy,
    /// Last class seen in the grid settings, to apply class changes once.
    configured_class: Option<String>,
}

impl SearchPlugin {
    /// Create a disabled plugin with built-in defaults.
    pub fn new() -> Self {
        Self {
            lifecycle: Lifecycle::Disabled,
            search: Search::new(),
            decorator: Arc::new(SearchCellDecorator::default()),
            disable_policy: DisablePolicy::default(),
            configured_class: None,
        }
    }

    /// Create a plugin configured from grid settings.
    pub fn from_settings(settings: &GridSettings, hooks: &HookRegistry) -> Self {
        let mut plugin = Self::new();
        plugin.update_settings(settings, hooks);
        plugin
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Enabled { .. })
    }

    /// Attach the plugin to the host. No-op if already enabled.
    pub fn enable(&mut self, hooks: &HookRegistry) {
        if self.is_enabled() {
            return;
        }
        let hook_id = hooks.add(PLUGIN_NAME, self.decorator.clone());
        self.lifecycle = Lifecycle::Enabled { hook_id };
        tracing::info!("Search plugin enabled");
    }

    /// Detach the plugin from the host. No-op if already disabled.
    pub fn disable(&mut self, hooks: &HookRegistry) {
        let Lifecycle::Enabled { hook_id } =
            std::mem::replace(&mut self.lifecycle, Lifecycle::Disabled)
        else {
            return;
        };

        hooks.remove(&hook_id);
        if self.disable_policy == DisablePolicy::Reset {
            self.search = Search::new();
        }
        tracing::info!(
            "Search plugin disabled (policy: {:?})",
            self.disable_policy
        );
    }

    /// Bring the plugin in line with the grid settings.
    pub fn update_settings(&mut self, settings: &GridSettings, hooks: &HookRegistry) {
        self.disable_policy = settings.search_disable_policy;

        if settings.search_result_class != self.configured_class {
            let class = settings
                .search_result_class
                .clone()
                .unwrap_or_else(|| DEFAULT_SEARCH_RESULT_CLASS.to_string());
            let previous = self.decorator.set_class(class);
            tracing::debug!(
                "Search result class changed from '{}' to '{}'",
                previous,
                self.decorator.class()
            );
            self.configured_class = settings.search_result_class.clone();
        }

        if settings.search {
            self.enable(hooks);
        } else {
            self.disable(hooks);
        }
    }

    /// Plugin-level query defaults.
    pub fn search(&self) -> &Search {
        &self.search
    }

    /// Plugin-level query defaults, mutably.
    pub fn search_mut(&mut self) -> &mut Search {
        &mut self.search
    }

    /// The render hook styling matched cells.
    pub fn decorator(&self) -> &SearchCellDecorator {
        &self.decorator
    }
}

impl Default for SearchPlugin {
    fn default() -> Self {
        Self::new()
    }
}

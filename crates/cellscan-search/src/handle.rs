//! The capability handle exposed by hosts while the plugin is enabled.
//!
//! A host owns its `SearchPlugin` and implements `SearchHost`. Hosts hand out
//! a `SearchHandle` only while the plugin is enabled, so querying a disabled
//! plugin cannot be expressed.

use std::sync::Arc;

use cellscan_core::{CellValue, GridHandle};

use crate::callback::{CellVisit, ResultCallback};
use crate::plugin::SearchPlugin;
use crate::query_method::QueryMethod;
use crate::search::{QueryOptions, SearchMatch};

/// A grid that owns a search plugin.
pub trait SearchHost: GridHandle {
    fn search_plugin(&self) -> &SearchPlugin;

    fn search_plugin_mut(&mut self) -> &mut SearchPlugin;
}

/// Search capability of an enabled plugin.
pub struct SearchHandle<'a, H: SearchHost> {
    host: &'a mut H,
}

impl<'a, H: SearchHost> SearchHandle<'a, H> {
    /// Get the handle, or None if the host's plugin is disabled.
    pub fn new(host: &'a mut H) -> Option<Self> {
        if host.search_plugin().is_enabled() {
            Some(Self { host })
        } else {
            None
        }
    }

    /// Search every cell for `phrase` using the plugin defaults.
    pub fn query(&mut self, phrase: &str) -> Vec<SearchMatch> {
        self.query_with(phrase, QueryOptions::new())
    }

    /// Search every cell for `phrase`, overriding strategies for this call only.
    pub fn query_with(&mut self, phrase: &str, options: QueryOptions) -> Vec<SearchMatch> {
        let resolved = self.host.search_plugin().search().resolve(options);
        resolved.run(&mut *self.host, phrase)
    }

    /// Replace the query method used when a call supplies none.
    pub fn set_default_query_method<F>(&mut self, query_method: F)
    where
        F: Fn(&str, &CellValue) -> bool + Send + Sync + 'static,
    {
        self.host
            .search_plugin_mut()
            .search_mut()
            .set_query_method(Arc::new(query_method));
        tracing::debug!("Default query method replaced");
    }

    /// Replace the callback used when a call supplies none.
    pub fn set_default_callback<F>(&mut self, callback: F)
    where
        F: Fn(&mut CellVisit<'_>) + Send + Sync + 'static,
    {
        self.host
            .search_plugin_mut()
            .search_mut()
            .set_callback(Arc::new(callback));
        tracing::debug!("Default callback replaced");
    }

    /// The query method used when a call supplies none.
    pub fn default_query_method(&self) -> Arc<dyn QueryMethod> {
        self.host.search_plugin().search().query_method()
    }

    /// The callback used when a call supplies none.
    pub fn default_callback(&self) -> Arc<dyn ResultCallback> {
        self.host.search_plugin().search().callback()
    }

    /// The class the decorator applies to matched cells.
    pub fn search_result_class(&self) -> String {
        self.host.search_plugin().decorator().class()
    }

    /// Change the class applied to matched cells from the next render on.
    pub fn set_search_result_class(&mut self, class: impl Into<String>) {
        self.host.search_plugin().decorator().set_class(class);
    }
}

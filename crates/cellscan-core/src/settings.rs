//! Grid settings.
//!
//! Settings are set when a grid is created and can be changed later through
//! partial updates. Keys use the camelCase names hosts usually expose
//! (`search`, `searchResultClass`, `searchDisablePolicy`).

use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use crate::error::SettingsError;

/// What the search plugin does with custom defaults when it is disabled.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DisablePolicy {
    /// Discard custom default query method and callback.
    #[default]
    Reset,
    /// Keep them and restore them on the next enable.
    Preserve,
}

/// Settings of a grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GridSettings {
    /// Enables the search plugin.
    pub search: bool,

    /// Class applied to cells matching the last query.
    /// None means the plugin's built-in class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_result_class: Option<String>,

    /// Behavior of custom search defaults across disable/enable cycles.
    pub search_disable_policy: DisablePolicy,
}

impl GridSettings {
    /// Settings with the search plugin enabled.
    pub fn with_search(mut self, enabled: bool) -> Self {
        self.search = enabled;
        self
    }

    /// Settings with a custom search result class.
    pub fn with_search_result_class(mut self, class: impl Into<String>) -> Self {
        self.search_result_class = Some(class.into());
        self
    }

    /// Settings with the given disable policy.
    pub fn with_disable_policy(mut self, policy: DisablePolicy) -> Self {
        self.search_disable_policy = policy;
        self
    }

    /// Merge a partial update. Returns true if anything changed.
    pub fn apply(&mut self, update: SettingsUpdate) -> bool {
        let before = self.clone();

        if let Some(search) = update.search {
            self.search = search;
        }
        if let Some(class) = update.search_result_class {
            self.search_result_class = class;
        }
        if let Some(policy) = update.search_disable_policy {
            self.search_disable_policy = policy;
        }

        *self != before
    }

    /// Parse settings from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
        toml::from_str(source).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let source = std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        let settings = Self::from_toml_str(&source)?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

/// A partial settings update. Fields left as None are not touched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<bool>,

    /// `Some(None)` (`null` in JSON) goes back to the built-in class.
    #[serde(
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub search_result_class: Option<Option<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_disable_policy: Option<DisablePolicy>,
}

impl SettingsUpdate {
    /// An update that only toggles the search plugin.
    pub fn search(enabled: bool) -> Self {
        Self {
            search: Some(enabled),
            ..Self::default()
        }
    }

    /// An update that sets a custom search result class.
    pub fn search_result_class(class: impl Into<String>) -> Self {
        Self {
            search_result_class: Some(Some(class.into())),
            ..Self::default()
        }
    }

    /// An update that drops the custom search result class.
    pub fn clear_search_result_class() -> Self {
        Self {
            search_result_class: Some(None),
            ..Self::default()
        }
    }
}

/// A key that is present maps to `Some`, even when its value is `null`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

//! Observable grid settings with automatic change notifications.
//!
//! Mutation = notification: every change to the settings is broadcast to
//! subscribers, and unchanged updates are not.

use tokio::sync::watch;

use cellscan_core::{GridSettings, SettingsUpdate};

/// Grid settings that broadcast every change.
///
/// Backed by a `tokio::sync::watch` channel, which works without a runtime.
/// Subscribers check `has_changed()` and read the latest value with `borrow()`.
pub struct ObservableSettings {
    tx: watch::Sender<GridSettings>,
}

impl ObservableSettings {
    pub fn new(settings: GridSettings) -> Self {
        let (tx, _rx) = watch::channel(settings);
        Self { tx }
    }

    /// Current settings.
    pub fn get(&self) -> GridSettings {
        self.tx.borrow().clone()
    }

    /// Merge a partial update.
    ///
    /// Returns the new settings if anything changed; subscribers are only
    /// notified in that case.
    pub fn apply(&self, update: SettingsUpdate) -> Option<GridSettings> {
        let changed = self.tx.send_if_modified(|settings| settings.apply(update));
        if changed {
            let settings = self.get();
            tracing::debug!("Settings changed: {:?}", settings);
            Some(settings)
        } else {
            None
        }
    }

    /// Subscribe to settings changes.
    pub fn subscribe(&self) -> watch::Receiver<GridSettings> {
        self.tx.subscribe()
    }
}

impl Default for ObservableSettings {
    fn default() -> Self {
        Self::new(GridSettings::default())
    }
}

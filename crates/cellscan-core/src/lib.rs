//! Core types for cellscan.
//!
//! This crate contains the host-facing data structures shared by all cellscan crates:
//! - Cell values and their display form
//! - Per-cell metadata and the metadata store
//! - Rendered cell elements
//! - Grid settings and partial settings updates
//! - The `GridHandle` trait plugins use to reach the host grid
//! - The render hook registry
//! - Error types

mod element;
mod error;
mod grid;
pub mod hooks;
mod meta;
mod settings;
pub mod spreadsheet;
mod value;

pub use element::CellElement;
pub use error::{GridError, SettingsError};
pub use grid::GridHandle;
pub use hooks::{HookRegistry, RenderHook};
pub use meta::{CellMeta, CellMetaStore};
pub use settings::{DisablePolicy, GridSettings, SettingsUpdate};
pub use value::CellValue;

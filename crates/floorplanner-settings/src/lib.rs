//! Floorplanner Settings Crate
//!
//! Display settings, key/value storage backends, and the two-tier
//! persistence layer that saves floor plans, app state and undo history.

pub mod config;
pub mod error;
pub mod persistence;
pub mod storage;

pub use config::{default_storage_dir, ActiveTool, DisplaySettings, Theme};
pub use error::{SettingsError, SettingsResult, StorageError, StorageResult};
pub use persistence::{
    merge_over_defaults, AppStateRecord, FloorPlanCollection, HistoryRecord, HistorySaveOutcome,
    LoadedState, Persistence,
};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

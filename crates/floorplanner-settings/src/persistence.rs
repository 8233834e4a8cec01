//! Two-tier persistence
//!
//! State is split across two key/value stores:
//! - the durable tier holds the floor plan collection, the active floor
//!   plan name and the application state record (everything except history)
//! - the volatile tier holds the undo/redo log only
//!
//! Loading never fails. A missing or unreadable record falls back to its
//! default on its own, so a corrupt history cannot stop the document from
//! loading. Saving never fails either: durable write errors are logged, and
//! a history that does not fit is shrunk and, as a last resort, dropped.

use floorplanner_core::constants::{DEFAULT_FLOOR_PLAN_NAME, MAX_HISTORY};
use floorplanner_core::{FloorPlan, Inventory, Point};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, error, warn};

use crate::config::{ActiveTool, DisplaySettings};
use crate::error::SettingsResult;
use crate::storage::KeyValueStore;

/// Durable key: name -> floor plan mapping (JSON).
pub const FLOOR_PLANS_KEY: &str = "floorPlans";
/// Durable key: name of the active floor plan (plain string).
pub const CURRENT_FLOOR_PLAN_KEY: &str = "currentFloorPlanName";
/// Durable key: application state record (JSON).
pub const APP_STATE_KEY: &str = "appState";
/// Volatile key: history entries (JSON array of floor plans).
pub const HISTORY_KEY: &str = "history";
/// Volatile key: history cursor (integer as a string).
pub const HISTORY_INDEX_KEY: &str = "historyIndex";

/// Floor plans keyed by their unique name.
pub type FloorPlanCollection = BTreeMap<String, FloorPlan>;

/// Everything persisted under [`APP_STATE_KEY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppStateRecord {
    pub floor_plan: FloorPlan,
    pub furniture_inventory: Inventory,
    pub selected_room_id: Option<String>,
    pub selected_tool: ActiveTool,
    pub zoom: f64,
    pub pan_offset: Point,
    #[serde(flatten)]
    pub display: DisplaySettings,
}

impl Default for AppStateRecord {
    fn default() -> Self {
        Self {
            floor_plan: FloorPlan::default(),
            furniture_inventory: Inventory::new(),
            selected_room_id: None,
            selected_tool: ActiveTool::default(),
            zoom: 1.0,
            pan_offset: Point::default(),
            display: DisplaySettings::default(),
        }
    }
}

/// The undo/redo log as stored in the volatile tier.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRecord {
    pub entries: Vec<FloorPlan>,
    pub cursor: usize,
}

impl HistoryRecord {
    /// A log holding only `plan`.
    pub fn seeded(plan: FloorPlan) -> Self {
        Self {
            entries: vec![plan],
            cursor: 0,
        }
    }

    /// Build a record from untrusted parts: keep the newest `MAX_HISTORY`
    /// entries and clamp the cursor into range.
    ///
    /// Returns `None` when there are no entries.
    pub fn from_parts(mut entries: Vec<FloorPlan>, cursor: usize) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        let excess = entries.len().saturating_sub(MAX_HISTORY);
        if excess > 0 {
            entries.drain(..excess);
            debug!(dropped = excess, "Trimmed stored history to the newest entries");
        }
        let cursor = cursor.saturating_sub(excess).min(entries.len() - 1);
        Some(Self { entries, cursor })
    }

    /// The entry under the cursor.
    pub fn current(&self) -> Option<&FloorPlan> {
        self.entries.get(self.cursor)
    }

    /// Keep about half of the entries, always including the one under the
    /// cursor and preferring the newest.
    pub fn shrunk(&self) -> Self {
        let len = self.entries.len();
        if len <= 1 {
            return self.clone();
        }
        let keep = len.div_ceil(2);
        let start = (len - keep).min(self.cursor);
        Self {
            entries: self.entries[start..start + keep].to_vec(),
            cursor: self.cursor - start,
        }
    }
}

/// What actually reached the volatile tier on a history save.
#[derive(Debug, Clone, PartialEq)]
pub enum HistorySaveOutcome {
    /// The full record was written.
    Saved,
    /// The record did not fit; this smaller one was written instead.
    Shrunk(HistoryRecord),
    /// Even the smaller record did not fit. History was removed from the
    /// volatile tier and should restart from this single entry.
    Dropped(HistoryRecord),
}

/// State read back at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedState {
    pub floor_plans: FloorPlanCollection,
    pub current_floor_plan_name: String,
    pub app_state: AppStateRecord,
    pub history: HistoryRecord,
}

/// Reads and writes application state across a durable and a volatile store.
#[derive(Debug)]
pub struct Persistence<D, V> {
    durable: D,
    volatile: V,
}

impl<D: KeyValueStore, V: KeyValueStore> Persistence<D, V> {
    pub fn new(durable: D, volatile: V) -> Self {
        Self { durable, volatile }
    }

    pub fn durable(&self) -> &D {
        &self.durable
    }

    pub fn durable_mut(&mut self) -> &mut D {
        &mut self.durable
    }

    pub fn volatile(&self) -> &V {
        &self.volatile
    }

    pub fn volatile_mut(&mut self) -> &mut V {
        &mut self.volatile
    }

    pub fn into_parts(self) -> (D, V) {
        (self.durable, self.volatile)
    }

    /// Load everything, falling back to defaults record by record.
    pub fn load(&mut self) -> LoadedState {
        let mut floor_plans: FloorPlanCollection = read_json(&self.durable, FLOOR_PLANS_KEY)
            .filter(|plans: &FloorPlanCollection| !plans.is_empty())
            .unwrap_or_default();
        if floor_plans.is_empty() {
            let plan = FloorPlan::default();
            floor_plans.insert(plan.name.clone(), plan);
        }

        let current_floor_plan_name = read_raw(&self.durable, CURRENT_FLOOR_PLAN_KEY)
            .filter(|name| floor_plans.contains_key(name))
            .or_else(|| floor_plans.keys().next().cloned())
            .unwrap_or_else(|| DEFAULT_FLOOR_PLAN_NAME.to_string());

        let app_state = match read_raw(&self.durable, APP_STATE_KEY) {
            Some(raw) => match merge_over_defaults::<AppStateRecord>(&raw) {
                Ok(mut record) => {
                    if !has_readable_field::<FloorPlan>(&raw, "floorPlan") {
                        warn!(
                            floor_plan = %current_floor_plan_name,
                            "Stored app state has no readable floor plan, using the saved one"
                        );
                        record.floor_plan = floor_plans
                            .get(&current_floor_plan_name)
                            .cloned()
                            .unwrap_or_default();
                    }
                    record
                }
                Err(err) => {
                    warn!(%err, "Stored app state is unreadable, using defaults");
                    self.fresh_app_state(&floor_plans, &current_floor_plan_name)
                }
            },
            None => self.fresh_app_state(&floor_plans, &current_floor_plan_name),
        };

        let history = self.load_history(&app_state.floor_plan);

        LoadedState {
            floor_plans,
            current_floor_plan_name,
            app_state,
            history,
        }
    }

    fn fresh_app_state(&self, floor_plans: &FloorPlanCollection, current: &str) -> AppStateRecord {
        AppStateRecord {
            floor_plan: floor_plans.get(current).cloned().unwrap_or_default(),
            ..AppStateRecord::default()
        }
    }

    fn load_history(&mut self, live: &FloorPlan) -> HistoryRecord {
        let Some(raw) = read_raw(&self.volatile, HISTORY_KEY) else {
            return HistoryRecord::seeded(live.clone());
        };

        let entries = match serde_json::from_str::<Vec<FloorPlan>>(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(%err, "Stored history is unreadable, starting a fresh one");
                self.clear_history();
                return HistoryRecord::seeded(live.clone());
            }
        };

        let cursor = read_raw(&self.volatile, HISTORY_INDEX_KEY)
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .unwrap_or(0);

        match HistoryRecord::from_parts(entries, cursor) {
            Some(record) if record.current() == Some(live) => record,
            Some(_) => {
                warn!("Stored history does not match the document, starting a fresh one");
                HistoryRecord::seeded(live.clone())
            }
            None => HistoryRecord::seeded(live.clone()),
        }
    }

    /// Write the floor plan collection and the active name.
    pub fn save_floor_plans(&mut self, floor_plans: &FloorPlanCollection, current_name: &str) {
        match serde_json::to_string(floor_plans) {
            Ok(json) => write_durable(&mut self.durable, FLOOR_PLANS_KEY, &json),
            Err(err) => error!(%err, "Failed to serialize floor plans"),
        }
        write_durable(&mut self.durable, CURRENT_FLOOR_PLAN_KEY, current_name);
    }

    /// Write the application state record.
    pub fn save_app_state(&mut self, record: &AppStateRecord) {
        match serde_json::to_string(record) {
            Ok(json) => write_durable(&mut self.durable, APP_STATE_KEY, &json),
            Err(err) => error!(%err, "Failed to serialize app state"),
        }
    }

    /// Write the history log, shrinking or dropping it if it does not fit.
    pub fn save_history(&mut self, record: &HistoryRecord) -> HistorySaveOutcome {
        let err = match self.write_history(record) {
            Ok(()) => return HistorySaveOutcome::Saved,
            Err(err) => err,
        };
        warn!(%err, entries = record.entries.len(), "History did not fit, shrinking it");

        let shrunk = record.shrunk();
        match self.write_history(&shrunk) {
            Ok(()) => HistorySaveOutcome::Shrunk(shrunk),
            Err(err) => {
                error!(%err, "Reduced history did not fit either, dropping it");
                self.clear_history();
                HistorySaveOutcome::Dropped(HistoryRecord::seeded(
                    record.current().cloned().unwrap_or_default(),
                ))
            }
        }
    }

    fn write_history(&mut self, record: &HistoryRecord) -> SettingsResult<()> {
        let json = serde_json::to_string(&record.entries)?;
        self.volatile.set(HISTORY_KEY, &json)?;
        self.volatile
            .set(HISTORY_INDEX_KEY, &record.cursor.to_string())?;
        Ok(())
    }

    fn clear_history(&mut self) {
        for key in [HISTORY_KEY, HISTORY_INDEX_KEY] {
            if let Err(err) = self.volatile.remove(key) {
                warn!(%err, key, "Failed to clear stored history");
            }
        }
    }
}

fn read_raw<S: KeyValueStore>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(err) => {
            warn!(%err, key, "Failed to read stored record");
            None
        }
    }
}

fn read_json<S: KeyValueStore, T: DeserializeOwned>(store: &S, key: &str) -> Option<T> {
    let raw = read_raw(store, key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(%err, key, "Stored record is unreadable, using defaults");
            None
        }
    }
}

fn write_durable<S: KeyValueStore>(store: &mut S, key: &str, value: &str) {
    if let Err(err) = store.set(key, value) {
        error!(%err, key, "Failed to write durable record");
    }
}

fn has_readable_field<T: DeserializeOwned>(raw: &str, field: &str) -> bool {
    serde_json::from_str::<Value>(raw)
        .ok()
        .and_then(|mut record| record.get_mut(field).map(Value::take))
        .is_some_and(|value| serde_json::from_value::<T>(value).is_ok())
}

/// Deserialize a JSON object over `T::default()` one top-level field at a
/// time. Fields that are missing keep their default; fields that do not
/// deserialize are skipped with a warning.
pub fn merge_over_defaults<T>(raw: &str) -> serde_json::Result<T>
where
    T: Default + Serialize + DeserializeOwned,
{
    let Value::Object(fields) = serde_json::from_str::<Value>(raw)? else {
        return Err(<serde_json::Error as serde::de::Error>::custom(
            "expected a JSON object",
        ));
    };

    let mut merged = serde_json::to_value(T::default())?;
    for (key, value) in fields {
        let mut candidate = merged.clone();
        if let Value::Object(map) = &mut candidate {
            map.insert(key.clone(), value);
        }
        match serde_json::from_value::<T>(candidate.clone()) {
            Ok(_) => merged = candidate,
            Err(err) => warn!(%err, key, "Ignoring unreadable stored field"),
        }
    }

    serde_json::from_value(merged)
}

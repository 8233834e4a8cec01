//! Designer state manager for UI integration.
//! Owns the document, the view and the undo log, and handles UI callbacks.
//!
//! This module is split into submodules for better organization:
//! - `rooms`: Room creation and form updates
//! - `furniture`: Furniture creation, templates and form updates
//! - `selection`: Selection, sidebar tabs and selection-driven edits
//! - `floor_plans`: The named floor plan collection
//! - `view`: Zoom, display settings and hit testing
//! - `keyboard`: Shortcut dispatch
//! - `gestures`: Pointer gestures through the layout editor

mod floor_plans;
mod furniture;
mod gestures;
mod keyboard;
mod rooms;
mod selection;
mod view;

pub use furniture::FurnitureDraft;
pub use rooms::RoomDraft;

use floorplanner_core::{FloorPlan, Inventory, PlacedFurniture};
use floorplanner_settings::{
    AppStateRecord, DisplaySettings, FloorPlanCollection, HistorySaveOutcome, KeyValueStore,
    LoadedState, Persistence,
};
use tracing::{debug, info};

use crate::history::HistoryManager;
use crate::layout_editor::LayoutEditor;
use crate::resolver::{self, ItemRef, ItemResolver, PlaceableItem};
use crate::selection::SelectionState;
use crate::viewport::Viewport;

/// A type-erased key/value store.
pub type BoxedStore = Box<dyn KeyValueStore>;

/// Designer state for UI integration
pub struct DesignerState {
    floor_plan: FloorPlan,
    inventory: Inventory,
    floor_plans: FloorPlanCollection,
    current_floor_plan_name: String,
    history: HistoryManager,
    selection: SelectionState,
    viewport: Viewport,
    display: DisplaySettings,
    editor: LayoutEditor,
    persistence: Option<Persistence<BoxedStore, BoxedStore>>,
}

impl DesignerState {
    /// Creates a new designer state with a single empty floor plan and no
    /// storage behind it.
    pub fn new() -> Self {
        let plan = FloorPlan::default();
        let mut floor_plans = FloorPlanCollection::new();
        floor_plans.insert(plan.name.clone(), plan.clone());
        Self {
            current_floor_plan_name: plan.name.clone(),
            history: HistoryManager::new(plan.clone()),
            floor_plan: plan,
            inventory: Inventory::new(),
            floor_plans,
            selection: SelectionState::new(),
            viewport: Viewport::default(),
            display: DisplaySettings::default(),
            editor: LayoutEditor::new(),
            persistence: None,
        }
    }

    /// Loads state from the two storage tiers and keeps writing through to
    /// them on every change.
    pub fn with_persistence<D, V>(durable: D, volatile: V) -> Self
    where
        D: KeyValueStore + 'static,
        V: KeyValueStore + 'static,
    {
        let mut persistence: Persistence<BoxedStore, BoxedStore> =
            Persistence::new(Box::new(durable), Box::new(volatile));
        let loaded = persistence.load();
        let mut state = Self::from_loaded(loaded);
        state.persistence = Some(persistence);
        info!(
            floor_plan = %state.current_floor_plan_name,
            floor_plans = state.floor_plans.len(),
            history = state.history.len(),
            "Loaded designer state"
        );
        state
    }

    /// Builds state from an already loaded snapshot.
    pub fn from_loaded(loaded: LoadedState) -> Self {
        let LoadedState {
            mut floor_plans,
            app_state,
            history,
            ..
        } = loaded;

        let floor_plan = app_state.floor_plan;
        floor_plans.insert(floor_plan.name.clone(), floor_plan.clone());

        let mut viewport = Viewport::default();
        viewport.set_zoom(app_state.zoom);
        viewport.set_pan(app_state.pan_offset.x, app_state.pan_offset.y);

        let mut selection = SelectionState::new();
        selection.set_active_tool(app_state.selected_tool);
        if let Some(item) = app_state.selected_room_id.as_deref().and_then(|id| {
            resolver::resolve_id(id, &floor_plan, &app_state.furniture_inventory)
        }) {
            selection.select(item);
        }

        Self {
            current_floor_plan_name: floor_plan.name.clone(),
            history: HistoryManager::from_record(history, &floor_plan),
            floor_plan,
            inventory: app_state.furniture_inventory,
            floor_plans,
            selection,
            viewport,
            display: app_state.display,
            editor: LayoutEditor::new(),
            persistence: None,
        }
    }

    /// Gives back the storage tiers, if any.
    pub fn into_stores(self) -> Option<(BoxedStore, BoxedStore)> {
        self.persistence.map(Persistence::into_parts)
    }

    pub fn floor_plan(&self) -> &FloorPlan {
        &self.floor_plan
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn floor_plans(&self) -> &FloorPlanCollection {
        &self.floor_plans
    }

    pub fn current_floor_plan_name(&self) -> &str {
        &self.current_floor_plan_name
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn display(&self) -> &DisplaySettings {
        &self.display
    }

    pub fn editor(&self) -> &LayoutEditor {
        &self.editor
    }

    /// Furniture that can be drawn: instances whose definition exists.
    pub fn visible_furniture(&self) -> impl Iterator<Item = PlacedFurniture<'_>> {
        self.floor_plan.visible_furniture(&self.inventory)
    }

    /// Geometry of an item, by reference.
    pub fn item(&self, item: &ItemRef) -> Option<PlaceableItem> {
        resolver::placeable(item, &self.floor_plan, &self.inventory)
    }

    /// Geometry of an item, by id.
    pub fn resolve(&self, id: &str) -> Option<PlaceableItem> {
        resolver::resolve(id, &self.floor_plan, &self.inventory)
    }

    /// Geometry of the selected item.
    pub fn selected_item(&self) -> Option<PlaceableItem> {
        self.selection.selected().and_then(|item| self.item(item))
    }

    pub(crate) fn items(&mut self) -> ItemResolver<'_> {
        ItemResolver::new(&mut self.floor_plan, &mut self.inventory)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Records the current floor plan as one undo step and writes through.
    pub fn commit(&mut self) {
        self.history.commit(self.floor_plan.clone());
        self.sync_collection();
        self.persist_history();
        self.persist_durable();
    }

    /// Steps back one edit. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo().cloned() {
            Some(plan) => {
                self.restore(plan);
                true
            }
            None => false,
        }
    }

    /// Steps forward one edit. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo().cloned() {
            Some(plan) => {
                self.restore(plan);
                true
            }
            None => false,
        }
    }

    fn restore(&mut self, plan: FloorPlan) {
        self.floor_plan = plan;
        self.revalidate_selection();
        self.sync_collection();
        self.persist_history();
        self.persist_durable();
    }

    /// Drops the selection if its item is gone and refreshes a stale
    /// furniture index.
    pub(crate) fn revalidate_selection(&mut self) {
        let Some(selected) = self.selection.selected().cloned() else {
            return;
        };
        match self.item(&selected) {
            Some(view) if view.item != selected => self.selection.retarget(view.item),
            Some(_) => {}
            None => self.selection.clear(),
        }
    }

    /// Mirrors the live floor plan into the collection. A name that is new
    /// to the collection is a rename; a name that already exists is a
    /// switch to that plan.
    pub(crate) fn sync_collection(&mut self) {
        let name = self.floor_plan.name.clone();
        if name != self.current_floor_plan_name {
            if !self.floor_plans.contains_key(&name) {
                self.floor_plans.remove(&self.current_floor_plan_name);
            }
            debug!(from = %self.current_floor_plan_name, to = %name, "Current floor plan changed");
            self.current_floor_plan_name = name.clone();
        }
        self.floor_plans.insert(name, self.floor_plan.clone());
    }

    /// Everything persisted under the app state key.
    pub fn app_state_record(&self) -> AppStateRecord {
        AppStateRecord {
            floor_plan: self.floor_plan.clone(),
            furniture_inventory: self.inventory.clone(),
            selected_room_id: self.selection.selected_id().map(str::to_string),
            selected_tool: self.selection.active_tool(),
            zoom: self.viewport.zoom(),
            pan_offset: self.viewport.pan(),
            display: self.display.clone(),
        }
    }

    /// Writes the app state record only. Used for view and settings changes.
    pub(crate) fn persist_app_state(&mut self) {
        let record = self.app_state_record();
        if let Some(persistence) = self.persistence.as_mut() {
            persistence.save_app_state(&record);
        }
    }

    /// Writes the floor plan collection and the app state record.
    pub(crate) fn persist_durable(&mut self) {
        let record = self.app_state_record();
        if let Some(persistence) = self.persistence.as_mut() {
            persistence.save_floor_plans(&self.floor_plans, &self.current_floor_plan_name);
            persistence.save_app_state(&record);
        }
    }

    /// Writes the undo log and adopts whatever the volatile tier kept.
    pub(crate) fn persist_history(&mut self) {
        let Some(persistence) = self.persistence.as_mut() else {
            return;
        };
        match persistence.save_history(&self.history.to_record()) {
            HistorySaveOutcome::Saved => {}
            HistorySaveOutcome::Shrunk(record) | HistorySaveOutcome::Dropped(record) => {
                self.history.adopt(record);
            }
        }
    }

    /// Writes every record to storage.
    pub fn save(&mut self) {
        self.sync_collection();
        self.persist_durable();
        self.persist_history();
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

//! Selection operations and selection-driven edits for designer state.

use floorplanner_settings::ActiveTool;
use tracing::debug;

use super::DesignerState;
use crate::resolver::{self, ItemKind, ItemRef};
use crate::selection::SidebarTab;

impl DesignerState {
    /// Selects an item and shows its details. Returns `false` if the item
    /// does not exist.
    pub fn select(&mut self, item: &ItemRef) -> bool {
        match self.item(item) {
            Some(view) => {
                self.selection.select(view.item);
                self.persist_app_state();
                true
            }
            None => false,
        }
    }

    /// Selects the item with this id (rooms first, then furniture).
    pub fn select_id(&mut self, id: &str) -> bool {
        match resolver::resolve_id(id, &self.floor_plan, &self.inventory) {
            Some(item) => self.select(&item),
            None => false,
        }
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        if self.selection.selected().is_some() {
            self.selection.clear();
            self.persist_app_state();
        }
    }

    pub fn set_sidebar_tab(&mut self, tab: SidebarTab) {
        let had_selection = self.selection.selected().is_some();
        self.selection.set_sidebar_tab(tab);
        if had_selection && self.selection.selected().is_none() {
            self.persist_app_state();
        }
    }

    pub fn set_active_tool(&mut self, tool: ActiveTool) {
        self.selection.set_active_tool(tool);
        self.persist_app_state();
    }

    /// Deletes the selected item and commits. Deleting a room opens the
    /// "add room" tab; deleting furniture opens "add furniture" and leaves
    /// its definition in the inventory.
    pub fn delete_selected(&mut self) -> bool {
        let Some(selected) = self.selection.selected().cloned() else {
            return false;
        };
        let Some(view) = self.item(&selected) else {
            self.selection.clear();
            return false;
        };

        if !self.items().delete_item(&view.item) {
            return false;
        }
        debug!(item = %view.item, "Deleted item");
        self.selection.clear();
        self.selection.set_sidebar_tab(match view.item.kind() {
            ItemKind::Room => SidebarTab::AddRoom,
            ItemKind::Furniture => SidebarTab::AddFurniture,
        });
        self.commit();
        true
    }

    /// Duplicates the selected item and commits. A duplicated room becomes
    /// the selection; a duplicated furniture instance does not.
    pub fn duplicate_selected(&mut self) -> Option<ItemRef> {
        let selected = self.selection.selected().cloned()?;
        let view = self.item(&selected)?;
        let copy = self.items().duplicate_item(&view.item)?;
        if copy.kind() == ItemKind::Room {
            self.selection.select(copy.clone());
        }
        self.commit();
        Some(copy)
    }

    /// Rotates the selected item by swapping its width and height, then
    /// commits.
    pub fn swap_selected_dimensions(&mut self) -> bool {
        let Some(selected) = self.selection.selected().cloned() else {
            return false;
        };
        if !self.items().swap_dimensions(&selected) {
            return false;
        }
        self.commit();
        true
    }
}

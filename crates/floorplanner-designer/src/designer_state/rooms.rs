//! Room creation and form updates for designer state.

use floorplanner_core::constants::{DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH};
use floorplanner_core::{Dimensions, Livability, Room};
use tracing::debug;

use super::DesignerState;
use crate::error::DesignerResult;
use crate::resolver::ItemRef;

/// Values from the room form.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomDraft {
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub livability: Livability,
}

impl Default for RoomDraft {
    fn default() -> Self {
        Self {
            name: "New Room".to_string(),
            width: DEFAULT_ROOM_WIDTH,
            height: DEFAULT_ROOM_HEIGHT,
            livability: Livability::default(),
        }
    }
}

impl RoomDraft {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            livability: Livability::default(),
        }
    }

    pub fn with_livability(mut self, livability: Livability) -> Self {
        self.livability = livability;
        self
    }

    /// A draft from feet/inches form fields.
    pub fn from_dimensions(name: impl Into<String>, dimensions: Dimensions) -> Self {
        let (width, height) = dimensions.to_inches();
        Self::new(name, width, height)
    }

    /// Pre-fill the form from an existing room.
    pub fn from_room(room: &Room) -> Self {
        Self {
            name: room.name.clone(),
            width: room.width,
            height: room.height,
            livability: room.livability,
        }
    }
}

impl DesignerState {
    /// Adds a room centered on the visible canvas and commits.
    ///
    /// Returns the new room's id.
    pub fn add_room(&mut self, draft: RoomDraft) -> DesignerResult<String> {
        let center = self.viewport.visible_center();
        let room = Room::new(draft.name, draft.width, draft.height, draft.livability)
            .at(center.x - draft.width / 2.0, center.y - draft.height / 2.0);
        room.validate()?;

        let id = room.id.clone();
        debug!(room = %room.name, sq_ft = room.square_footage, "Adding room");
        self.floor_plan.rooms.push(room);
        self.commit();
        Ok(id)
    }

    /// Replaces a room's name, size and class from the form, keeping its
    /// position. Returns `Ok(false)` when the room does not exist.
    pub fn update_room(&mut self, id: &str, draft: RoomDraft) -> DesignerResult<bool> {
        let Some(room) = self.floor_plan.room(id) else {
            return Ok(false);
        };
        let mut updated = room.clone();
        updated.name = draft.name;
        updated.livability = draft.livability;
        updated.set_size(draft.width, draft.height);
        updated.validate()?;

        if let Some(room) = self.floor_plan.room_mut(id) {
            *room = updated;
        }
        self.commit();
        Ok(true)
    }

    /// Updates the selected room, if a room is selected.
    pub fn update_selected_room(&mut self, draft: RoomDraft) -> DesignerResult<bool> {
        match self.selection.selected() {
            Some(ItemRef::Room(id)) => {
                let id = id.clone();
                self.update_room(&id, draft)
            }
            _ => Ok(false),
        }
    }
}

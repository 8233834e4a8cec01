use serde::{Deserialize, Serialize};

use super::furniture::{FurnitureInstance, Inventory, PlacedFurniture};
use super::room::{Livability, Room};
use crate::constants::DEFAULT_FLOOR_PLAN_NAME;
use crate::error::DocumentError;

/// A named floor plan: rooms, furniture placements and an optional
/// background image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FloorPlan {
    pub name: String,
    pub rooms: Vec<Room>,
    pub furniture_instances: Vec<FurnitureInstance>,
    /// Opaque data URI. Never decoded here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    pub image_scale: f64,
}

impl Default for FloorPlan {
    fn default() -> Self {
        Self::named(DEFAULT_FLOOR_PLAN_NAME)
    }
}

impl FloorPlan {
    /// An empty plan with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rooms: Vec::new(),
            furniture_instances: Vec::new(),
            background_image: None,
            image_scale: 1.0,
        }
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    pub fn room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.id == id)
    }

    /// Index of the first instance of `furniture_id`.
    pub fn instance_index(&self, furniture_id: &str) -> Option<usize> {
        self.furniture_instances
            .iter()
            .position(|instance| instance.furniture_id == furniture_id)
    }

    /// Instances whose definition exists, in drawing order.
    ///
    /// Dangling references are skipped rather than reported.
    pub fn visible_furniture<'a>(
        &'a self,
        inventory: &'a Inventory,
    ) -> impl Iterator<Item = PlacedFurniture<'a>> + 'a {
        self.furniture_instances
            .iter()
            .enumerate()
            .filter_map(move |(index, instance)| {
                let Some(definition) = inventory.get(&instance.furniture_id) else {
                    tracing::trace!(furniture_id = %instance.furniture_id, "Skipping dangling furniture instance");
                    return None;
                };
                Some(PlacedFurniture {
                    index,
                    instance,
                    definition,
                })
            })
    }

    /// Total square footage of rooms with the given livability.
    pub fn total_square_footage(&self, livability: Livability) -> f64 {
        self.rooms
            .iter()
            .filter(|room| room.livability == livability)
            .map(|room| room.square_footage)
            .sum()
    }

    pub fn validate(&self) -> Result<(), DocumentError> {
        if self.name.trim().is_empty() {
            return Err(DocumentError::EmptyName);
        }
        self.rooms.iter().try_for_each(Room::validate)
    }
}

//! Data models for the floor plan document
//!
//! This module provides:
//! - Rooms, which own their geometry directly
//! - Furniture definitions (shared templates) and instances (placements)
//! - The floor plan aggregate that ties rooms and instances together
//!
//! All coordinates and sizes are document-space inches.

mod floor_plan;
mod furniture;
mod room;

pub use floor_plan::FloorPlan;
pub use furniture::{FurnitureDefinition, FurnitureInstance, Inventory, PlacedFurniture};
pub use room::{Livability, Room};

use serde::{Deserialize, Serialize};

/// A point in document space (inches).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Generates a fresh identifier for a room or furniture definition.
pub fn new_item_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Rejects sizes that cannot describe a drawable rectangle.
pub(crate) fn check_dimension(field: &str, value: f64) -> Result<(), crate::error::DocumentError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(crate::error::DocumentError::InvalidDimension {
            field: field.to_string(),
            value,
        })
    }
}

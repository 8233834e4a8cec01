//! # Floorplanner Core
//!
//! Core types and utilities for Floorplanner.
//! Provides the document data model (rooms, furniture definitions and
//! instances, floor plans), the geometry helpers used by every editing
//! operation, and the shared error type.

pub mod constants;
pub mod data;
pub mod error;
pub mod units;

pub use data::{
    new_item_id, FloorPlan, FurnitureDefinition, FurnitureInstance, Inventory, Livability,
    PlacedFurniture, Point, Room,
};

pub use error::{Error, Result};

pub use units::{
    feet_inches_to_inches, inches_to_feet_inches, parse_feet_inches, snap_to_grid,
    square_footage, Dimensions, FeetInches,
};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{check_dimension, new_item_id};
use crate::constants::DUPLICATE_OFFSET;
use crate::error::DocumentError;

/// A shared furniture template. Every instance that references it by id
/// takes its size, name and color from here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureDefinition {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub furniture_type: String,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub color: String,
}

impl FurnitureDefinition {
    pub fn new(
        name: impl Into<String>,
        furniture_type: impl Into<String>,
        width: f64,
        height: f64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: new_item_id(),
            name: name.into(),
            furniture_type: furniture_type.into(),
            width,
            height,
            color: color.into(),
        }
    }

    pub fn validate(&self) -> Result<(), DocumentError> {
        check_dimension("width", self.width)?;
        check_dimension("height", self.height)
    }
}

/// A placement of a furniture definition. Only the position is per-instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureInstance {
    pub furniture_id: String,
    pub x: f64,
    pub y: f64,
}

impl FurnitureInstance {
    pub fn new(furniture_id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            furniture_id: furniture_id.into(),
            x,
            y,
        }
    }

    /// Another placement of the same definition, offset diagonally.
    pub fn duplicate(&self) -> Self {
        Self {
            furniture_id: self.furniture_id.clone(),
            x: self.x + DUPLICATE_OFFSET,
            y: self.y + DUPLICATE_OFFSET,
        }
    }
}

/// Furniture definitions keyed by id.
///
/// Entries are never removed when their last instance goes away.
pub type Inventory = BTreeMap<String, FurnitureDefinition>;

/// An instance joined with its definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedFurniture<'a> {
    /// Position of the instance in `FloorPlan::furniture_instances`.
    pub index: usize,
    pub instance: &'a FurnitureInstance,
    pub definition: &'a FurnitureDefinition,
}

impl PlacedFurniture<'_> {
    pub fn x(&self) -> f64 {
        self.instance.x
    }

    pub fn y(&self) -> f64 {
        self.instance.y
    }

    pub fn width(&self) -> f64 {
        self.definition.width
    }

    pub fn height(&self) -> f64 {
        self.definition.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_duplicate_reuses_definition() {
        let instance = FurnitureInstance::new("sofa-1", 12.0, 24.0);
        let copy = instance.duplicate();
        assert_eq!(copy.furniture_id, "sofa-1");
        assert_eq!((copy.x, copy.y), (62.0, 74.0));
    }

    #[test]
    fn test_definition_serde_uses_type_key() {
        let def = FurnitureDefinition::new("Sofa", "sofa", 84.0, 36.0, "#8B4513");
        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["type"], "sofa");
        assert!(json.get("furnitureType").is_none());
    }

    #[test]
    fn test_instance_serde_camel_case() {
        let json = r#"{"furnitureId":"abc","x":1.5,"y":2}"#;
        let instance: FurnitureInstance = serde_json::from_str(json).unwrap();
        assert_eq!(instance, FurnitureInstance::new("abc", 1.5, 2.0));
    }

    #[test]
    fn test_definition_validate() {
        let mut def = FurnitureDefinition::new("Desk", "desk", 48.0, 24.0, "#654321");
        assert!(def.validate().is_ok());
        def.height = f64::NAN;
        assert!(def.validate().is_err());
    }
}

//! Furniture creation, templates and form updates for designer state.
//!
//! A new piece of furniture creates a definition in the shared inventory and
//! one instance in the current floor plan. Further instances of the same
//! definition come from duplication or [`DesignerState::place_existing_furniture`].

use floorplanner_core::{FurnitureDefinition, FurnitureInstance};
use tracing::debug;

use super::DesignerState;
use crate::error::{DesignerError, DesignerResult};
use crate::resolver::{self, ItemRef};
use crate::templates::find_template;

/// Values from the furniture form.
#[derive(Debug, Clone, PartialEq)]
pub struct FurnitureDraft {
    pub name: String,
    pub furniture_type: String,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub x: f64,
    pub y: f64,
}

impl FurnitureDraft {
    pub fn new(name: impl Into<String>, furniture_type: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            furniture_type: furniture_type.into(),
            width,
            height,
            color: "#8B4513".to_string(),
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Pre-fill the form from a definition and one of its placements.
    pub fn from_parts(definition: &FurnitureDefinition, instance: &FurnitureInstance) -> Self {
        Self {
            name: definition.name.clone(),
            furniture_type: definition.furniture_type.clone(),
            width: definition.width,
            height: definition.height,
            color: definition.color.clone(),
            x: instance.x,
            y: instance.y,
        }
    }

    fn definition(&self) -> FurnitureDefinition {
        FurnitureDefinition::new(
            self.name.clone(),
            self.furniture_type.clone(),
            self.width,
            self.height,
            self.color.clone(),
        )
    }
}

impl DesignerState {
    fn place(&mut self, definition: FurnitureDefinition, x: f64, y: f64) -> ItemRef {
        let furniture_id = definition.id.clone();
        self.inventory.insert(furniture_id.clone(), definition);
        self.floor_plan
            .furniture_instances
            .push(FurnitureInstance::new(furniture_id.clone(), x, y));
        ItemRef::Furniture {
            index: self.floor_plan.furniture_instances.len() - 1,
            furniture_id,
        }
    }

    /// Adds a new definition and one instance of it, then commits.
    pub fn add_furniture(&mut self, draft: FurnitureDraft) -> DesignerResult<ItemRef> {
        let definition = draft.definition();
        definition.validate()?;
        debug!(furniture = %definition.name, "Adding furniture");
        let item = self.place(definition, draft.x, draft.y);
        self.commit();
        Ok(item)
    }

    /// Adds furniture from a catalog template, centered on the visible
    /// canvas, then commits.
    pub fn add_furniture_from_template(&mut self, template_id: &str) -> DesignerResult<ItemRef> {
        let template = find_template(template_id)
            .ok_or_else(|| DesignerError::UnknownTemplate(template_id.to_string()))?;
        let definition = template.definition();
        let center = self.viewport.visible_center();
        let x = center.x - definition.width / 2.0;
        let y = center.y - definition.height / 2.0;
        debug!(template = template.id, "Adding furniture from template");
        let item = self.place(definition, x, y);
        self.commit();
        Ok(item)
    }

    /// Places another instance of an inventory definition, then commits.
    pub fn place_existing_furniture(&mut self, furniture_id: &str, x: f64, y: f64) -> DesignerResult<ItemRef> {
        if !self.inventory.contains_key(furniture_id) {
            return Err(DesignerError::UnknownFurniture(furniture_id.to_string()));
        }
        self.floor_plan
            .furniture_instances
            .push(FurnitureInstance::new(furniture_id, x, y));
        let item = ItemRef::Furniture {
            index: self.floor_plan.furniture_instances.len() - 1,
            furniture_id: furniture_id.to_string(),
        };
        self.commit();
        Ok(item)
    }

    /// Applies the form to a furniture item: the shared definition takes the
    /// name, type, size and color, the instance takes the position.
    ///
    /// Returns `Ok(false)` when the item does not resolve.
    pub fn update_furniture_item(&mut self, item: &ItemRef, draft: FurnitureDraft) -> DesignerResult<bool> {
        let Some(view) = self.item(item) else {
            return Ok(false);
        };
        let ItemRef::Furniture { index, furniture_id } = &view.item else {
            return Ok(false);
        };

        let Some(definition) = self.inventory.get(furniture_id) else {
            return Ok(false);
        };
        let updated = FurnitureDefinition {
            id: definition.id.clone(),
            name: draft.name,
            furniture_type: draft.furniture_type,
            width: draft.width,
            height: draft.height,
            color: draft.color,
        };
        updated.validate()?;

        self.inventory.insert(furniture_id.clone(), updated);
        if let Some(instance) = self.floor_plan.furniture_instances.get_mut(*index) {
            instance.x = draft.x;
            instance.y = draft.y;
        }
        self.commit();
        Ok(true)
    }

    /// Applies the form to the first placement of `furniture_id`.
    pub fn update_furniture(&mut self, furniture_id: &str, draft: FurnitureDraft) -> DesignerResult<bool> {
        match resolver::resolve_id(furniture_id, &self.floor_plan, &self.inventory) {
            Some(item @ ItemRef::Furniture { .. }) => self.update_furniture_item(&item, draft),
            _ => Ok(false),
        }
    }

    /// Applies the form to the selected furniture, if furniture is selected.
    pub fn update_selected_furniture(&mut self, draft: FurnitureDraft) -> DesignerResult<bool> {
        match self.selection.selected().cloned() {
            Some(item @ ItemRef::Furniture { .. }) => self.update_furniture_item(&item, draft),
            _ => Ok(false),
        }
    }
}

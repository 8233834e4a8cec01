//! The named floor plan collection.
//!
//! The live plan is always stored in the collection under its own name.
//! Switching, creating and renaming plans are ordinary commits, so they can
//! be undone like any other edit.

use floorplanner_core::constants::DEFAULT_FLOOR_PLAN_NAME;
use floorplanner_core::error::DocumentError;
use floorplanner_core::FloorPlan;
use std::path::Path;
use tracing::info;

use super::DesignerState;
use crate::error::{DesignerError, DesignerResult};

impl DesignerState {
    /// Names of every stored floor plan, sorted.
    pub fn floor_plan_names(&self) -> Vec<&str> {
        self.floor_plans.keys().map(String::as_str).collect()
    }

    fn unique_untitled_name(&self) -> String {
        let mut name = DEFAULT_FLOOR_PLAN_NAME.to_string();
        let mut counter = 1;
        while self.floor_plans.contains_key(&name) {
            name = format!("{DEFAULT_FLOOR_PLAN_NAME} {counter}");
            counter += 1;
        }
        name
    }

    fn load_floor_plan(&mut self, plan: FloorPlan) {
        self.sync_collection();
        self.floor_plans.insert(plan.name.clone(), plan.clone());
        self.floor_plan = plan;
        self.selection.clear();
        self.commit();
    }

    /// Creates an empty floor plan named `Untitled` (or `Untitled 1`, ...)
    /// and switches to it. Returns the new name.
    pub fn new_floor_plan(&mut self) -> String {
        let name = self.unique_untitled_name();
        info!(floor_plan = %name, "Creating floor plan");
        self.load_floor_plan(FloorPlan::named(name.clone()));
        name
    }

    /// Switches to a stored floor plan.
    pub fn select_floor_plan(&mut self, name: &str) -> DesignerResult<()> {
        if name == self.current_floor_plan_name {
            return Ok(());
        }
        let plan = self
            .floor_plans
            .get(name)
            .cloned()
            .ok_or_else(|| DesignerError::FloorPlanNotFound(name.to_string()))?;
        info!(floor_plan = %name, "Switching floor plan");
        self.load_floor_plan(plan);
        Ok(())
    }

    /// Renames the current floor plan.
    pub fn rename_floor_plan(&mut self, name: &str) -> DesignerResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DocumentError::EmptyName.into());
        }
        if name == self.current_floor_plan_name {
            return Ok(());
        }
        if self.floor_plans.contains_key(name) {
            return Err(DesignerError::FloorPlanExists(name.to_string()));
        }
        self.floor_plan.name = name.to_string();
        self.commit();
        Ok(())
    }

    /// Deletes the current floor plan and switches to the first remaining
    /// one, or to a fresh default if none is left. History restarts from
    /// the plan switched to.
    pub fn delete_floor_plan(&mut self) {
        let deleted = self.current_floor_plan_name.clone();
        self.floor_plans.remove(&deleted);

        let plan = self
            .floor_plans
            .values()
            .next()
            .cloned()
            .unwrap_or_default();
        info!(deleted = %deleted, floor_plan = %plan.name, "Deleted floor plan");

        self.current_floor_plan_name = plan.name.clone();
        self.floor_plans.insert(plan.name.clone(), plan.clone());
        self.floor_plan = plan.clone();
        self.selection.clear();
        self.history.reset(plan);
        self.persist_history();
        self.persist_durable();
    }

    /// Sets the background image from a data URI. An `Untitled` plan is
    /// renamed after the file, unless another plan already has that name.
    pub fn set_background_image(&mut self, data_uri: impl Into<String>, file_name: &str) {
        if self.floor_plan.name == DEFAULT_FLOOR_PLAN_NAME {
            let stem = Path::new(file_name)
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::trim)
                .unwrap_or_default();
            if !stem.is_empty() && !self.floor_plans.contains_key(stem) {
                self.floor_plan.name = stem.to_string();
            }
        }
        self.floor_plan.background_image = Some(data_uri.into());
        self.commit();
    }

    pub fn clear_background_image(&mut self) {
        if self.floor_plan.background_image.take().is_some() {
            self.commit();
        }
    }

    /// Sets the background image scale. Non-positive values are ignored.
    pub fn set_image_scale(&mut self, scale: f64) -> bool {
        if !scale.is_finite() || scale <= 0.0 || scale == self.floor_plan.image_scale {
            return false;
        }
        self.floor_plan.image_scale = scale;
        self.commit();
        true
    }
}

//! Zoom, display settings and hit testing for designer state.
//!
//! None of these touch the document, so nothing here is recorded in history.

use floorplanner_core::Point;
use floorplanner_settings::Theme;

use super::DesignerState;
use crate::error::DesignerResult;
use crate::input::{Edge, PointerTarget};
use crate::resolver::{self, PlaceableItem};

/// How close to an edge of the selected item, in screen pixels, a pointer
/// must be to grab its resize handle.
const HANDLE_TOLERANCE_PX: f64 = 6.0;

fn handle_at(view: &PlaceableItem, point: Point, tolerance: f64) -> Option<Edge> {
    let within_x = point.x >= view.x - tolerance && point.x <= view.right() + tolerance;
    let within_y = point.y >= view.y - tolerance && point.y <= view.bottom() + tolerance;
    if !(within_x && within_y) {
        return None;
    }
    Edge::ALL.into_iter().find(|edge| {
        let distance = match edge {
            Edge::North => point.y - view.y,
            Edge::South => point.y - view.bottom(),
            Edge::East => point.x - view.right(),
            Edge::West => point.x - view.x,
        };
        distance.abs() <= tolerance
    })
}

impl DesignerState {
    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
        self.persist_app_state();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
        self.persist_app_state();
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.viewport.set_zoom(zoom);
        self.persist_app_state();
    }

    /// Back to 100% with no pan.
    pub fn reset_view(&mut self) {
        self.viewport.reset();
        self.persist_app_state();
    }

    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.viewport.set_canvas_size(width, height);
    }

    pub fn set_grid_size(&mut self, grid_size: f64) {
        self.display.set_grid_size(grid_size);
        self.persist_app_state();
    }

    pub fn set_grid_opacity(&mut self, opacity: f64) {
        self.display.set_grid_opacity(opacity);
        self.persist_app_state();
    }

    pub fn set_wall_color(&mut self, color: &str) -> DesignerResult<()> {
        self.display.set_wall_color(color)?;
        self.persist_app_state();
        Ok(())
    }

    pub fn set_highlight_color(&mut self, color: &str) -> DesignerResult<()> {
        self.display.set_highlight_color(color)?;
        self.persist_app_state();
        Ok(())
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.display.theme = theme;
        self.persist_app_state();
    }

    /// What sits under a screen position: a resize handle of the selected
    /// item, then the topmost item, then the background.
    pub fn pointer_target(&self, screen_x: f64, screen_y: f64) -> PointerTarget {
        let point = self.viewport.screen_to_document(screen_x, screen_y);

        if let Some(selected) = self.selected_item() {
            let tolerance = HANDLE_TOLERANCE_PX / self.viewport.zoom();
            if let Some(edge) = handle_at(&selected, point, tolerance) {
                return PointerTarget::ResizeHandle(selected.item, edge);
            }
        }

        match resolver::hit_test(point, &self.floor_plan, &self.inventory) {
            Some(item) => PointerTarget::Item(item),
            None => PointerTarget::Background,
        }
    }
}

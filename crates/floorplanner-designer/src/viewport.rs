//! Viewport and coordinate transformation for the layout canvas.
//!
//! Handles conversion between screen coordinates (pixels) and document
//! coordinates (inches). The pan offset is kept in document units, so the
//! mapping is:
//!
//! ```text
//! screen = (document + pan) * zoom
//! document = screen / zoom - pan
//! ```
//!
//! Every pointer delta must go through [`Viewport::screen_delta_to_document`]
//! before it touches a document coordinate.

use std::fmt;

use floorplanner_core::constants::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use floorplanner_core::Point;

/// Zoom and pan state of the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a viewport for a canvas of the given pixel size at 100% zoom.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            canvas_width,
            canvas_height,
        }
    }

    /// Gets the canvas width.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Gets the canvas height.
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when the window resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to `MIN_ZOOM..=MAX_ZOOM`.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    /// Zooms in by one step.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    /// Zooms out by one step.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    /// Resets zoom to 1.0 (100%).
    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom < MAX_ZOOM
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom > MIN_ZOOM
    }

    /// Gets the pan offset in document units.
    pub fn pan(&self) -> Point {
        Point::new(self.pan_x, self.pan_y)
    }

    /// Sets the pan offset in document units.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a delta in document units.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Resets pan to the origin.
    pub fn reset_pan(&mut self) {
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    /// Resets zoom and pan.
    pub fn reset(&mut self) {
        self.reset_zoom();
        self.reset_pan();
    }

    /// Converts a screen-space movement into a document-space movement.
    pub fn screen_delta_to_document(&self, dx: f64, dy: f64) -> (f64, f64) {
        (dx / self.zoom, dy / self.zoom)
    }

    /// Converts a screen position to document coordinates.
    pub fn screen_to_document(&self, screen_x: f64, screen_y: f64) -> Point {
        Point::new(
            screen_x / self.zoom - self.pan_x,
            screen_y / self.zoom - self.pan_y,
        )
    }

    /// Converts document coordinates to a screen position.
    pub fn document_to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        ((x + self.pan_x) * self.zoom, (y + self.pan_y) * self.zoom)
    }

    /// The document point shown at the middle of the canvas.
    pub fn visible_center(&self) -> Point {
        self.screen_to_document(self.canvas_width / 2.0, self.canvas_height / 2.0)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.0}% | Pan: ({:.1}, {:.1})",
            self.zoom * 100.0,
            self.pan_x,
            self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_steps_and_clamps() {
        let mut viewport = Viewport::default();
        viewport.zoom_in();
        assert_eq!(viewport.zoom(), 1.25);
        viewport.set_zoom(10.0);
        assert_eq!(viewport.zoom(), 3.0);
        assert!(!viewport.can_zoom_in());
        viewport.zoom_in();
        assert_eq!(viewport.zoom(), 3.0);
        viewport.set_zoom(0.25);
        viewport.zoom_out();
        assert_eq!(viewport.zoom(), 0.25);
        assert!(!viewport.can_zoom_out());
        viewport.set_zoom(f64::NAN);
        assert_eq!(viewport.zoom(), 0.25);
    }

    #[test]
    fn test_round_trip_conversion() {
        let mut viewport = Viewport::default();
        viewport.set_zoom(2.0);
        viewport.set_pan(10.0, -5.0);
        let (sx, sy) = viewport.document_to_screen(100.0, 40.0);
        assert_eq!((sx, sy), (220.0, 70.0));
        let back = viewport.screen_to_document(sx, sy);
        assert!((back.x - 100.0).abs() < 0.01);
        assert!((back.y - 40.0).abs() < 0.01);
    }

    #[test]
    fn test_delta_is_divided_by_zoom() {
        let mut viewport = Viewport::default();
        viewport.set_zoom(2.0);
        viewport.set_pan(500.0, 500.0);
        assert_eq!(viewport.screen_delta_to_document(30.0, -12.0), (15.0, -6.0));
    }

    #[test]
    fn test_visible_center() {
        let mut viewport = Viewport::new(800.0, 600.0);
        assert_eq!(viewport.visible_center(), Point::new(400.0, 300.0));
        viewport.set_zoom(2.0);
        viewport.pan_by(-100.0, 0.0);
        assert_eq!(viewport.visible_center(), Point::new(300.0, 150.0));
    }

    #[test]
    fn test_display() {
        let mut viewport = Viewport::default();
        viewport.set_zoom(1.5);
        viewport.set_pan(12.0, 3.5);
        assert_eq!(viewport.to_string(), "Zoom: 150% | Pan: (12.0, 3.5)");
    }
}

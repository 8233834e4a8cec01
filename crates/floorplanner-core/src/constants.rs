//! Shared constants for Floorplanner.
//!
//! All lengths are in inches (document space).

/// Maximum number of floor plan snapshots kept by the undo history.
pub const MAX_HISTORY: usize = 50;

/// Name given to a freshly seeded floor plan.
pub const DEFAULT_FLOOR_PLAN_NAME: &str = "Untitled";

/// Default grid cell size in inches.
pub const DEFAULT_GRID_SIZE: f64 = 12.0;

/// Smallest grid cell size accepted anywhere.
pub const MIN_GRID_SIZE: f64 = 1.0;

/// Default grid line opacity (0.0 - 1.0).
pub const DEFAULT_GRID_OPACITY: f64 = 0.2;

/// Default wall and highlight color.
pub const DEFAULT_ACCENT_COLOR: &str = "#377c7c";

/// Default room footprint (10' x 20').
pub const DEFAULT_ROOM_WIDTH: f64 = 120.0;
pub const DEFAULT_ROOM_HEIGHT: f64 = 240.0;

/// Offset applied to a duplicated item, in both axes.
pub const DUPLICATE_OFFSET: f64 = 50.0;

/// Suffix appended to the name of a duplicated room.
pub const COPY_SUFFIX: &str = " (Copy)";

/// Zoom controls.
pub const ZOOM_STEP: f64 = 0.25;
pub const MIN_ZOOM: f64 = 0.25;
pub const MAX_ZOOM: f64 = 3.0;

/// Square inches per square foot.
pub const SQUARE_INCHES_PER_SQUARE_FOOT: f64 = 144.0;

//! # Floorplanner
//!
//! A 2-D floor plan editor core: rooms and furniture on a zoomable,
//! grid-snapped canvas with undo/redo and two-tier persistence.
//!
//! This is the top-level facade crate. It re-exports the workspace crates
//! and owns process-wide setup such as logging.
//!
//! ## Crates
//!
//! - `floorplanner-core`: document model, units and geometry helpers
//! - `floorplanner-settings`: display settings, storage backends, persistence
//! - `floorplanner-designer`: item resolution, gestures, history, selection

pub use floorplanner_core as core;
pub use floorplanner_designer as designer;
pub use floorplanner_settings as settings;

pub use floorplanner_core::{FloorPlan, Livability};
pub use floorplanner_designer::{DesignerState, ItemRef, RoomDraft};
pub use floorplanner_settings::{FileStore, KeyValueStore, MemoryStore};

use std::fmt::Write as _;

/// Version of Floorplanner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date of Floorplanner
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize structured logging with tracing
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_thread_ids(true)
                .with_line_number(true),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// One-screen textual summary of the live document.
pub fn summarize(state: &DesignerState) -> String {
    let plan = state.floor_plan();
    let mut out = String::new();

    let _ = writeln!(out, "Floor plan: {}", plan.name);
    let _ = writeln!(out, "Saved plans: {}", state.floor_plan_names().join(", "));
    let _ = writeln!(
        out,
        "Rooms: {}  Furniture: {}",
        plan.rooms.len(),
        state.visible_furniture().count()
    );
    for room in &plan.rooms {
        let _ = writeln!(
            out,
            "  {:<24} {:>6} x {:<6} {:>6} sq ft  {:?}",
            room.name, room.width, room.height, room.square_footage, room.livability
        );
    }
    let _ = writeln!(
        out,
        "Livable: {} sq ft  Non-livable: {} sq ft",
        plan.total_square_footage(Livability::Livable),
        plan.total_square_footage(Livability::NonLivable)
    );
    let _ = write!(
        out,
        "History: {} of {}",
        state.history().cursor() + 1,
        state.history().len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_rooms_and_totals() {
        let mut state = DesignerState::new();
        state
            .add_room(RoomDraft::new("Kitchen", 120.0, 144.0))
            .unwrap();
        state
            .add_room(RoomDraft::new("Garage", 240.0, 240.0).with_livability(Livability::NonLivable))
            .unwrap();

        let text = summarize(&state);
        assert!(text.contains("Rooms: 2  Furniture: 0"));
        assert!(text.contains("Kitchen"));
        assert!(text.contains("Livable: 120 sq ft  Non-livable: 400 sq ft"));
        assert!(text.ends_with("History: 3 of 3"));
    }
}

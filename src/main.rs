use std::path::PathBuf;

use anyhow::Context;
use floorplanner::settings::default_storage_dir;
use floorplanner::{
    init_logging, summarize, DesignerState, FileStore, MemoryStore, BUILD_DATE, VERSION,
};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!(version = VERSION, build_date = BUILD_DATE, "Starting Floorplanner");

    // An explicit directory wins over the platform data dir.
    let dir = match std::env::args_os().nth(1) {
        Some(dir) => PathBuf::from(dir),
        None => default_storage_dir()?,
    };
    let durable = FileStore::open(&dir)
        .with_context(|| format!("Failed to open storage at {}", dir.display()))?;

    let mut state = DesignerState::with_persistence(durable, MemoryStore::new());
    info!(
        plan = %state.floor_plan().name,
        rooms = state.floor_plan().rooms.len(),
        dir = %dir.display(),
        "Loaded floor plan"
    );

    println!("{}", summarize(&state));
    state.save();

    Ok(())
}

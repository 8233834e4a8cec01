//! # Floorplanner Designer
//!
//! This crate provides the interactive editing core for floor plans: placing,
//! dragging, resizing and deleting rooms and furniture on a zoomable,
//! pannable canvas with grid snapping and undo/redo.
//!
//! ## Core Components
//!
//! - **Item Resolver**: one reference type ([`ItemRef`]) for rooms, which own
//!   their geometry, and furniture instances, which borrow their size from a
//!   shared definition
//! - **Layout Editor**: the pointer gesture state machine (pan, drag, resize)
//! - **History**: bounded linear undo/redo over floor plan snapshots
//! - **Viewport**: zoom, pan and screen/document coordinate conversion
//! - **Templates**: the built-in furniture catalog
//! - **Designer State**: the owning context that wires all of the above to
//!   the persistence layer
//!
//! ## Architecture
//!
//! ```text
//! input events
//!   └── LayoutEditor (gesture state machine)
//!         └── EditorHost = DesignerState
//!               ├── ItemResolver (room / furniture mutation)
//!               ├── HistoryManager (commit on gesture end)
//!               └── Persistence (durable + volatile tiers)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use floorplanner_designer::{DesignerState, PointerEvent, RoomDraft};
//!
//! let mut state = DesignerState::new();
//! let id = state.add_room(RoomDraft::default()).unwrap();
//! assert_eq!(state.resolve(&id).unwrap().width, 120.0);
//! assert!(state.undo());
//! assert!(state.floor_plan().rooms.is_empty());
//! # let _ = PointerEvent::primary(0.0, 0.0);
//! ```

pub mod designer_state;
pub mod error;
pub mod history;
pub mod input;
pub mod keyboard;
pub mod layout_editor;
pub mod resolver;
pub mod selection;
pub mod templates;
pub mod viewport;

pub use designer_state::{BoxedStore, DesignerState, FurnitureDraft, RoomDraft};
pub use error::{DesignerError, DesignerResult};
pub use history::HistoryManager;
pub use input::{
    Edge, EventResponse, Key, KeyEvent, Modifiers, PointerButton, PointerEvent, PointerTarget,
};
pub use keyboard::{shortcut_for, ShortcutAction};
pub use layout_editor::{EditorHost, GestureState, LayoutEditor};
pub use resolver::{hit_test, resolve, resolve_id, ItemKind, ItemRef, ItemResolver, PlaceableItem};
pub use selection::{SelectionState, SidebarTab};
pub use templates::{
    find_template, furniture_types, templates_in, FurnitureCategory, FurnitureTemplate,
    FURNITURE_TEMPLATES,
};
pub use viewport::Viewport;

//! Pointer gesture state machine for the layout canvas.
//!
//! [`LayoutEditor`] turns raw pointer events into pans, drags and resizes.
//! It owns no document data: everything goes through an [`EditorHost`],
//! which [`DesignerState`](crate::DesignerState) implements.
//!
//! Moves during a gesture are applied live and unsnapped, and are never
//! recorded in history. When the gesture ends the item is snapped to the
//! grid and committed once, so one drag is one undo step.
//!
//! All pointer deltas are screen pixels and are divided by the zoom factor
//! before they touch a document coordinate.

use floorplanner_core::snap_to_grid;
use tracing::trace;

use crate::input::{Edge, EventResponse, PointerButton, PointerEvent, PointerTarget};
use crate::resolver::{ItemRef, PlaceableItem};
use crate::viewport::Viewport;

/// Current gesture. Only one can be active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Panning,
    Dragging(ItemRef),
    Resizing(ItemRef, Edge),
}

/// What the editor needs from the state that owns the document.
pub trait EditorHost {
    fn viewport(&self) -> &Viewport;

    fn viewport_mut(&mut self) -> &mut Viewport;

    /// Grid cell size in inches.
    fn grid_size(&self) -> f64;

    /// Current geometry of `item`, or `None` if it no longer exists.
    fn item(&self, item: &ItemRef) -> Option<PlaceableItem>;

    fn move_item(&mut self, item: &ItemRef, x: f64, y: f64) -> bool;

    fn resize_item(&mut self, item: &ItemRef, width: f64, height: f64) -> bool;

    /// Select `item` and show its details.
    fn select(&mut self, item: ItemRef);

    fn clear_selection(&mut self);

    /// Record the current floor plan as one undo step.
    fn commit(&mut self);

    /// Called after the viewport pans.
    fn view_changed(&mut self) {}
}

/// The gesture engine.
#[derive(Debug, Clone, Default)]
pub struct LayoutEditor {
    state: GestureState,
    last: Option<(f64, f64)>,
}

impl LayoutEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == GestureState::Idle
    }

    fn wants_pan(event: &PointerEvent) -> bool {
        event.button != PointerButton::Primary || event.modifiers.shift
    }

    /// Start a gesture. Ignored while another gesture is in progress.
    pub fn pointer_down<H: EditorHost>(
        &mut self,
        host: &mut H,
        target: PointerTarget,
        event: PointerEvent,
    ) -> EventResponse {
        if !self.is_idle() {
            return EventResponse::IGNORED;
        }

        match target {
            PointerTarget::ResizeHandle(item, edge) if event.button == PointerButton::Primary => {
                let Some(view) = host.item(&item) else {
                    return EventResponse::IGNORED;
                };
                host.select(view.item.clone());
                self.begin(GestureState::Resizing(view.item, edge), &event);
                EventResponse::handled()
            }
            _ if Self::wants_pan(&event) => {
                self.begin(GestureState::Panning, &event);
                EventResponse::consumed()
            }
            PointerTarget::Item(item) | PointerTarget::ResizeHandle(item, _) => {
                let Some(view) = host.item(&item) else {
                    return EventResponse::IGNORED;
                };
                host.select(view.item.clone());
                self.begin(GestureState::Dragging(view.item), &event);
                EventResponse::handled()
            }
            PointerTarget::Background => {
                host.clear_selection();
                EventResponse::handled()
            }
        }
    }

    fn begin(&mut self, state: GestureState, event: &PointerEvent) {
        trace!(?state, "Gesture started");
        self.state = state;
        self.last = Some((event.x, event.y));
    }

    /// Apply a live, uncommitted update for the active gesture.
    pub fn pointer_move<H: EditorHost>(
        &mut self,
        host: &mut H,
        event: PointerEvent,
    ) -> EventResponse {
        let Some((last_x, last_y)) = self.last else {
            return EventResponse::IGNORED;
        };
        self.last = Some((event.x, event.y));
        let (dx, dy) = host
            .viewport()
            .screen_delta_to_document(event.x - last_x, event.y - last_y);

        match self.state.clone() {
            GestureState::Idle => EventResponse::IGNORED,
            GestureState::Panning => {
                host.viewport_mut().pan_by(dx, dy);
                host.view_changed();
                EventResponse::handled()
            }
            GestureState::Dragging(item) => {
                let Some(view) = host.item(&item) else {
                    return EventResponse::IGNORED;
                };
                host.move_item(&view.item, view.x + dx, view.y + dy);
                self.state = GestureState::Dragging(view.item);
                EventResponse::handled()
            }
            GestureState::Resizing(item, edge) => {
                let Some(view) = host.item(&item) else {
                    return EventResponse::IGNORED;
                };
                let grid = host.grid_size();
                resize_live(host, &view, edge, dx, dy, grid);
                self.state = GestureState::Resizing(view.item, edge);
                EventResponse::handled()
            }
        }
    }

    /// End the active gesture, snapping and committing any edit.
    pub fn pointer_up<H: EditorHost>(
        &mut self,
        host: &mut H,
        _event: PointerEvent,
    ) -> EventResponse {
        self.finish(host)
    }

    /// The window lost focus or the pointer left the canvas. The gesture is
    /// finished exactly as if the pointer had been released.
    pub fn blur<H: EditorHost>(&mut self, host: &mut H) -> EventResponse {
        self.finish(host)
    }

    /// The native context menu is always suppressed so the secondary
    /// button can pan.
    pub fn context_menu(&self) -> EventResponse {
        EventResponse::consumed()
    }

    fn finish<H: EditorHost>(&mut self, host: &mut H) -> EventResponse {
        let state = std::mem::take(&mut self.state);
        self.last = None;
        let grid = host.grid_size();

        match state {
            GestureState::Idle => EventResponse::IGNORED,
            GestureState::Panning => EventResponse::handled(),
            GestureState::Dragging(item) => {
                let Some(view) = host.item(&item) else {
                    return EventResponse::IGNORED;
                };
                let (x, y) = (snap_to_grid(view.x, grid), snap_to_grid(view.y, grid));
                host.move_item(&view.item, x, y);
                host.commit();
                EventResponse::handled()
            }
            GestureState::Resizing(item, edge) => {
                let Some(view) = host.item(&item) else {
                    return EventResponse::IGNORED;
                };
                resize_final(host, &view, edge, grid);
                host.commit();
                EventResponse::handled()
            }
        }
    }
}

fn resize_live<H: EditorHost>(
    host: &mut H,
    view: &PlaceableItem,
    edge: Edge,
    dx: f64,
    dy: f64,
    grid: f64,
) {
    let item = &view.item;
    match edge {
        Edge::East => {
            host.resize_item(item, (view.width + dx).max(grid), view.height);
        }
        Edge::South => {
            host.resize_item(item, view.width, (view.height + dy).max(grid));
        }
        Edge::West => {
            let width = (view.width - dx).max(grid);
            host.move_item(item, view.right() - width, view.y);
            host.resize_item(item, width, view.height);
        }
        Edge::North => {
            let height = (view.height - dy).max(grid);
            host.move_item(item, view.x, view.bottom() - height);
            host.resize_item(item, view.width, height);
        }
    }
}

/// Snap both dimensions to the grid. The edge opposite the dragged one
/// stays put, and on the other axis the top or left edge does.
fn resize_final<H: EditorHost>(host: &mut H, view: &PlaceableItem, edge: Edge, grid: f64) {
    let item = &view.item;
    let width = snap_to_grid(view.width, grid).max(grid);
    let height = snap_to_grid(view.height, grid).max(grid);

    let (mut x, mut y) = (view.x, view.y);
    if edge.moves_origin() {
        if edge.is_horizontal() {
            x += view.width - width;
        } else {
            y += view.height - height;
        }
    }
    if (x, y) != (view.x, view.y) {
        host.move_item(item, x, y);
    }
    host.resize_item(item, width, height);
}

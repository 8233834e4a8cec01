//! Pointer gestures for designer state.

use super::DesignerState;
use crate::input::{EventResponse, PointerEvent, PointerTarget};
use crate::layout_editor::{EditorHost, GestureState, LayoutEditor};
use crate::resolver::{ItemRef, PlaceableItem};
use crate::viewport::Viewport;

impl EditorHost for DesignerState {
    fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    fn grid_size(&self) -> f64 {
        self.display.grid_size
    }

    fn item(&self, item: &ItemRef) -> Option<PlaceableItem> {
        DesignerState::item(self, item)
    }

    fn move_item(&mut self, item: &ItemRef, x: f64, y: f64) -> bool {
        self.items().move_item(item, x, y)
    }

    fn resize_item(&mut self, item: &ItemRef, width: f64, height: f64) -> bool {
        self.items().resize_item(item, width, height)
    }

    fn select(&mut self, item: ItemRef) {
        self.selection.select(item);
    }

    fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn commit(&mut self) {
        DesignerState::commit(self);
    }
}

impl DesignerState {
    fn with_editor(
        &mut self,
        f: impl FnOnce(&mut LayoutEditor, &mut Self) -> EventResponse,
    ) -> EventResponse {
        let mut editor = std::mem::take(&mut self.editor);
        let response = f(&mut editor, self);
        self.editor = editor;
        response
    }

    /// Pointer pressed at a screen position. The target is found by
    /// [`DesignerState::pointer_target`].
    pub fn pointer_down(&mut self, event: PointerEvent) -> EventResponse {
        let target = self.pointer_target(event.x, event.y);
        self.pointer_down_on(target, event)
    }

    /// Pointer pressed on a target the host already hit-tested.
    pub fn pointer_down_on(&mut self, target: PointerTarget, event: PointerEvent) -> EventResponse {
        let selected_before = self.selection.selected().cloned();
        let response = self.with_editor(|editor, state| editor.pointer_down(state, target, event));
        if self.selection.selected() != selected_before.as_ref() {
            self.persist_app_state();
        }
        response
    }

    pub fn pointer_move(&mut self, event: PointerEvent) -> EventResponse {
        self.with_editor(|editor, state| editor.pointer_move(state, event))
    }

    pub fn pointer_up(&mut self, event: PointerEvent) -> EventResponse {
        let panning = *self.editor.state() == GestureState::Panning;
        let response = self.with_editor(|editor, state| editor.pointer_up(state, event));
        if panning {
            self.persist_app_state();
        }
        response
    }

    /// Window blur or pointer leaving the canvas.
    pub fn blur(&mut self) -> EventResponse {
        let panning = *self.editor.state() == GestureState::Panning;
        let response = self.with_editor(|editor, state| editor.blur(state));
        if panning {
            self.persist_app_state();
        }
        response
    }

    pub fn context_menu(&self) -> EventResponse {
        self.editor.context_menu()
    }
}

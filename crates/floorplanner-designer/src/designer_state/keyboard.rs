//! Keyboard shortcut dispatch for designer state.

use super::DesignerState;
use crate::input::{EventResponse, KeyEvent};
use crate::keyboard::{shortcut_for, ShortcutAction};

impl DesignerState {
    /// Runs the shortcut bound to `event`, if any. Every recognized shortcut
    /// asks the host to suppress its native handling, even when there was
    /// nothing to undo or delete.
    pub fn handle_key(&mut self, event: KeyEvent) -> EventResponse {
        let Some(action) = shortcut_for(&event) else {
            return EventResponse::IGNORED;
        };
        let handled = match action {
            ShortcutAction::Undo => self.undo(),
            ShortcutAction::Redo => self.redo(),
            ShortcutAction::DeleteSelected => self.delete_selected(),
        };
        EventResponse {
            handled,
            prevent_default: true,
        }
    }
}

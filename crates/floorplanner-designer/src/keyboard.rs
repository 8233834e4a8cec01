//! Keyboard shortcuts.

use crate::input::{Key, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Undo,
    Redo,
    DeleteSelected,
}

/// Map a key event to an editor shortcut.
///
/// Undo is Ctrl/Cmd+Z, redo is Ctrl/Cmd+Shift+Z or Ctrl/Cmd+Y, and Delete or
/// Backspace removes the selected item. Letter matching ignores case since
/// Shift changes the reported character on most platforms.
pub fn shortcut_for(event: &KeyEvent) -> Option<ShortcutAction> {
    let command = event.modifiers.command();
    match event.key {
        Key::Char(c) if command && c.eq_ignore_ascii_case(&'z') => {
            if event.modifiers.shift {
                Some(ShortcutAction::Redo)
            } else {
                Some(ShortcutAction::Undo)
            }
        }
        Key::Char(c) if command && c.eq_ignore_ascii_case(&'y') => Some(ShortcutAction::Redo),
        Key::Delete | Key::Backspace => Some(ShortcutAction::DeleteSelected),
        _ => None,
    }
}

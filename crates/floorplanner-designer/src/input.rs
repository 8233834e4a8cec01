//! Input events consumed by the layout editor.
//!
//! The host translates its toolkit's pointer and keyboard events into these
//! types. Pointer positions are always in screen pixels relative to the
//! canvas; the editor converts them through the [`Viewport`].
//!
//! [`Viewport`]: crate::viewport::Viewport

use crate::resolver::ItemRef;

/// Mouse button that triggered a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

/// Keyboard modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Cmd on macOS, the Windows key elsewhere.
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    pub fn meta() -> Self {
        Self {
            meta: true,
            ..Self::NONE
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Ctrl or Cmd, whichever the platform uses for shortcuts.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }

    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// A pointer event in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub button: PointerButton,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Primary button, no modifiers.
    pub fn primary(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn secondary(x: f64, y: f64) -> Self {
        Self {
            button: PointerButton::Secondary,
            ..Self::primary(x, y)
        }
    }

    pub fn middle(x: f64, y: f64) -> Self {
        Self {
            button: PointerButton::Middle,
            ..Self::primary(x, y)
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Side of the selected item that a resize handle sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    North,
    South,
    East,
    West,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::North, Edge::South, Edge::East, Edge::West];

    /// West and North resize against the opposite edge.
    pub fn moves_origin(self) -> bool {
        matches!(self, Edge::West | Edge::North)
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Edge::East | Edge::West)
    }
}

/// What sits under the pointer when a gesture starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    Background,
    Item(ItemRef),
    ResizeHandle(ItemRef, Edge),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Delete,
    Backspace,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }
}

/// How an event was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// The event changed editor state.
    pub handled: bool,
    /// The host must suppress its native handling of the event.
    pub prevent_default: bool,
}

impl EventResponse {
    pub const IGNORED: EventResponse = EventResponse {
        handled: false,
        prevent_default: false,
    };

    pub fn handled() -> Self {
        Self {
            handled: true,
            prevent_default: false,
        }
    }

    pub fn consumed() -> Self {
        Self {
            handled: true,
            prevent_default: true,
        }
    }
}

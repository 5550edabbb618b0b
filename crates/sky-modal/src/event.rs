//! Synthetic input events
//!
//! The controller consumes clicks and keydowns the way a delegated
//! capture-phase listener would, and records default suppression on the
//! event itself.

use sky_dom::NodeId;

/// Keys the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    Escape,
    Other,
}

/// Event payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEventKind {
    /// Pointer activation of an element
    Click { target: NodeId },
    /// Key press; the target is the document's active element
    Keydown { key: Key, shift: bool },
}

/// A dispatched input event
#[derive(Debug)]
pub struct InputEvent {
    kind: InputEventKind,
    default_prevented: bool,
}

impl InputEvent {
    /// A click on `target`
    pub fn click(target: NodeId) -> Self {
        Self {
            kind: InputEventKind::Click { target },
            default_prevented: false,
        }
    }

    /// A keydown with optional shift
    pub fn keydown(key: Key, shift: bool) -> Self {
        Self {
            kind: InputEventKind::Keydown { key, shift },
            default_prevented: false,
        }
    }

    pub fn kind(&self) -> InputEventKind {
        self.kind
    }

    /// Suppress the default action
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Check if the default action was suppressed
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

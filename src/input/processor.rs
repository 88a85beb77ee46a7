//! Converts raw host events into kernel commands.
//!
//! The `InputProcessor` owns the key-binding map and is the only thing
//! sitting between raw host events and the viewer's
//! [`execute`](crate::viewer::Viewer) step. It holds no per-key state; the
//! motion controller remembers held-key contributions itself.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::event::InputEvent;
use super::keyboard::KeyAction;
use super::Command;

/// Maps physical key strings to [`KeyAction`] values.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyW"`, `"Space"`, `"Escape"`, etc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → action.
    bindings: HashMap<String, KeyAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyW".into(), KeyAction::MoveForward),
            ("KeyS".into(), KeyAction::MoveBack),
            ("KeyA".into(), KeyAction::StrafeLeft),
            ("KeyD".into(), KeyAction::StrafeRight),
            ("Space".into(), KeyAction::Jump),
            ("Escape".into(), KeyAction::Quit),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the action for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings.get(key).copied()
    }
}

/// Converts raw host events into [`Command`]s.
pub struct InputProcessor {
    /// Key string → action mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            key_bindings: KeyBindings::default(),
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self { key_bindings }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Process a raw input event and return zero or one commands.
    ///
    /// Unbound keys and releases of non-movement actions produce nothing.
    #[must_use]
    pub fn handle_event(&self, event: &InputEvent) -> Option<Command> {
        match event {
            InputEvent::KeyDown { key } => {
                match self.key_bindings.lookup(key)? {
                    KeyAction::Jump => Some(Command::Jump),
                    KeyAction::Quit => Some(Command::Quit),
                    action => action.move_direction().map(Command::MoveStart),
                }
            }
            InputEvent::KeyUp { key } => self
                .key_bindings
                .lookup(key)?
                .move_direction()
                .map(Command::MoveEnd),
            InputEvent::PointerMoved { x, y } => Some(Command::Look { x: *x, y: *y }),
            InputEvent::CloseRequested => Some(Command::Quit),
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

//! Input handling: event types, bindable actions, and the input processor
//! that converts raw host events into kernel commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Converts raw events into kernel commands.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use processor::{InputProcessor, KeyBindings};

use crate::motion::MoveDirection;

/// A kernel command produced from raw input by the [`InputProcessor`].
///
/// The viewer executes commands between frames; nothing here touches
/// camera or motion state directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// A movement key went down: start contributing in `MoveDirection`.
    MoveStart(MoveDirection),
    /// A movement key came up: remove that key's contribution.
    MoveEnd(MoveDirection),
    /// Request a jump impulse.
    Jump,
    /// Pointer moved to an absolute position; rotate and re-anchor.
    Look {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Stop the frame loop at the next iteration boundary.
    Quit,
}

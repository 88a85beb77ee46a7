use serde::{Deserialize, Serialize};

use crate::motion::MoveDirection;

/// Kernel-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// KeyW = "move_forward"
/// Space = "jump"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Walk along the camera's forward direction.
    MoveForward,
    /// Walk against the camera's forward direction.
    MoveBack,
    /// Strafe against the camera's right direction.
    StrafeLeft,
    /// Strafe along the camera's right direction.
    StrafeRight,
    /// Trigger the jump impulse.
    Jump,
    /// Exit the frame loop.
    Quit,
}

impl KeyAction {
    /// The movement direction this action drives, if it is a movement
    /// action.
    #[must_use]
    pub fn move_direction(self) -> Option<MoveDirection> {
        match self {
            Self::MoveForward => Some(MoveDirection::Forward),
            Self::MoveBack => Some(MoveDirection::Back),
            Self::StrafeLeft => Some(MoveDirection::Left),
            Self::StrafeRight => Some(MoveDirection::Right),
            Self::Jump | Self::Quit => None,
        }
    }
}

/// Platform-agnostic input events.
///
/// The host collaborator translates its native window events into these and
/// delivers them through [`Host::poll_events`](crate::viewer::Host) once per
/// frame. Key codes are strings in the `winit::keyboard::KeyCode` debug
/// format: `"KeyW"`, `"Space"`, `"Escape"`, etc.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key went down.
    KeyDown {
        /// Physical key code string.
        key: String,
    },
    /// A key came up.
    KeyUp {
        /// Physical key code string.
        key: String,
    },
    /// Pointer moved to an absolute screen position.
    PointerMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// The host asked the application to exit.
    CloseRequested,
}

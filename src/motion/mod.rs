//! Player motion: held-key velocity accumulation, collision-revert
//! integration, and the jump state machine.

/// Held-key state, velocity integration, and collision revert.
pub mod controller;
/// One-shot vertical impulse with linear deceleration.
pub mod jump;

pub use controller::{MotionController, MoveDirection, StepOutcome};
pub use jump::JumpState;

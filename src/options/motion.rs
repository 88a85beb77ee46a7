use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Walking and jumping parameters, all in per-frame units.
pub struct MotionOptions {
    /// Planar speed contributed by each held movement key (units/frame).
    pub walk_speed: f32,
    /// Vertical launch velocity of a jump (units/frame).
    pub jump_impulse: f32,
    /// Vertical deceleration applied every airborne frame (units/frame²).
    pub gravity: f32,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            walk_speed: 2.0,
            jump_impulse: 10.0,
            gravity: 1.0,
        }
    }
}

//! The jump state machine: a one-shot vertical impulse decelerated
//! linearly until the camera returns to ground level.

use crate::camera::Camera;

/// The ground plane height. The world is Z-up; walking happens at `z = 0`.
const GROUND_LEVEL: f32 = 0.0;

/// Two-state jump machine: grounded or airborne.
///
/// While airborne the vertical velocity contribution decreases by a fixed
/// deceleration every frame, unconditionally, whether or not the frame's
/// movement was blocked. The machine grounds itself when the camera drops
/// below the ground plane.
#[derive(Debug, Clone, Copy)]
pub struct JumpState {
    impulse: f32,
    gravity: f32,
    z_vel: f32,
    airborne: bool,
}

impl JumpState {
    /// Create a grounded jump machine with the given launch impulse
    /// (units/frame) and deceleration (units/frame²).
    #[must_use]
    pub fn new(impulse: f32, gravity: f32) -> Self {
        Self {
            impulse,
            gravity,
            z_vel: 0.0,
            airborne: false,
        }
    }

    /// Request a jump. A no-op while already airborne, so repeated
    /// triggers are idempotent.
    pub fn trigger(&mut self) {
        if self.airborne {
            return;
        }
        self.z_vel = self.impulse;
        self.airborne = true;
    }

    /// Per-frame update: apply gravity, then ground the machine if the
    /// camera has fallen below the ground plane.
    ///
    /// Grounding clamps the camera's vertical coordinate to exactly
    /// `GROUND_LEVEL` and zeroes the vertical velocity. A no-op while
    /// grounded.
    pub fn update(&mut self, camera: &mut Camera) {
        if !self.airborne {
            return;
        }
        self.z_vel -= self.gravity;

        if camera.location.z < GROUND_LEVEL {
            camera.location.z = GROUND_LEVEL;
            self.z_vel = 0.0;
            self.airborne = false;
        }
    }

    /// Current vertical velocity contribution (units/frame).
    #[must_use]
    pub fn z_vel(&self) -> f32 {
        self.z_vel
    }

    /// Whether a jump is in progress.
    #[must_use]
    pub fn airborne(&self) -> bool {
        self.airborne
    }
}

//! Held-key velocity accumulation and the integrate-then-revert step.
//!
//! Walking is planar: key contributions are computed from the XY components
//! of the camera basis at press time, so jumping and gravity own the
//! vertical axis exclusively.

use glam::{Vec2, Vec3};
use rustc_hash::FxHashMap;

use crate::camera::Camera;
use crate::motion::jump::JumpState;
use crate::scene::Scene;

/// Identity of a held movement contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Along the camera's forward direction.
    Forward,
    /// Against the camera's forward direction.
    Back,
    /// Against the camera's right direction.
    Left,
    /// Along the camera's right direction.
    Right,
}

/// What happened to this frame's movement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The translated position was accepted.
    Moved,
    /// A volume blocked the step; the camera was reverted in full.
    Blocked,
}

/// Maps held-key state to a velocity vector and integrates it into the
/// camera once per frame, reverting the step on collision.
///
/// Each press stores the exact delta it added, keyed by direction, and the
/// matching release subtracts that same delta: releasing a key undoes its
/// contribution precisely even if the camera rotated while it was held.
#[derive(Debug)]
pub struct MotionController {
    walk_speed: f32,
    velocity: Vec2,
    held: FxHashMap<MoveDirection, Vec2>,
    jump: JumpState,
}

impl MotionController {
    /// Create a controller with the given walk speed (units/frame) and
    /// jump machine.
    #[must_use]
    pub fn new(walk_speed: f32, jump: JumpState) -> Self {
        Self {
            walk_speed,
            velocity: Vec2::ZERO,
            held: FxHashMap::default(),
            jump,
        }
    }

    /// Current planar velocity (units/frame).
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Read access to the jump machine.
    #[must_use]
    pub fn jump(&self) -> &JumpState {
        &self.jump
    }

    /// A movement key went down: derive its delta from the current camera
    /// basis and add it to the running velocity.
    ///
    /// Repeats while the key is already held are ignored, so host key
    /// auto-repeat cannot stack contributions.
    pub fn press(&mut self, direction: MoveDirection, camera: &Camera) {
        if self.held.contains_key(&direction) {
            return;
        }
        let normal = camera.normal();
        let horizontal = camera.horizontal();
        let delta = match direction {
            MoveDirection::Forward => Vec2::new(normal.x, normal.y),
            MoveDirection::Back => Vec2::new(-normal.x, -normal.y),
            MoveDirection::Left => Vec2::new(-horizontal.x, -horizontal.y),
            MoveDirection::Right => Vec2::new(horizontal.x, horizontal.y),
        } * self.walk_speed;

        self.velocity += delta;
        let _ = self.held.insert(direction, delta);
    }

    /// A movement key came up: subtract the stored delta it added at press
    /// time. Releases without a matching press are ignored.
    pub fn release(&mut self, direction: MoveDirection) {
        if let Some(delta) = self.held.remove(&direction) {
            self.velocity -= delta;
        }
    }

    /// Request a jump impulse.
    pub fn trigger_jump(&mut self) {
        self.jump.trigger();
    }

    /// Advance the jump machine for this frame (gravity and grounding).
    pub fn update_jump(&mut self, camera: &mut Camera) {
        self.jump.update(camera);
    }

    /// Speculatively translate the camera by this frame's velocity, then
    /// accept or revert.
    ///
    /// The proposed position is classified against every scene volume in
    /// order; the first blocking volume reverts the whole step and stops
    /// the search. All-or-nothing: a blocked frame does not slide.
    pub fn integrate(&mut self, camera: &mut Camera, scene: &Scene) -> StepOutcome {
        let step = Vec3::new(self.velocity.x, self.velocity.y, self.jump.z_vel());
        camera.translate(step);

        if scene.first_blocking(camera.location).is_some() {
            camera.translate(-step);
            StepOutcome::Blocked
        } else {
            StepOutcome::Moved
        }
    }
}

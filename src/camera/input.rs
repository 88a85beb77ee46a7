//! Pointer-displacement look control.
//!
//! The pointer is anchored to a fixed screen-center point. Each pointer
//! event measures the offset from that anchor, converts it into a pair of
//! rotation angles, and asks the host to warp the pointer back to the
//! anchor. Because of the warp, every event's offset is small (bounded by
//! pointer travel since the previous event), so the scheme integrates
//! angular velocity proportional to pointer speed, not to absolute pointer
//! position.

use glam::Vec2;

use crate::camera::Camera;

/// Converts pointer positions into camera rotations.
#[derive(Debug, Clone, Copy)]
pub struct PointerLook {
    anchor: Vec2,
    sensitivity: f32,
}

impl PointerLook {
    /// Create a look controller anchored at `anchor` (screen pixels).
    ///
    /// `sensitivity` divides the pixel offset to produce radians; larger
    /// values turn more slowly.
    #[must_use]
    pub fn new(anchor: Vec2, sensitivity: f32) -> Self {
        Self {
            anchor,
            sensitivity,
        }
    }

    /// The fixed anchor the pointer is warped back to.
    #[must_use]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Apply the rotation for a pointer event at `(x, y)` and return the
    /// warp target the host must reposition the pointer to.
    ///
    /// Yaw is applied before pitch; the two rotations do not commute, and
    /// the order is part of the camera's observable behavior.
    pub fn apply(&self, camera: &mut Camera, x: f32, y: f32) -> Vec2 {
        let yaw = -(self.anchor.x - x) / self.sensitivity;
        let pitch = -(self.anchor.y - y) / self.sensitivity;

        camera.rotate_yaw(yaw.cos(), yaw.sin());
        camera.rotate_pitch(pitch.cos(), pitch.sin());

        self.anchor
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn test_camera() -> Camera {
        Camera::new(
            Vec3::ZERO,
            Vec3::X,
            Vec3::Y,
            (800, 600),
            1000.0,
            1000.0,
        )
    }

    #[test]
    fn event_at_the_anchor_leaves_the_basis_unchanged() {
        let mut cam = test_camera();
        let look = PointerLook::new(Vec2::new(400.0, 300.0), 1000.0);
        let warp = look.apply(&mut cam, 400.0, 300.0);
        assert_eq!(warp, Vec2::new(400.0, 300.0));
        assert!((cam.normal() - Vec3::X).length() < 1e-6);
        assert!((cam.horizontal() - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn horizontal_offset_yaws_by_offset_over_sensitivity() {
        let mut cam = test_camera();
        let look = PointerLook::new(Vec2::new(400.0, 300.0), 1000.0);
        // 100 px right of the anchor: yaw = 0.1 rad, no pitch.
        let _ = look.apply(&mut cam, 500.0, 300.0);
        let expected = 0.1f32;
        assert!((cam.normal().x - expected.cos()).abs() < 1e-6);
        assert!((cam.normal().y - expected.sin()).abs() < 1e-6);
        assert!(cam.normal().z.abs() < 1e-6);
    }

    #[test]
    fn vertical_offset_pitches_without_yaw() {
        let mut cam = test_camera();
        let look = PointerLook::new(Vec2::new(400.0, 300.0), 1000.0);
        // 50 px below the anchor: pitch = 0.05 rad downward.
        let _ = look.apply(&mut cam, 400.0, 350.0);
        assert!(cam.normal().z < 0.0);
        assert!((cam.horizontal() - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn warp_target_is_always_the_anchor() {
        let mut cam = test_camera();
        let anchor = Vec2::new(640.0, 360.0);
        let look = PointerLook::new(anchor, 250.0);
        assert_eq!(look.apply(&mut cam, 12.0, 700.0), anchor);
    }
}

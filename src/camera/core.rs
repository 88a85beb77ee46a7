//! The first-person viewpoint and its pose operators.
//!
//! # Coordinate system
//!
//! World space is Z-up: the ground plane is `z = 0`, walking happens in the
//! XY plane, and jumping moves Z. The camera's orientation is an orthonormal
//! basis of two stored unit vectors, `normal` (forward) and `horizontal`
//! (right), with `up` derived as their cross product.
//!
//! # Numerical drift
//!
//! Rotations are incremental: each call multiplies the stored vectors by a
//! small rotation rather than rebuilding them from absolute angles. Floating
//! point error therefore accumulates, and the basis is re-orthonormalized
//! (Gram–Schmidt) every `RENORM_INTERVAL` rotations to keep unit length
//! and orthogonality bounded over arbitrarily long sessions.

use glam::Vec3;

use crate::camera::projection::LineSegment;

/// Rotations between Gram–Schmidt renormalization passes.
const RENORM_INTERVAL: u32 = 128;

/// Smallest basis-vector length accepted as non-degenerate.
const DEGENERATE_EPS: f32 = 1e-6;

/// The sole first-person viewpoint.
///
/// Constructed once the host viewport size is known; mutated every frame by
/// rotation, translation, and the jump machine; never persisted.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye position in world space. Freely mutable; collision is the
    /// caller's concern, not the camera's.
    pub location: Vec3,
    /// Focal scale: screen pixels per unit of tangent.
    pub focal: f32,
    /// Geometry beyond this camera-space depth is not projected.
    pub draw_distance: f32,
    /// Viewport size in pixels, `(width, height)`.
    pub viewport: (u32, u32),

    normal: Vec3,
    horizontal: Vec3,
    rotations_until_renorm: u32,
    pub(crate) primitives: Vec<LineSegment>,
}

impl Camera {
    /// Create a camera at `location` with the given forward and right
    /// directions.
    ///
    /// The directions are normalized and orthogonalized once on entry.
    ///
    /// # Panics
    ///
    /// Panics if either direction is degenerate (near zero length) or the
    /// two are near parallel. A zero-length basis vector is a programming
    /// error and must not propagate as NaN.
    #[must_use]
    pub fn new(
        location: Vec3,
        normal: Vec3,
        horizontal: Vec3,
        viewport: (u32, u32),
        focal: f32,
        draw_distance: f32,
    ) -> Self {
        assert!(
            normal.length() > DEGENERATE_EPS && horizontal.length() > DEGENERATE_EPS,
            "degenerate camera basis vector"
        );
        let normal = normal.normalize();
        let horizontal = horizontal - normal * normal.dot(horizontal);
        assert!(
            horizontal.length() > DEGENERATE_EPS,
            "camera forward and right directions are parallel"
        );
        Self {
            location,
            focal,
            draw_distance,
            viewport,
            normal,
            horizontal: horizontal.normalize(),
            rotations_until_renorm: RENORM_INTERVAL,
            primitives: Vec::new(),
        }
    }

    /// Forward-facing unit direction.
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Right-facing unit direction, orthogonal to [`normal`](Self::normal).
    #[must_use]
    pub fn horizontal(&self) -> Vec3 {
        self.horizontal
    }

    /// Upward unit direction, derived from the stored basis.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.normal.cross(self.horizontal)
    }

    /// Rotate the basis about the world vertical axis by the angle whose
    /// cosine/sine pair is `(cos, sin)`.
    ///
    /// Both stored vectors turn by the same angle, so orthonormality is
    /// preserved. The rotation composes with the current orientation; it is
    /// never an absolute heading.
    pub fn rotate_yaw(&mut self, cos: f32, sin: f32) {
        self.normal = rotate_about_z(self.normal, cos, sin);
        self.horizontal = rotate_about_z(self.horizontal, cos, sin);
        self.after_rotation();
    }

    /// Rotate the basis about the camera's own horizontal axis (pitch).
    ///
    /// `horizontal` is the rotation axis and is left untouched; `normal`
    /// swings through the vertical plane it spans with `up`. Positive angles
    /// pitch the view downward.
    pub fn rotate_pitch(&mut self, cos: f32, sin: f32) {
        // Rodrigues with axis = horizontal; the parallel term vanishes
        // because normal ⟂ horizontal.
        let swing = self.horizontal.cross(self.normal);
        self.normal = self.normal * cos + swing * sin;
        self.after_rotation();
    }

    /// Add `delta` to the camera location. No validation: collision is
    /// checked by the caller, which reverts by translating back.
    pub fn translate(&mut self, delta: Vec3) {
        self.location += delta;
    }

    /// Countdown to the periodic Gram–Schmidt pass.
    fn after_rotation(&mut self) {
        debug_assert!(self.normal.is_finite() && self.horizontal.is_finite());
        self.rotations_until_renorm -= 1;
        if self.rotations_until_renorm == 0 {
            self.renormalize();
            self.rotations_until_renorm = RENORM_INTERVAL;
        }
    }

    /// Restore unit length and mutual orthogonality of the stored basis.
    fn renormalize(&mut self) {
        self.normal = self.normal.normalize();
        self.horizontal =
            (self.horizontal - self.normal * self.normal.dot(self.horizontal)).normalize();
    }
}

/// Rotate `v` about the world Z axis by the angle with the given
/// cosine/sine pair.
fn rotate_about_z(v: Vec3, cos: f32, sin: f32) -> Vec3 {
    Vec3::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera() -> Camera {
        Camera::new(
            Vec3::new(-200.0, 0.0, 0.0),
            Vec3::X,
            Vec3::Y,
            (800, 600),
            1000.0,
            1000.0,
        )
    }

    #[test]
    fn constructor_orthogonalizes_sloppy_input() {
        let cam = Camera::new(
            Vec3::ZERO,
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.5, 1.0, 0.0),
            (100, 100),
            1000.0,
            1000.0,
        );
        assert!((cam.normal().length() - 1.0).abs() < 1e-6);
        assert!((cam.horizontal().length() - 1.0).abs() < 1e-6);
        assert!(cam.normal().dot(cam.horizontal()).abs() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "degenerate")]
    fn constructor_rejects_zero_basis() {
        let _ = Camera::new(Vec3::ZERO, Vec3::ZERO, Vec3::Y, (100, 100), 1000.0, 1000.0);
    }

    #[test]
    fn yaw_quarter_turn_moves_forward_onto_old_right() {
        let mut cam = test_camera();
        let angle = std::f32::consts::FRAC_PI_2;
        cam.rotate_yaw(angle.cos(), angle.sin());
        assert!((cam.normal() - Vec3::Y).length() < 1e-6);
        assert!((cam.horizontal() - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn positive_pitch_looks_downward() {
        let mut cam = test_camera();
        let angle = 0.25f32;
        cam.rotate_pitch(angle.cos(), angle.sin());
        assert!(cam.normal().z < 0.0);
        // Pitch must not disturb the rotation axis itself.
        assert!((cam.horizontal() - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn basis_stays_orthonormal_over_ten_thousand_rotations() {
        let mut cam = test_camera();
        let yaw = 0.013f32;
        let pitch = -0.007f32;
        let (yc, ys) = (yaw.cos(), yaw.sin());
        let (pc, ps) = (pitch.cos(), pitch.sin());
        for _ in 0..5_000 {
            cam.rotate_yaw(yc, ys);
            cam.rotate_pitch(pc, ps);
        }
        assert!((cam.normal().length() - 1.0).abs() < 1e-4);
        assert!((cam.horizontal().length() - 1.0).abs() < 1e-4);
        assert!(cam.normal().dot(cam.horizontal()).abs() < 1e-4);
        assert!((cam.up().length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn translate_then_negated_translate_is_exact() {
        let mut cam = test_camera();
        let before = cam.location;
        let step = Vec3::new(1.25, -3.5, 0.5);
        cam.translate(step);
        cam.translate(-step);
        assert_eq!(cam.location, before);
    }
}

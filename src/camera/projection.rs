//! Perspective projection of scene volumes into screen-space line
//! primitives.
//!
//! Rendering is split in two, mirroring the frame loop: [`Camera::render`]
//! recomputes the primitive list from the current pose (pure math, no
//! surface access), then [`Camera::draw`] writes that list to the external
//! [`Surface`](crate::viewer::Surface). Pixels are always the host's
//! business.

use glam::{Vec2, Vec3};

use crate::camera::Camera;
use crate::scene::Scene;
use crate::viewer::Surface;

/// Camera-space depths at or below this are behind the eye plane.
const NEAR_EPS: f32 = 1e-3;

/// A projected wireframe edge in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Start point in pixels.
    pub from: Vec2,
    /// End point in pixels.
    pub to: Vec2,
}

impl Camera {
    /// Recompute the projected representation of every volume in `scene`.
    ///
    /// Each cuboid edge whose endpoints both sit in front of the eye plane
    /// and within [`draw_distance`](Self::draw_distance) becomes one
    /// [`LineSegment`]; edges failing either test are dropped whole.
    pub fn render(&mut self, scene: &Scene) {
        self.primitives.clear();
        let up = self.up();
        for volume in scene.volumes() {
            for (a, b) in volume.edges() {
                if let (Some(from), Some(to)) =
                    (self.project_point(a, up), self.project_point(b, up))
                {
                    self.primitives.push(LineSegment { from, to });
                }
            }
        }
    }

    /// Write the last rendered primitives to `surface`.
    ///
    /// Mutates only the externally owned surface; camera state is untouched.
    pub fn draw(&self, surface: &mut dyn Surface) {
        for line in &self.primitives {
            surface.draw_line(line.from, line.to);
        }
    }

    /// The primitives produced by the most recent [`render`](Self::render).
    #[must_use]
    pub fn primitives(&self) -> &[LineSegment] {
        &self.primitives
    }

    /// Project a world-space point to pixels, or `None` when it is behind
    /// the eye plane or beyond the draw distance.
    fn project_point(&self, point: Vec3, up: Vec3) -> Option<Vec2> {
        let rel = point - self.location;
        let depth = rel.dot(self.normal());
        if depth <= NEAR_EPS || depth > self.draw_distance {
            return None;
        }
        let (width, height) = self.viewport;
        let x = width as f32 / 2.0 + self.focal * rel.dot(self.horizontal()) / depth;
        let y = height as f32 / 2.0 - self.focal * rel.dot(up) / depth;
        Some(Vec2::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Cuboid;

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
    fn point_on_the_view_axis_projects_to_viewport_center() {
        let cam = test_camera();
        let projected = cam
            .project_point(Vec3::new(0.0, 0.0, 0.0), cam.up())
            .unwrap();
        assert_eq!(projected, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn projection_scales_offsets_by_inverse_depth() {
        let cam = test_camera();
        // 100 units ahead, 10 right, 5 up: offset = focal * 10 / 100 etc.
        let projected = cam
            .project_point(Vec3::new(-100.0, 10.0, 5.0), cam.up())
            .unwrap();
        assert!((projected.x - 500.0).abs() < 1e-3);
        assert!((projected.y - 250.0).abs() < 1e-3);
    }

    #[test]
    fn points_behind_the_eye_are_culled() {
        let cam = test_camera();
        assert!(cam
            .project_point(Vec3::new(-300.0, 0.0, 0.0), cam.up())
            .is_none());
    }

    #[test]
    fn points_beyond_draw_distance_are_culled() {
        let cam = test_camera();
        assert!(cam
            .project_point(Vec3::new(900.0, 0.0, 0.0), cam.up())
            .is_none());
    }

    #[test]
    fn render_emits_all_edges_of_a_fully_visible_cuboid() {
        let mut cam = test_camera();
        let scene = Scene::with_volumes(vec![Cuboid::from_center_size(
            Vec3::new(0.0, 0.0, 25.0),
            Vec3::new(50.0, 50.0, 50.0),
        )]);
        cam.render(&scene);
        assert_eq!(cam.primitives().len(), 12);
    }

    #[test]
    fn render_replaces_the_previous_primitive_list() {
        let mut cam = test_camera();
        cam.render(&Scene::demo());
        assert!(!cam.primitives().is_empty());
        cam.render(&Scene::new());
        assert!(cam.primitives().is_empty());
    }
}

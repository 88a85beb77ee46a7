//! The collidable/renderable scene.
//!
//! A [`Scene`] is an ordered collection of [`Cuboid`] volumes. It is built
//! once, then passed by shared reference into the motion controller and the
//! camera's projection, never held as process-global state, so the kernel
//! stays testable in isolation. Membership does not change at runtime.

mod volume;

use glam::Vec3;
pub use volume::{Containment, Cuboid};

/// An ordered, immutable-after-construction set of solid volumes.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Volumes in insertion order. Collision checks honor this order.
    volumes: Vec<Cuboid>,
}

impl Scene {
    /// Create an empty scene. Collision checks against it always pass.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scene from volumes in the given order.
    #[must_use]
    pub fn with_volumes(volumes: Vec<Cuboid>) -> Self {
        Self { volumes }
    }

    /// A small walkable scene: one room-sized cuboid ahead of the default
    /// start pose. Used by docs and tests.
    #[must_use]
    pub fn demo() -> Self {
        Self::with_volumes(vec![Cuboid::from_center_size(
            Vec3::new(0.0, 0.0, 25.0),
            Vec3::new(50.0, 50.0, 50.0),
        )])
    }

    /// The volumes in collision-check order.
    #[must_use]
    pub fn volumes(&self) -> &[Cuboid] {
        &self.volumes
    }

    /// Classify `point` against each volume in order, returning the first
    /// blocking result. First collision wins; later volumes are not checked.
    #[must_use]
    pub fn first_blocking(&self, point: Vec3) -> Option<(&Cuboid, Containment)> {
        self.volumes.iter().find_map(|volume| {
            let containment = volume.classify(point);
            containment.is_blocking().then_some((volume, containment))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scene_never_blocks() {
        let scene = Scene::new();
        assert!(scene.first_blocking(Vec3::ZERO).is_none());
        assert!(scene.first_blocking(Vec3::new(1e6, -1e6, 0.0)).is_none());
    }

    #[test]
    fn first_blocking_honors_scene_order() {
        let near = Cuboid::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 2.0, 2.0));
        let far = Cuboid::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(3.0, 3.0, 3.0));
        let scene = Scene::with_volumes(vec![near, far]);

        // (1.5, 1.5, 1.5) is inside both; the first volume must win.
        let (hit, containment) = scene.first_blocking(Vec3::splat(1.5)).unwrap();
        assert_eq!(*hit, near);
        assert_eq!(containment, Containment::Inside);
    }

    #[test]
    fn outside_every_volume_is_unblocked() {
        let scene = Scene::demo();
        assert!(scene.first_blocking(Vec3::new(-200.0, 0.0, 0.0)).is_none());
    }
}

//! Axis-aligned cuboid volumes and the point containment test.

use glam::Vec3;

/// Tolerance band around a face inside which a point counts as touching.
const TOUCH_EPS: f32 = 1e-4;

/// Result of classifying a point against a volume.
///
/// Three-valued on purpose: callers that only care about blocking treat
/// anything non-[`Outside`](Containment::Outside) as a collision, but
/// grazing contact stays distinguishable from firm overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    /// Strictly within the volume on every axis.
    Inside,
    /// On a face (within tolerance) while not outside on any axis.
    Touching,
    /// Clear of the volume on at least one axis.
    Outside,
}

impl Containment {
    /// Whether movement into this classification is blocked.
    #[must_use]
    pub fn is_blocking(self) -> bool {
        !matches!(self, Self::Outside)
    }
}

/// A solid axis-aligned cuboid, the scene's collidable/renderable volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    /// Componentwise minimum corner.
    pub min: Vec3,
    /// Componentwise maximum corner.
    pub max: Vec3,
}

impl Cuboid {
    /// Create a cuboid from two opposite corners, in any order.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create a cuboid from its center and full edge lengths.
    #[must_use]
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self::new(center - half, center + half)
    }

    /// Classify `point` against this volume.
    ///
    /// Pure, and valid for arbitrary points: the motion controller calls
    /// this speculatively on proposed positions before committing them.
    #[must_use]
    pub fn classify(&self, point: Vec3) -> Containment {
        let mut inside = true;
        for axis in 0..3 {
            let (p, lo, hi) = (point[axis], self.min[axis], self.max[axis]);
            if p < lo - TOUCH_EPS || p > hi + TOUCH_EPS {
                return Containment::Outside;
            }
            if p < lo + TOUCH_EPS || p > hi - TOUCH_EPS {
                inside = false;
            }
        }
        if inside {
            Containment::Inside
        } else {
            Containment::Touching
        }
    }

    /// The eight corner positions.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
        ]
    }

    /// The twelve wireframe edges as corner pairs.
    #[must_use]
    pub fn edges(&self) -> [(Vec3, Vec3); 12] {
        let c = self.corners();
        [
            // bottom face
            (c[0], c[1]),
            (c[1], c[2]),
            (c[2], c[3]),
            (c[3], c[0]),
            // top face
            (c[4], c[5]),
            (c[5], c[6]),
            (c[6], c[7]),
            (c[7], c[4]),
            // verticals
            (c[0], c[4]),
            (c[1], c[5]),
            (c[2], c[6]),
            (c[3], c[7]),
        ]
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection and look-control parameters.
pub struct CameraOptions {
    /// Focal scale: screen pixels per unit of tangent.
    pub focal: f32,
    /// Geometry beyond this camera-space depth is not drawn.
    pub draw_distance: f32,
    /// Pixel offset divided by this to produce look radians; larger turns
    /// more slowly.
    pub pointer_sensitivity: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            focal: 1000.0,
            draw_distance: 1000.0,
            pointer_sensitivity: 1000.0,
        }
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Frame-rate estimation parameters.
pub struct TimingOptions {
    /// Number of frames spanned by the FPS trailing window.
    pub fps_window: usize,
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self { fps_window: 19 }
    }
}

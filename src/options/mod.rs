//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (camera projection, look sensitivity, walking and
//! jumping, FPS window, key bindings) are consolidated here. Options
//! serialize to/from TOML for presets; every sub-struct uses
//! `#[serde(default)]` so partial files (e.g. only overriding `[motion]`)
//! work correctly.

mod camera;
mod motion;
mod timing;

use std::path::Path;

pub use camera::CameraOptions;
pub use motion::MotionOptions;
use serde::{Deserialize, Serialize};
pub use timing::TimingOptions;

use crate::error::AmblerError;
use crate::input::KeyBindings;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and look-control parameters.
    pub camera: CameraOptions,
    /// Walking and jumping parameters.
    pub motion: MotionOptions,
    /// Frame-rate estimation parameters.
    pub timing: TimingOptions,
    /// Keyboard binding map.
    pub keybindings: KeyBindings,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, AmblerError> {
        let content = std::fs::read_to_string(path).map_err(AmblerError::Io)?;
        toml::from_str(&content).map_err(|e| AmblerError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), AmblerError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| AmblerError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(AmblerError::Io)?;
        }
        std::fs::write(path, content).map_err(AmblerError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

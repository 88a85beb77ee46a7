// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint group
#![deny(clippy::all)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code (assertions on invariant violations are the
// one sanctioned exception; unwrap/expect are allowed in tests via
// clippy.toml)
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]

//! First-person walkthrough kernel: an orthonormal camera basis, a scene of
//! solid volumes, and a frame loop that integrates held-key velocity,
//! rejects colliding steps, rotates the camera from pointer offsets, and
//! projects the scene into 2D line primitives for an external surface.
//!
//! # Key entry points
//!
//! - [`Viewer`] - the blocking frame loop, driven through the
//!   [`Host`](viewer::Host) and [`Surface`](viewer::Surface) traits
//! - [`Camera`] - pose, rotation/translation operators, projection
//! - [`Scene`] - ordered collidable/renderable volumes
//! - [`MotionController`] - held-key velocity and collision-revert stepping
//! - [`Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! The kernel is deliberately window-less: the embedding frontend owns the
//! pixel buffer, the OS pointer, and the native event queue, and presents
//! them through the two viewer traits. One logical frame runs to completion
//! before the host's queued input is pumped, so all kernel state stays
//! single-threaded with no interior locking.

/// Camera pose, rotation operators, pointer look, and projection.
pub mod camera;
/// Crate error types.
pub mod error;
/// Input events, bindable actions, and command conversion.
pub mod input;
/// Held-key movement, collision revert, and jumping.
pub mod motion;
/// Runtime configuration with TOML preset support.
pub mod options;
/// The collidable/renderable scene.
pub mod scene;
/// Trailing-window frame-rate estimation.
pub mod timing;
/// The frame loop and the host/surface trait boundary.
pub mod viewer;

pub use camera::{Camera, LineSegment, PointerLook};
pub use error::AmblerError;
pub use input::{Command, InputEvent, InputProcessor, KeyAction, KeyBindings};
pub use motion::{JumpState, MotionController, MoveDirection, StepOutcome};
pub use options::Options;
pub use scene::{Containment, Cuboid, Scene};
pub use timing::FrameRateEstimator;
pub use viewer::{Host, Surface, Viewer, ViewerBuilder};

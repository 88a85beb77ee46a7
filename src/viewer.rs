//! The blocking frame loop and the host/surface trait boundary.
//!
//! The kernel owns no window, pixels, or OS pointer: those live behind the
//! [`Host`] and [`Surface`] traits, implemented by the embedding frontend.
//! [`Viewer::run`] blocks, running one logical frame at a time (timing,
//! jump, movement/collision, render, draw, then one event pump) until a
//! quit command arrives.
//!
//! Everything here is single-threaded and cooperative. Input callbacks do
//! not interrupt a frame: events queued by the host are delivered in the
//! per-iteration pump, mutate motion/rotation state between frames, and are
//! read by the next iteration's integration step. An embedding that spreads
//! host and kernel across threads must add its own mutual exclusion around
//! camera and velocity state.
//!
//! ```ignore
//! Viewer::builder()
//!     .with_scene(Scene::demo())
//!     .build()
//!     .run(&mut host, &mut surface)?;
//! ```

use glam::{Vec2, Vec3};

use crate::camera::{Camera, PointerLook};
use crate::error::AmblerError;
use crate::input::{Command, InputEvent, InputProcessor};
use crate::motion::{JumpState, MotionController, StepOutcome};
use crate::options::Options;
use crate::scene::Scene;
use crate::timing::FrameRateEstimator;

/// Default start pose: well back from the origin, facing +X, right = +Y.
const START_LOCATION: Vec3 = Vec3::new(-200.0, 0.0, 0.0);

// ── Host boundary ────────────────────────────────────────────────────────

/// The windowing/input collaborator that embeds the kernel.
pub trait Host {
    /// Viewport size in pixels, `(width, height)`. Read once at startup.
    fn viewport(&self) -> (u32, u32);

    /// Warp the OS pointer to an absolute screen position.
    fn warp_pointer(&mut self, x: f32, y: f32);

    /// Deliver all queued input events into `out`.
    ///
    /// Called exactly once per frame, after drawing, so the host event
    /// queue stays responsive without ever interrupting a frame.
    fn poll_events(&mut self, out: &mut Vec<InputEvent>);
}

/// The drawing collaborator that owns the pixel buffer.
///
/// The kernel only ever hands it 2D primitives; rasterization is entirely
/// the host's concern.
pub trait Surface {
    /// Erase the previous frame.
    fn clear(&mut self);

    /// Draw a line between two pixel positions.
    fn draw_line(&mut self, from: Vec2, to: Vec2);

    /// Draw a text string anchored at a pixel position.
    fn draw_text(&mut self, pos: Vec2, text: &str);

    /// Present the finished frame.
    fn present(&mut self);
}

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    scene: Option<Scene>,
}

impl ViewerBuilder {
    /// Create a builder with default options and an empty scene.
    fn new() -> Self {
        Self {
            options: None,
            scene: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the scene to walk through.
    #[must_use]
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = Some(scene);
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            scene: self.scene.unwrap_or_default(),
            running: true,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// The first-person walkthrough session.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) with the
/// host collaborators to enter the frame loop.
pub struct Viewer {
    options: Options,
    scene: Scene,
    running: bool,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Run the frame loop. Blocks until a quit command arrives.
    ///
    /// # Errors
    ///
    /// Returns [`AmblerError::Viewer`] when the host reports a zero-sized
    /// viewport.
    pub fn run<H: Host, S: Surface>(
        mut self,
        host: &mut H,
        surface: &mut S,
    ) -> Result<(), AmblerError> {
        let (width, height) = host.viewport();
        if width == 0 || height == 0 {
            return Err(AmblerError::Viewer(format!(
                "viewport is zero-sized: {width}x{height}"
            )));
        }

        let mut camera = Camera::new(
            START_LOCATION,
            Vec3::X,
            Vec3::Y,
            (width, height),
            self.options.camera.focal,
            self.options.camera.draw_distance,
        );
        let look = PointerLook::new(
            Vec2::new(width as f32 / 2.0, height as f32 / 2.0),
            self.options.camera.pointer_sensitivity,
        );
        let mut motion = MotionController::new(
            self.options.motion.walk_speed,
            JumpState::new(self.options.motion.jump_impulse, self.options.motion.gravity),
        );
        let mut estimator = FrameRateEstimator::new(self.options.timing.fps_window);
        let processor = InputProcessor::with_key_bindings(self.options.keybindings.clone());

        log::info!(
            "viewer loop starting: {width}x{height}, {} volume(s)",
            self.scene.volumes().len()
        );

        let mut events = Vec::new();
        while self.running {
            estimator.tick();
            motion.update_jump(&mut camera);
            if motion.integrate(&mut camera, &self.scene) == StepOutcome::Blocked {
                log::trace!("movement blocked at {}", camera.location);
            }

            camera.render(&self.scene);
            surface.clear();
            camera.draw(surface);
            draw_hud(surface, &camera, &self.scene, &estimator);
            surface.present();

            host.poll_events(&mut events);
            for event in events.drain(..) {
                if let Some(command) = processor.handle_event(&event) {
                    self.execute(command, &mut camera, &mut motion, &look, host);
                }
            }
        }

        log::info!("viewer loop exited");
        Ok(())
    }

    /// Apply one kernel command between frames.
    fn execute<H: Host>(
        &mut self,
        command: Command,
        camera: &mut Camera,
        motion: &mut MotionController,
        look: &PointerLook,
        host: &mut H,
    ) {
        match command {
            Command::MoveStart(direction) => motion.press(direction, camera),
            Command::MoveEnd(direction) => motion.release(direction),
            Command::Jump => motion.trigger_jump(),
            Command::Look { x, y } => {
                let warp = look.apply(camera, x, y);
                host.warp_pointer(warp.x, warp.y);
            }
            Command::Quit => {
                log::info!("exit requested");
                self.running = false;
            }
        }
    }
}

/// The three diagnostic text lines: frame rate, facing direction, and the
/// camera's classification against the first volume.
fn draw_hud(
    surface: &mut dyn Surface,
    camera: &Camera,
    scene: &Scene,
    estimator: &FrameRateEstimator,
) {
    surface.draw_text(
        Vec2::new(50.0, 50.0),
        &format!("{} fps", estimator.fps().round() as i32),
    );
    let facing = camera.normal();
    surface.draw_text(
        Vec2::new(50.0, 100.0),
        &format!("facing ({:.2}, {:.2}, {:.2})", facing.x, facing.y, facing.z),
    );
    if let Some(volume) = scene.volumes().first() {
        surface.draw_text(
            Vec2::new(50.0, 150.0),
            &format!("Collided: {:?}", volume.classify(camera.location)),
        );
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    /// Host double: hands out scripted event batches, one per poll, then a
    /// close request so test loops always terminate.
    struct FakeHost {
        viewport: (u32, u32),
        batches: VecDeque<Vec<InputEvent>>,
        warps: Vec<(f32, f32)>,
        polls: usize,
    }

    impl FakeHost {
        fn new(batches: Vec<Vec<InputEvent>>) -> Self {
            Self {
                viewport: (800, 600),
                batches: batches.into(),
                warps: Vec::new(),
                polls: 0,
            }
        }
    }

    impl Host for FakeHost {
        fn viewport(&self) -> (u32, u32) {
            self.viewport
        }

        fn warp_pointer(&mut self, x: f32, y: f32) {
            self.warps.push((x, y));
        }

        fn poll_events(&mut self, out: &mut Vec<InputEvent>) {
            self.polls += 1;
            match self.batches.pop_front() {
                Some(batch) => out.extend(batch),
                None => out.push(InputEvent::CloseRequested),
            }
        }
    }

    /// Surface double counting primitive writes.
    #[derive(Default)]
    struct FakeSurface {
        clears: usize,
        lines: usize,
        texts: Vec<String>,
        presents: usize,
    }

    impl Surface for FakeSurface {
        fn clear(&mut self) {
            self.clears += 1;
        }

        fn draw_line(&mut self, _from: Vec2, _to: Vec2) {
            self.lines += 1;
        }

        fn draw_text(&mut self, _pos: Vec2, text: &str) {
            self.texts.push(text.to_owned());
        }

        fn present(&mut self) {
            self.presents += 1;
        }
    }

    fn key_down(key: &str) -> InputEvent {
        InputEvent::KeyDown { key: key.into() }
    }

    #[test]
    fn zero_sized_viewport_is_a_startup_error() {
        let mut host = FakeHost::new(Vec::new());
        host.viewport = (0, 600);
        let mut surface = FakeSurface::default();
        let result = Viewer::builder().build().run(&mut host, &mut surface);
        assert!(matches!(result, Err(AmblerError::Viewer(_))));
    }

    #[test]
    fn close_request_stops_at_the_next_iteration_boundary() {
        // Three scripted polls, then the implicit close.
        let mut host = FakeHost::new(vec![Vec::new(), Vec::new(), Vec::new()]);
        let mut surface = FakeSurface::default();
        Viewer::builder().build().run(&mut host, &mut surface).unwrap();

        // Exactly one pump per frame, and the close frame still presented.
        assert_eq!(host.polls, 4);
        assert_eq!(surface.presents, 4);
        assert_eq!(surface.clears, 4);
    }

    #[test]
    fn escape_key_quits_through_the_binding_map() {
        let mut host = FakeHost::new(vec![vec![key_down("Escape")]]);
        let mut surface = FakeSurface::default();
        Viewer::builder().build().run(&mut host, &mut surface).unwrap();
        assert_eq!(surface.presents, 1);
    }

    #[test]
    fn pointer_event_warps_back_to_the_screen_center() {
        let mut host = FakeHost::new(vec![vec![InputEvent::PointerMoved { x: 10.0, y: 20.0 }]]);
        let mut surface = FakeSurface::default();
        Viewer::builder().build().run(&mut host, &mut surface).unwrap();
        assert_eq!(host.warps, vec![(400.0, 300.0)]);
    }

    #[test]
    fn demo_scene_draws_wireframe_and_hud_every_frame() {
        let mut host = FakeHost::new(vec![vec![key_down("KeyW")], Vec::new()]);
        let mut surface = FakeSurface::default();
        Viewer::builder()
            .with_scene(Scene::demo())
            .build()
            .run(&mut host, &mut surface)
            .unwrap();

        assert_eq!(surface.presents, 3);
        // Twelve cuboid edges per frame, all in front of the start pose.
        assert_eq!(surface.lines, 12 * 3);
        assert!(surface.texts.iter().any(|t| t.ends_with("fps")));
        assert!(surface.texts.iter().any(|t| t.starts_with("Collided:")));
    }
}

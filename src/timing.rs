//! Trailing-window frame-rate estimation.
//!
//! The estimator keeps the timestamps of the last `capacity` frames and,
//! once the window is full, reports `capacity / (newest - oldest)`: a
//! smoothed rate rather than an instantaneous delta. It is observational
//! only: the frame loop applies no sleep or throttle.

use std::collections::VecDeque;

use web_time::Instant;

/// Sliding-window frames-per-second estimator.
#[derive(Debug)]
pub struct FrameRateEstimator {
    window: VecDeque<Instant>,
    capacity: usize,
    fps: f32,
}

impl FrameRateEstimator {
    /// Create an estimator spanning `capacity` frames. A capacity of zero
    /// is clamped to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            window: VecDeque::with_capacity(capacity + 1),
            capacity,
            fps: 0.0,
        }
    }

    /// Record a frame happening now.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Record a frame at an explicit timestamp.
    ///
    /// Once the window overflows, the oldest timestamp is dropped and the
    /// estimate recomputed. A zero elapsed span leaves the previous
    /// estimate in place rather than reporting infinity.
    pub fn tick_at(&mut self, now: Instant) {
        self.window.push_back(now);
        if self.window.len() <= self.capacity {
            return;
        }
        if let Some(oldest) = self.window.pop_front() {
            let elapsed = now.duration_since(oldest).as_secs_f32();
            if elapsed > 0.0 {
                self.fps = self.capacity as f32 / elapsed;
            }
        }
    }

    /// The current estimate, or `0.0` until the window first fills.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Number of timestamps currently held. Never exceeds the capacity.
    #[must_use]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Whether no frame has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

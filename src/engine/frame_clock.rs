// Frame timing for the input loop
//
// Measures the wall-clock time between frames in milliseconds, which is
// what combo recorders advance by. Long gaps (a debugger break, a hidden
// window) are reported as-is so that pending combos expire.

use std::time::{Duration, Instant};

/// Frame clock state
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Time of last frame
    last_frame_time: Instant,

    /// Time when the clock started
    start_time: Instant,

    /// Current frame number
    frame_count: u64,

    /// Milliseconds between the last two ticks
    last_delta_ms: f64,
}

impl FrameClock {
    /// Create a clock starting now
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a clock starting at a given instant
    pub fn starting_at(now: Instant) -> Self {
        Self {
            last_frame_time: now,
            start_time: now,
            frame_count: 0,
            last_delta_ms: 0.0,
        }
    }

    /// Begin a new frame, returns milliseconds since the previous one
    pub fn tick(&mut self) -> f64 {
        self.tick_at(Instant::now())
    }

    /// Begin a new frame at `now`, returns milliseconds since the previous one
    pub fn tick_at(&mut self, now: Instant) -> f64 {
        let frame_time = now.saturating_duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;
        self.last_delta_ms = frame_time.as_secs_f64() * 1000.0;

        if frame_time > Duration::from_secs(1) {
            log::debug!("Long frame: {:.0} ms", self.last_delta_ms);
        }

        self.last_delta_ms
    }

    /// Milliseconds between the last two ticks
    pub fn last_delta_ms(&self) -> f64 {
        self.last_delta_ms
    }

    /// Get total number of frames ticked
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total elapsed time since start
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }

    /// Get total elapsed time in seconds
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

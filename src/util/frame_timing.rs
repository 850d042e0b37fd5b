//! Frame pacing deadlines and smoothed FPS.

use web_time::{Duration, Instant};

/// Frame timing with FPS calculation and optional frame pacing
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Minimum frame duration based on target FPS (zero = unlimited)
    min_frame_duration: Duration,
    /// Last frame timestamp, `None` before the first frame
    last_frame: Option<Instant>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };
        Self::with_frame_duration(min_frame_duration)
    }

    /// Create a frame timer with an explicit minimum frame spacing.
    pub fn with_frame_duration(min_frame_duration: Duration) -> Self {
        Self {
            min_frame_duration,
            last_frame: None,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,
        }
    }

    /// Minimum spacing between frames.
    pub fn frame_duration(&self) -> Duration {
        self.min_frame_duration
    }

    /// Earliest instant the next frame may start.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.last_frame.map(|last| last + self.min_frame_duration)
    }

    /// Record a frame at `now`. Returns seconds since the previous frame
    /// (0 for the first frame).
    pub fn tick(&mut self, now: Instant) -> f32 {
        let Some(last) = self.last_frame.replace(now) else {
            return 0.0;
        };
        let frame_time = now.saturating_duration_since(last).as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time
    }

    /// Get the current FPS (smoothed)
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

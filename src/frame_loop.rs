//! Cooperative single-threaded frame loop.
//!
//! A [`DisplayClock`] stands in for the host's display-refresh timer. The
//! loop calls back once per tick until the clock runs out or a
//! [`StopHandle`] is triggered; nothing reschedules itself behind the
//! caller's back.

use std::{cell::Cell, rc::Rc};

use web_time::{Duration, Instant};

use crate::util::frame_timing::FrameTiming;

/// Source of display-refresh ticks.
pub trait DisplayClock {
    /// Block until the next frame is due and return its timestamp, or
    /// `None` once the display surface is gone.
    fn next_frame(&mut self) -> Option<Instant>;
}

/// Clock that paces frames at a fixed interval with `std::thread::sleep`.
#[derive(Debug, Clone)]
pub struct IntervalClock {
    timing: FrameTiming,
    remaining: Option<u64>,
}

impl IntervalClock {
    /// Tick every `period`, forever.
    pub fn new(period: Duration) -> Self {
        Self {
            timing: FrameTiming::with_frame_duration(period),
            remaining: None,
        }
    }

    /// Tick at `fps` frames per second (0 = as fast as possible).
    pub fn from_fps(fps: u32) -> Self {
        Self {
            timing: FrameTiming::new(fps),
            remaining: None,
        }
    }

    /// Stop after `frames` ticks.
    #[must_use]
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.remaining = Some(frames);
        self
    }
}

impl DisplayClock for IntervalClock {
    fn next_frame(&mut self) -> Option<Instant> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }
        if let Some(due) = self.timing.next_deadline() {
            let now = Instant::now();
            if due > now {
                std::thread::sleep(due - now);
            }
        }
        let now = Instant::now();
        let _ = self.timing.tick(now);
        Some(now)
    }
}

/// Cancels a running [`FrameLoop`] before its next frame.
///
/// Cheap to clone; all clones share one flag. Not `Send`: the loop and
/// its callbacks share a single thread of control.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    /// Request the loop to stop. Idempotent.
    pub fn stop(&self) {
        self.0.set(true);
    }

    /// Whether a stop was requested.
    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

/// One display-refresh callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// Zero-based frame counter.
    pub index: u64,
    /// Seconds since the previous frame (0 for the first frame).
    pub dt: f32,
    /// Timestamp reported by the clock.
    pub now: Instant,
}

/// Frame loop with an explicit stop handle.
#[derive(Debug)]
pub struct FrameLoop {
    stop: StopHandle,
    timing: FrameTiming,
}

impl FrameLoop {
    /// Create a loop whose FPS statistics assume `target_fps`.
    pub fn new(target_fps: u32) -> Self {
        Self {
            stop: StopHandle::default(),
            timing: FrameTiming::new(target_fps),
        }
    }

    /// Handle that stops this loop.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Frame timing statistics.
    pub fn timing(&self) -> &FrameTiming {
        &self.timing
    }

    /// Run until the clock ends, the stop handle fires, or `on_frame`
    /// fails. Returns the number of frames delivered.
    pub fn run<C, F, E>(&mut self, clock: &mut C, mut on_frame: F) -> Result<u64, E>
    where
        C: DisplayClock,
        F: FnMut(FrameTick) -> Result<(), E>,
    {
        log::info!("frame loop started");
        let mut index = 0;
        while !self.stop.is_stopped() {
            let Some(now) = clock.next_frame() else {
                log::debug!("display clock ended");
                break;
            };
            let dt = self.timing.tick(now);
            on_frame(FrameTick { index, dt, now })?;
            index += 1;
        }
        log::info!(
            "frame loop stopped after {index} frames ({:.1} fps)",
            self.timing.fps()
        );
        Ok(index)
    }
}

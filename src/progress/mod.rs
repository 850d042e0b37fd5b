//! Scroll progress source.
//!
//! A [`ScrollTimeline`] turns raw scroll offsets into normalized progress
//! and pushes it to whoever listens, independent of any particular page or
//! scroll-animation library.

mod region;
mod timeline;

pub use region::ScrollRegion;
pub use timeline::{Scrub, ScrollTimeline};

/// Receiver of progress updates in [0, 1].
pub trait ProgressListener {
    /// Called with the latest progress value.
    fn on_progress(&mut self, progress: f32);
}

impl<F: FnMut(f32)> ProgressListener for F {
    fn on_progress(&mut self, progress: f32) {
        self(progress);
    }
}

use super::{ProgressListener, ScrollRegion};
use crate::error::OrbitError;
use crate::util::easing::EasingFunction;

/// Distance below which lagged progress snaps onto its target.
const SNAP_EPSILON: f32 = 1e-4;

/// How scroll offsets reach the listener.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scrub {
    /// Progress follows the scroll position immediately.
    Instant,
    /// Progress catches up to the scroll position over roughly this many
    /// seconds, advanced once per frame.
    Lag(f32),
}

impl Scrub {
    /// Lag must be finite and non-negative.
    pub fn validate(&self) -> Result<(), OrbitError> {
        match *self {
            Self::Lag(lag) if !(lag.is_finite() && lag >= 0.0) => {
                Err(OrbitError::InvalidParameter(format!(
                    "scrub lag must be finite and >= 0, got {lag}"
                )))
            }
            _ => Ok(()),
        }
    }
}

/// Scroll progress source.
///
/// Converts scroll offsets into progress over a [`ScrollRegion`], applies
/// optional lag and easing, and hands the result to a
/// [`ProgressListener`]. Only the latest value matters: intermediate
/// offsets between two frames are never queued.
#[derive(Debug, Clone)]
pub struct ScrollTimeline {
    region: ScrollRegion,
    scrub: Scrub,
    easing: EasingFunction,
    /// Last accepted scroll offset.
    offset: f32,
    /// Progress implied by `offset`.
    target: f32,
    /// Progress most recently emitted (before easing).
    current: f32,
}

impl ScrollTimeline {
    /// Create a timeline at offset `region.start()`.
    ///
    /// Fails if the scrub lag or the easing control values are invalid.
    pub fn new(
        region: ScrollRegion,
        scrub: Scrub,
        easing: EasingFunction,
    ) -> Result<Self, OrbitError> {
        scrub.validate()?;
        easing.validate()?;
        Ok(Self {
            region,
            scrub,
            easing,
            offset: region.start(),
            target: 0.0,
            current: 0.0,
        })
    }

    /// Feed a new scroll offset. Returns `true` if the listener was invoked.
    ///
    /// Non-finite offsets are dropped and the previous state is kept.
    pub fn scroll_to(
        &mut self,
        offset: f32,
        listener: &mut impl ProgressListener,
    ) -> bool {
        if !offset.is_finite() {
            log::warn!("ignoring non-finite scroll offset {offset}");
            return false;
        }
        self.offset = offset;
        self.target = self.region.progress_at(offset);
        log::debug!("scroll offset {offset} -> target progress {}", self.target);

        match self.scrub {
            Scrub::Instant => {
                self.current = self.target;
                self.emit(listener);
                true
            }
            Scrub::Lag(_) => false,
        }
    }

    /// Advance lagged progress by `dt` seconds. Returns `true` if the
    /// listener was invoked. Always `false` for [`Scrub::Instant`].
    pub fn advance(
        &mut self,
        dt: f32,
        listener: &mut impl ProgressListener,
    ) -> bool {
        let Scrub::Lag(lag) = self.scrub else {
            return false;
        };
        if self.current == self.target {
            return false;
        }

        if lag <= 0.0 {
            self.current = self.target;
        } else {
            let factor = 1.0 - (-dt.max(0.0) / lag).exp();
            self.current += (self.target - self.current) * factor;
            if (self.target - self.current).abs() < SNAP_EPSILON {
                self.current = self.target;
            }
        }
        self.emit(listener);
        true
    }

    /// Replace the scroll region and re-target the last accepted offset.
    pub fn set_region(
        &mut self,
        region: ScrollRegion,
        listener: &mut impl ProgressListener,
    ) -> bool {
        self.region = region;
        self.scroll_to(self.offset, listener)
    }

    /// Latest progress before easing.
    pub fn progress(&self) -> f32 {
        self.current
    }

    /// Progress the timeline is moving toward.
    pub fn target_progress(&self) -> f32 {
        self.target
    }

    /// Latest progress after easing.
    pub fn eased_progress(&self) -> f32 {
        self.easing.evaluate(self.current)
    }

    /// Active scroll region.
    pub fn region(&self) -> ScrollRegion {
        self.region
    }

    fn emit(&self, listener: &mut impl ProgressListener) {
        listener.on_progress(self.eased_progress());
    }
}

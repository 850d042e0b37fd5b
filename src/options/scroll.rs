use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitError;
use crate::progress::{Scrub, ScrollRegion};
use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scroll", inline)]
#[serde(default)]
/// Which scroll offsets drive the camera, and how closely it follows.
pub struct ScrollOptions {
    /// Scroll offset (pixels) at which progress is 0.
    #[schemars(skip)]
    pub start: f32,
    /// Scroll offset at which progress is 1. When absent, the end is the
    /// last scroll position of the document (`document_height` minus the
    /// viewport height) and follows viewport resizes.
    #[schemars(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<f32>,
    /// Total height of the scrolled document, in pixels.
    #[schemars(skip)]
    pub document_height: f32,
    /// Seconds the camera lags behind the scroll position. Absent means
    /// the camera tracks scrolling immediately.
    #[schemars(title = "Scrub Lag")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrub_seconds: Option<f32>,
    /// Easing applied to progress.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: None,
            document_height: 4000.0,
            scrub_seconds: None,
            easing: EasingFunction::Linear,
        }
    }
}

impl ScrollOptions {
    /// Whether the region end is derived from the viewport height.
    pub fn follows_viewport(&self) -> bool {
        self.end.is_none()
    }

    /// Scroll region for a viewport of the given logical height.
    pub fn region(&self, viewport_height: f32) -> Result<ScrollRegion, OrbitError> {
        let end = self
            .end
            .unwrap_or(self.document_height - viewport_height);
        ScrollRegion::new(self.start, end)
    }

    /// Scrub mode for the timeline.
    pub fn scrub(&self) -> Result<Scrub, OrbitError> {
        let scrub = self.scrub_seconds.map_or(Scrub::Instant, Scrub::Lag);
        scrub.validate()?;
        Ok(scrub)
    }

    /// Check scrub lag and easing control values.
    pub fn validate(&self) -> Result<(), OrbitError> {
        let _ = self.scrub()?;
        self.easing.validate()
    }
}

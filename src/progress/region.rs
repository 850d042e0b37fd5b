use crate::error::OrbitError;

/// Span of scroll offsets mapped onto progress [0, 1].
///
/// Offsets before `start` clamp to 0 and offsets past `end` clamp to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRegion {
    start: f32,
    end: f32,
}

impl ScrollRegion {
    /// Build a region. Both bounds must be finite and `end > start`.
    pub fn new(start: f32, end: f32) -> Result<Self, OrbitError> {
        if !start.is_finite() || !end.is_finite() || end <= start {
            return Err(OrbitError::InvalidParameter(format!(
                "scroll region must satisfy start < end, got {start}..{end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Region covering a whole document, from the top of the page to the
    /// last scroll position where the viewport bottom meets the document
    /// bottom.
    pub fn for_document(
        document_height: f32,
        viewport_height: f32,
    ) -> Result<Self, OrbitError> {
        Self::new(0.0, document_height - viewport_height)
    }

    /// Offset at which progress is 0.
    pub fn start(&self) -> f32 {
        self.start
    }

    /// Offset at which progress is 1.
    pub fn end(&self) -> f32 {
        self.end
    }

    /// Clamped progress for a scroll offset.
    #[inline]
    pub fn progress_at(&self, offset: f32) -> f32 {
        ((offset - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_and_clamps_offsets() {
        let region = ScrollRegion::new(100.0, 300.0).unwrap();
        assert_eq!(region.progress_at(100.0), 0.0);
        assert_eq!(region.progress_at(200.0), 0.5);
        assert_eq!(region.progress_at(300.0), 1.0);
        assert_eq!(region.progress_at(-50.0), 0.0);
        assert_eq!(region.progress_at(10_000.0), 1.0);
    }

    #[test]
    fn document_region_ends_at_last_scroll_position() {
        let region = ScrollRegion::for_document(4000.0, 1000.0).unwrap();
        assert_eq!(region.start(), 0.0);
        assert_eq!(region.end(), 3000.0);
    }

    #[test]
    fn rejects_empty_or_inverted_regions() {
        assert!(ScrollRegion::new(10.0, 10.0).is_err());
        assert!(ScrollRegion::new(10.0, 5.0).is_err());
        assert!(ScrollRegion::new(0.0, f32::NAN).is_err());
        // Document no taller than the viewport cannot scroll.
        assert!(ScrollRegion::for_document(800.0, 800.0).is_err());
    }
}

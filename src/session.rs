//! Scene session: explicit owner of the camera, the scroll timeline and the
//! camera controller.
//!
//! A session is created with [`SceneSession::setup`], fed scroll offsets
//! and frame ticks by the host, and ended with [`SceneSession::teardown`].
//! Scroll updates and frames may interleave at any rate; each frame draws
//! with whatever pose the latest update produced.

use glam::Vec3;

use crate::camera::{Camera, CameraPose, CameraUniform, ScrollCameraController};
use crate::error::OrbitError;
use crate::frame_loop::FrameTick;
use crate::options::Options;
use crate::progress::ScrollTimeline;

/// Logical surface size and device scale factor reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Logical width in CSS/logical pixels.
    pub width: u32,
    /// Logical height in CSS/logical pixels.
    pub height: u32,
    /// Device pixels per logical pixel.
    pub scale_factor: f64,
}

impl Viewport {
    /// Viewport with a scale factor of 1.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            scale_factor: 1.0,
        }
    }

    /// Set the device scale factor.
    #[must_use]
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Effective pixel ratio, capped at `max_pixel_ratio` (itself never
    /// below 1). Non-finite or non-positive scale factors count as 1.
    pub fn pixel_ratio(&self, max_pixel_ratio: f32) -> f32 {
        let cap = if max_pixel_ratio.is_nan() {
            1.0
        } else {
            max_pixel_ratio.max(1.0)
        };
        let scale = self.scale_factor as f32;
        if scale.is_finite() && scale > 0.0 {
            scale.min(cap)
        } else {
            1.0
        }
    }

    /// Physical render-surface size for the capped pixel ratio. Never
    /// smaller than 1x1.
    pub fn surface_size(&self, max_pixel_ratio: f32) -> (u32, u32) {
        let ratio = self.pixel_ratio(max_pixel_ratio);
        (
            ((self.width as f32 * ratio).round() as u32).max(1),
            ((self.height as f32 * ratio).round() as u32).max(1),
        )
    }
}

/// Everything an external renderer needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Tick that triggered this frame.
    pub tick: FrameTick,
    /// Camera with the latest pose applied.
    pub camera: &'a Camera,
    /// Uniform data matching `camera`.
    pub uniform: &'a CameraUniform,
    /// Physical surface size.
    pub surface_size: (u32, u32),
    /// Raw scroll progress behind the pose.
    pub progress: f32,
}

/// Draws frames. Implemented by the host's rendering backend.
pub trait FrameRenderer {
    /// Backend-specific failure.
    type Error;

    /// Draw the scene from `frame.camera`.
    fn render(&mut self, frame: &Frame<'_>) -> Result<(), Self::Error>;
}

/// Owner of one scroll-driven camera scene.
#[derive(Debug)]
pub struct SceneSession {
    options: Options,
    viewport: Viewport,
    camera: Camera,
    uniform: CameraUniform,
    controller: ScrollCameraController,
    timeline: ScrollTimeline,
}

impl SceneSession {
    /// Validate `options` and build a session positioned at progress 0.
    pub fn setup(options: Options, viewport: Viewport) -> Result<Self, OrbitError> {
        options.validate()?;
        let params = options.path.to_params()?;
        let region = options.scroll.region(viewport.height as f32)?;
        let timeline = ScrollTimeline::new(
            region,
            options.scroll.scrub()?,
            options.scroll.easing,
        )?;
        let controller = ScrollCameraController::new(params);

        let aspect = viewport.width.max(1) as f32 / viewport.height.max(1) as f32;
        let mut camera = Camera::from_options(&options.camera, aspect);
        controller.apply_to(&mut camera);
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        log::info!(
            "scene session ready: {}x{} viewport, track {}x{} at height {}, scroll {}..{}",
            viewport.width,
            viewport.height,
            params.radius_x(),
            params.radius_z(),
            params.height(),
            region.start(),
            region.end(),
        );

        Ok(Self {
            options,
            viewport,
            camera,
            uniform,
            controller,
            timeline,
        })
    }

    /// Feed a scroll offset. Returns `true` if the pose changed right away
    /// (lagged scrub defers the change to subsequent frames).
    pub fn scroll_to(&mut self, offset: f32) -> bool {
        self.timeline.scroll_to(offset, &mut self.controller)
    }

    /// Advance scrub smoothing, apply the latest pose, and hand the frame
    /// to `renderer`.
    pub fn render_frame<R: FrameRenderer>(
        &mut self,
        tick: FrameTick,
        renderer: &mut R,
    ) -> Result<(), R::Error> {
        let _ = self.timeline.advance(tick.dt, &mut self.controller);
        self.controller.apply_to(&mut self.camera);
        self.uniform.update_view_proj(&self.camera);

        renderer.render(&Frame {
            tick,
            camera: &self.camera,
            uniform: &self.uniform,
            surface_size: self.surface_size(),
            progress: self.timeline.progress(),
        })
    }

    /// React to a new viewport: aspect ratio, pixel ratio and, when the
    /// scroll region is derived from the document, the region end.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.set_aspect(viewport.width, viewport.height);
        log::debug!(
            "resized to {}x{} @ {}x (surface {:?})",
            viewport.width,
            viewport.height,
            viewport.scale_factor,
            self.surface_size()
        );

        if !self.options.scroll.follows_viewport() {
            return;
        }
        match self.options.scroll.region(viewport.height as f32) {
            Ok(region) => {
                let _ = self.timeline.set_region(region, &mut self.controller);
            }
            Err(e) => {
                log::warn!("keeping previous scroll region: {e}");
            }
        }
    }

    /// End the session. The camera, controller and timeline are dropped.
    pub fn teardown(self) {
        log::info!(
            "scene session torn down at progress {:.3}",
            self.timeline.progress()
        );
    }

    /// Camera with the most recently applied pose.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Uniform data for the camera as of the last frame.
    pub fn uniform(&self) -> &CameraUniform {
        &self.uniform
    }

    /// Latest pose computed from scroll progress.
    pub fn pose(&self) -> &CameraPose {
        self.controller.pose()
    }

    /// Latest raw scroll progress.
    pub fn progress(&self) -> f32 {
        self.timeline.progress()
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Options the session was built from.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Physical render-surface size.
    pub fn surface_size(&self) -> (u32, u32) {
        self.viewport
            .surface_size(self.options.camera.max_pixel_ratio)
    }

    /// Direction the camera currently faces.
    pub fn forward(&self) -> Vec3 {
        (self.camera.target - self.camera.eye).normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use web_time::Instant;

    use super::*;
    use crate::camera::compute_pose;

    /// Renderer that records what it was asked to draw.
    #[derive(Default)]
    struct RecordingRenderer {
        eyes: Vec<Vec3>,
        sizes: Vec<(u32, u32)>,
    }

    impl FrameRenderer for RecordingRenderer {
        type Error = Infallible;

        fn render(&mut self, frame: &Frame<'_>) -> Result<(), Infallible> {
            self.eyes.push(frame.camera.eye);
            self.sizes.push(frame.surface_size);
            Ok(())
        }
    }

    struct FailingRenderer;

    impl FrameRenderer for FailingRenderer {
        type Error = OrbitError;

        fn render(&mut self, _frame: &Frame<'_>) -> Result<(), OrbitError> {
            Err(OrbitError::Render("surface lost".into()))
        }
    }

    fn tick(index: u64, dt: f32) -> FrameTick {
        FrameTick {
            index,
            dt,
            now: Instant::now(),
        }
    }

    fn session() -> SceneSession {
        SceneSession::setup(Options::default(), Viewport::new(1000, 1000))
            .unwrap()
    }

    #[test]
    fn setup_places_camera_at_track_start() {
        let s = session();
        assert!(s.camera().eye.abs_diff_eq(Vec3::new(15.0, 1.2, 0.0), 1e-4));
        assert_eq!(s.progress(), 0.0);
        assert_eq!(s.camera().fovy, 75.0);
    }

    #[test]
    fn frame_uses_latest_scroll_offset() {
        let mut s = session();
        let mut renderer = RecordingRenderer::default();
        // document 4000 - viewport 1000 = 3000 px of scroll
        assert!(s.scroll_to(300.0));
        assert!(s.scroll_to(750.0));
        s.render_frame(tick(0, 0.0), &mut renderer).unwrap();

        let expected =
            compute_pose(0.25, &Options::default().path.to_params().unwrap());
        assert_eq!(renderer.eyes, vec![expected.position]);
        assert_eq!(*s.pose(), expected);
    }

    #[test]
    fn frames_without_scroll_repeat_pose() {
        let mut s = session();
        let mut renderer = RecordingRenderer::default();
        let _ = s.scroll_to(1500.0);
        for i in 0..3 {
            s.render_frame(tick(i, 0.016), &mut renderer).unwrap();
        }
        assert_eq!(renderer.eyes[0], renderer.eyes[2]);
    }

    #[test]
    fn lagged_scrub_moves_over_frames() {
        let mut options = Options::default();
        options.scroll.scrub_seconds = Some(0.25);
        let mut s = SceneSession::setup(options, Viewport::new(1000, 1000))
            .unwrap();
        let mut renderer = RecordingRenderer::default();

        assert!(!s.scroll_to(1500.0));
        assert_eq!(s.progress(), 0.0);
        for i in 0..240 {
            s.render_frame(tick(i, 1.0 / 60.0), &mut renderer).unwrap();
        }
        assert_eq!(s.progress(), 0.5);
        let halfway =
            compute_pose(0.5, &Options::default().path.to_params().unwrap());
        assert_eq!(s.camera().eye, halfway.position);
    }

    #[test]
    fn resize_updates_aspect_surface_and_region() {
        let mut s = session();
        let _ = s.scroll_to(1500.0);
        assert_eq!(s.progress(), 0.5);

        s.resize(Viewport::new(2000, 1000).with_scale_factor(3.0));
        assert_eq!(s.camera().aspect, 2.0);
        // pixel ratio capped at 2
        assert_eq!(s.surface_size(), (4000, 2000));
        // 4000 - 1000 still, so progress is unchanged
        assert_eq!(s.progress(), 0.5);

        s.resize(Viewport::new(1000, 2500));
        assert_eq!(s.progress(), 1.0);
        let mut renderer = RecordingRenderer::default();
        s.render_frame(tick(0, 0.0), &mut renderer).unwrap();
        assert_eq!(renderer.sizes, vec![(1000, 2500)]);
    }

    #[test]
    fn resize_taller_than_document_keeps_region() {
        let mut s = session();
        let _ = s.scroll_to(1500.0);
        s.resize(Viewport::new(1000, 5000));
        assert_eq!(s.progress(), 0.5);
        assert_eq!(s.camera().aspect, 0.2);
    }

    #[test]
    fn renderer_errors_reach_the_caller() {
        let mut s = session();
        let err = s.render_frame(tick(0, 0.0), &mut FailingRenderer).unwrap_err();
        assert!(matches!(err, OrbitError::Render(_)));
    }

    #[test]
    fn pixel_ratio_tolerates_degenerate_inputs() {
        let viewport = Viewport::new(100, 50).with_scale_factor(1.5);
        assert_eq!(viewport.pixel_ratio(2.0), 1.5);
        assert_eq!(viewport.pixel_ratio(0.0), 1.0);
        assert_eq!(viewport.pixel_ratio(f32::NAN), 1.0);
        assert_eq!(viewport.surface_size(0.0), (100, 50));

        let broken = Viewport::new(100, 50).with_scale_factor(f64::NAN);
        assert_eq!(broken.pixel_ratio(2.0), 1.0);
        let zero = Viewport::new(100, 50).with_scale_factor(0.0);
        assert_eq!(zero.surface_size(2.0), (100, 50));
    }

    #[test]
    fn setup_rejects_out_of_range_easing() {
        let options = Options::from_toml(
            "[scroll]\neasing = { CubicHermite = { c1 = nan, c2 = 1.0 } }",
        )
        .unwrap();
        let err = SceneSession::setup(options, Viewport::new(1000, 1000))
            .unwrap_err();
        assert!(matches!(err, OrbitError::InvalidParameter(_)));
    }

    #[test]
    fn setup_rejects_invalid_options() {
        let mut options = Options::default();
        options.path.radius_x = -3.0;
        assert!(SceneSession::setup(options, Viewport::new(800, 600)).is_err());

        // viewport taller than the document leaves nothing to scroll
        assert!(
            SceneSession::setup(Options::default(), Viewport::new(800, 4000))
                .is_err()
        );
    }

    #[test]
    fn forward_points_along_track() {
        let mut s = session();
        let _ = s.scroll_to(0.0);
        s.render_frame(tick(0, 0.0), &mut RecordingRenderer::default())
            .unwrap();
        // At angle 0 the camera moves toward +Z and looks slightly ahead.
        assert!(s.forward().z > 0.9);
        s.teardown();
    }
}

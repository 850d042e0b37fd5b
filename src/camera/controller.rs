use crate::camera::core::Camera;
use crate::camera::path::{compute_pose, CameraPose, PathParameters};
use crate::progress::ProgressListener;

/// Scroll-driven camera controller.
///
/// Holds the track parameters and the most recently computed pose. Every
/// progress update replaces the pose outright; there is no accumulated
/// state, so revisiting a progress value reproduces its pose exactly.
#[derive(Debug, Clone)]
pub struct ScrollCameraController {
    params: PathParameters,
    progress: f32,
    pose: CameraPose,
}

impl ScrollCameraController {
    /// Create a controller positioned at progress 0.
    pub fn new(params: PathParameters) -> Self {
        Self {
            params,
            progress: 0.0,
            pose: compute_pose(0.0, &params),
        }
    }

    /// Recompute the pose for `progress`.
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = progress;
        self.pose = compute_pose(progress, &self.params);
    }

    /// Progress that produced the current pose.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Latest computed pose.
    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    /// Track parameters.
    pub fn params(&self) -> &PathParameters {
        &self.params
    }

    /// Copy the latest pose onto `camera`.
    pub fn apply_to(&self, camera: &mut Camera) {
        camera.apply_pose(&self.pose);
    }
}

impl ProgressListener for ScrollCameraController {
    fn on_progress(&mut self, progress: f32) {
        self.set_progress(progress);
    }
}

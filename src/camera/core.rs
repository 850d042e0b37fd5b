use glam::{Mat4, Vec3};

use crate::camera::path::CameraPose;
use crate::options::CameraOptions;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Banked camera up direction.
    pub up: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Camera {
    /// Camera at `(0, 0, 10)` looking at the origin, with projection taken
    /// from `options`.
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Move the camera onto a pose computed from scroll progress.
    pub fn apply_pose(&mut self, pose: &CameraPose) {
        self.eye = pose.position;
        self.target = pose.look_at;
        self.up = pose.up;
    }

    /// Update the aspect ratio for a new surface size. Zero-sized surfaces
    /// (minimized windows) leave the aspect untouched.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    /// Build the combined view-projection matrix.
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        self.build_projection() * view
    }

    /// Get just the projection matrix.
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.6,
            forward: [0.0, 0.0, -1.0],
            fovy: 75.0,
            up: [0.0, 1.0, 0.0],
            _pad: 0.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.eye.to_array();
        self.aspect = camera.aspect;
        // Compute actual camera forward direction (from eye toward target)
        let forward = (camera.target - camera.eye).normalize_or_zero();
        self.forward = forward.to_array();
        self.up = camera.up.to_array();
        self.fovy = camera.fovy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::path::{compute_pose, BankParameters, PathParameters};

    fn camera() -> Camera {
        Camera::from_options(&CameraOptions::default(), 16.0 / 9.0)
    }

    #[test]
    fn uniform_is_tightly_packed() {
        let uniform = CameraUniform::new();
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 112);
    }

    #[test]
    fn apply_pose_moves_eye_target_and_up() {
        let params =
            PathParameters::new(15.0, 10.0, 1.2, 0.2, BankParameters::default())
                .unwrap();
        let pose = compute_pose(0.3, &params);
        let mut cam = camera();
        cam.apply_pose(&pose);
        assert_eq!(cam.eye, pose.position);
        assert_eq!(cam.target, pose.look_at);
        assert_eq!(cam.up, pose.up);
    }

    #[test]
    fn set_aspect_ignores_zero_size() {
        let mut cam = camera();
        cam.set_aspect(800, 400);
        assert_eq!(cam.aspect, 2.0);
        cam.set_aspect(0, 400);
        assert_eq!(cam.aspect, 2.0);
    }

    #[test]
    fn uniform_tracks_camera() {
        let mut cam = camera();
        cam.eye = Vec3::new(0.0, 0.0, 5.0);
        cam.target = Vec3::ZERO;
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&cam);
        assert_eq!(uniform.position, [0.0, 0.0, 5.0]);
        assert_eq!(uniform.forward, [0.0, 0.0, -1.0]);
        assert_eq!(uniform.fovy, 75.0);

        // The target projects to the center of clip space.
        let clip = cam.build_matrix() * cam.target.extend(1.0);
        assert!((clip.x / clip.w).abs() < 1e-5);
        assert!((clip.y / clip.w).abs() < 1e-5);
    }
}

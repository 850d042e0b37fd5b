//! Camera system for the scroll-driven orbit.
//!
//! Provides the elliptical track math, a controller holding the latest
//! pose, and the perspective camera the pose is applied to.

/// Scroll-progress camera controller holding the latest pose.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Elliptical track parameters and pose computation.
pub mod path;

pub use controller::ScrollCameraController;
pub use self::core::{Camera, CameraUniform};
pub use path::{compute_pose, BankParameters, CameraPose, PathParameters};

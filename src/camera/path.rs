//! Closed elliptical camera track parameterized by scroll progress.
//!
//! The track lies in a horizontal plane at a fixed height. Progress wraps
//! periodically, so a full revolution corresponds to one unit of progress
//! and `p` and `p + 1` land on the same pose.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::error::OrbitError;

/// Cosmetic banking applied to the camera's up-vector.
///
/// The bank angle is `max_tilt * sin(frequency * angle)`. `frequency` is an
/// integer so the tilt pattern repeats exactly once per revolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BankParameters {
    /// Largest tilt away from vertical, in radians.
    pub max_tilt: f32,
    /// Oscillations of the bank angle per revolution.
    pub frequency: u32,
}

impl Default for BankParameters {
    fn default() -> Self {
        Self {
            max_tilt: 0.15,
            frequency: 2,
        }
    }
}

impl BankParameters {
    /// Bank angle in radians at the given track angle.
    #[inline]
    #[must_use]
    pub fn angle_at(&self, angle: f32) -> f32 {
        self.max_tilt * (self.frequency as f32 * angle).sin()
    }
}

/// Shape of the elliptical camera track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathParameters {
    radius_x: f32,
    radius_z: f32,
    height: f32,
    look_ahead: f32,
    bank: BankParameters,
}

impl PathParameters {
    /// Validate and build path parameters.
    ///
    /// Radii must be finite and strictly positive; height, look-ahead and
    /// bank tilt must be finite.
    pub fn new(
        radius_x: f32,
        radius_z: f32,
        height: f32,
        look_ahead: f32,
        bank: BankParameters,
    ) -> Result<Self, OrbitError> {
        for (name, value) in [("radius_x", radius_x), ("radius_z", radius_z)]
        {
            if !value.is_finite() || value <= 0.0 {
                return Err(OrbitError::InvalidParameter(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("height", height),
            ("look_ahead", look_ahead),
            ("bank max_tilt", bank.max_tilt),
        ] {
            if !value.is_finite() {
                return Err(OrbitError::InvalidParameter(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        Ok(Self {
            radius_x,
            radius_z,
            height,
            look_ahead,
            bank,
        })
    }

    /// Radius along the world X axis.
    #[must_use]
    pub fn radius_x(&self) -> f32 {
        self.radius_x
    }

    /// Radius along the world Z axis.
    #[must_use]
    pub fn radius_z(&self) -> f32 {
        self.radius_z
    }

    /// Fixed Y coordinate of the track.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Angular offset of the gaze target ahead of the camera, in radians.
    #[must_use]
    pub fn look_ahead(&self) -> f32 {
        self.look_ahead
    }

    /// Banking constants.
    #[must_use]
    pub fn bank(&self) -> BankParameters {
        self.bank
    }

    /// Point on the track at the given angle.
    #[inline]
    #[must_use]
    pub fn point_at(&self, angle: f32) -> Vec3 {
        Vec3::new(
            self.radius_x * angle.cos(),
            self.height,
            self.radius_z * angle.sin(),
        )
    }
}

/// Camera placement derived from scroll progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position on the track.
    pub position: Vec3,
    /// Gaze target slightly ahead along the track.
    pub look_at: Vec3,
    /// Banked up-vector (unit length).
    pub up: Vec3,
}

/// Map scroll progress to a track angle in radians, wrapping to `[0, 2π]`.
#[inline]
#[must_use]
pub fn progress_to_angle(progress: f32) -> f32 {
    progress.rem_euclid(1.0) * TAU
}

/// Compute the banked camera pose for `progress`.
///
/// Total for finite `progress`; non-finite input is the caller's concern
/// (see [`ScrollTimeline`](crate::progress::ScrollTimeline), which rejects
/// it at the boundary).
#[must_use]
pub fn compute_pose(progress: f32, params: &PathParameters) -> CameraPose {
    let angle = progress_to_angle(progress);
    let position = params.point_at(angle);
    let look_at = params.point_at(angle + params.look_ahead);

    let bank = params.bank.angle_at(angle);
    let radial = Vec3::new(angle.cos(), 0.0, angle.sin());
    let up = Vec3::Y * bank.cos() + radial * bank.sin();

    CameraPose {
        position,
        look_at,
        up,
    }
}

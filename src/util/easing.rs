//! Easing curves applied to scroll progress before it reaches the camera.
//!
//! Curves fix the endpoints 0 and 1, so eased progress still starts and
//! ends a revolution at the same place. `CubicHermite` stays inside
//! [0, 1] only for control values in [0, 1]; see
//! [`EasingFunction::validate`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitError;

/// Easing function variants for progress curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema,
)]
pub enum EasingFunction {
    /// Linear mapping (no easing).
    #[default]
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Hermite smoothstep, slow at both ends.
    SmoothStep,
    /// Cubic Bezier-style curve with configurable inner control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First inner control value.
        c1: f32,
        /// Second inner control value.
        c2: f32,
    },
}

impl EasingFunction {
    /// Check that control values keep the curve monotone inside [0, 1].
    pub fn validate(&self) -> Result<(), OrbitError> {
        if let Self::CubicHermite { c1, c2 } = *self {
            for (name, value) in [("c1", c1), ("c2", c2)] {
                if !(0.0..=1.0).contains(&value) {
                    return Err(OrbitError::InvalidParameter(format!(
                        "easing {name} must be in [0, 1], got {value}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Evaluate the easing function at time t.
    ///
    /// Input t and the result are both clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        let eased = match *self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        };
        // `clamp` passes NaN through.
        if eased.is_nan() {
            0.0
        } else {
            eased.clamp(0.0, 1.0)
        }
    }
}

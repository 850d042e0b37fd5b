use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and output resolution parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Upper bound on the device pixel ratio used for the render surface.
    #[schemars(title = "Max Pixel Ratio", range(min = 1.0, max = 4.0), extend("step" = 0.5))]
    pub max_pixel_ratio: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 1200.0,
            max_pixel_ratio: 2.0,
        }
    }
}

impl CameraOptions {
    /// Check projection parameters.
    pub fn validate(&self) -> Result<(), OrbitError> {
        if !(self.fovy > 0.0 && self.fovy < 180.0) {
            return Err(OrbitError::InvalidParameter(format!(
                "fovy must be in (0, 180) degrees, got {}",
                self.fovy
            )));
        }
        if !(self.znear > 0.0 && self.zfar > self.znear && self.zfar.is_finite())
        {
            return Err(OrbitError::InvalidParameter(format!(
                "clip planes must satisfy 0 < znear < zfar, got {}..{}",
                self.znear, self.zfar
            )));
        }
        if !(self.max_pixel_ratio >= 1.0 && self.max_pixel_ratio.is_finite()) {
            return Err(OrbitError::InvalidParameter(format!(
                "max_pixel_ratio must be >= 1, got {}",
                self.max_pixel_ratio
            )));
        }
        Ok(())
    }
}

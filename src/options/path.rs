use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{BankParameters, PathParameters};
use crate::error::OrbitError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera Path", inline)]
#[serde(default)]
/// Shape of the elliptical camera track and its banking.
pub struct PathOptions {
    /// Track radius along X.
    #[schemars(title = "Radius X", range(min = 1.0, max = 100.0), extend("step" = 0.5))]
    pub radius_x: f32,
    /// Track radius along Z.
    #[schemars(title = "Radius Z", range(min = 1.0, max = 100.0), extend("step" = 0.5))]
    pub radius_z: f32,
    /// Track height above the scene origin.
    #[schemars(title = "Height", range(min = -20.0, max = 20.0), extend("step" = 0.1))]
    pub height: f32,
    /// Gaze lead along the track, in radians.
    #[schemars(title = "Look Ahead", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub look_ahead: f32,
    /// Maximum bank tilt, in radians.
    #[schemars(title = "Bank Tilt", range(min = 0.0, max = 0.6), extend("step" = 0.01))]
    pub bank_max_tilt: f32,
    /// Bank oscillations per revolution.
    #[schemars(skip)]
    pub bank_frequency: u32,
}

impl Default for PathOptions {
    fn default() -> Self {
        let bank = BankParameters::default();
        Self {
            radius_x: 15.0,
            radius_z: 10.0,
            height: 1.2,
            look_ahead: 0.2,
            bank_max_tilt: bank.max_tilt,
            bank_frequency: bank.frequency,
        }
    }
}

impl PathOptions {
    /// Validated track parameters.
    pub fn to_params(&self) -> Result<PathParameters, OrbitError> {
        PathParameters::new(
            self.radius_x,
            self.radius_z,
            self.height,
            self.look_ahead,
            BankParameters {
                max_tilt: self.bank_max_tilt,
                frequency: self.bank_frequency,
            },
        )
    }
}

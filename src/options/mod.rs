//! Centralized scene options with TOML support.
//!
//! Track shape, camera projection, scroll mapping and frame pacing live
//! here. Options serialize to/from TOML; every section uses
//! `#[serde(default)]` so a file may override a single value.

mod camera;
mod frame;
mod path;
mod scroll;

use std::path::Path;

pub use camera::CameraOptions;
pub use frame::FrameOptions;
pub use path::PathOptions;
use schemars::JsonSchema;
pub use scroll::ScrollOptions;
use serde::{Deserialize, Serialize};

use crate::error::OrbitError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Elliptical camera track.
    pub path: PathOptions,
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Scroll region and smoothing.
    pub scroll: ScrollOptions,
    /// Frame pacing.
    pub frame: FrameOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrbitError> {
        let content = std::fs::read_to_string(path).map_err(OrbitError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, OrbitError> {
        toml::from_str(content)
            .map_err(|e| OrbitError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrbitError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbitError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbitError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbitError::Io)
    }

    /// Check every section that can be checked without a viewport.
    pub fn validate(&self) -> Result<(), OrbitError> {
        let _ = self.path.to_params()?;
        self.camera.validate()?;
        self.scroll.validate()
    }
}

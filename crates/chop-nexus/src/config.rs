//! Generator settings.

use std::path::Path;

use chop_core::{ChopError, Result, Tolerance};
use chop_mesh::{FacePolicy, SectorMesher};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Distance of the front and back planes from z = 0.
    pub half_depth: f64,
    pub face_policy: FacePolicy,
    /// Widest arc, in degrees, one rim quad may bridge under solid sectors.
    pub arc_step_degrees: f64,
    pub tolerance: Tolerance,
}

impl GeneratorConfig {
    pub const DEFAULT_HALF_DEPTH: f64 = 50.0;

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| ChopError::Parse(format!("generator config: {}", e)))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            half_depth: Self::DEFAULT_HALF_DEPTH,
            face_policy: FacePolicy::default(),
            arc_step_degrees: SectorMesher::DEFAULT_ARC_STEP_DEGREES,
            tolerance: Tolerance::default(),
        }
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! File-based configuration.
//!
//! A JSON file overrides the defaults; a missing file is not an error, the
//! defaults simply apply.

use crate::animator::RotationAnimator;
use crate::error::EffectError;
use crate::keyframe::InterpolationMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for dense transition sampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Samples per second of transition.
    pub fps: f32,
    /// Hard ceiling on samples per transition, to bound downstream work.
    pub max_frames: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            fps: 30.0,
            max_frames: 30,
        }
    }
}

/// Top-level animator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    /// Display name of the rotation effect to target.
    pub effect_name: String,
    /// Interpolation mode written at transition keyframes.
    pub interpolation: InterpolationMode,
    /// Dense sampling settings.
    pub sampling: SamplingConfig,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            effect_name: RotationAnimator::DEFAULT_EFFECT.to_string(),
            interpolation: InterpolationMode::default(),
            sampling: SamplingConfig::default(),
        }
    }
}

impl AnimatorConfig {
    /// Load configuration from a JSON file, falling back to the defaults
    /// when the file does not exist. A file that exists but fails to parse
    /// is an error.
    pub fn load(path: &Path) -> Result<Self, EffectError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text =
            std::fs::read_to_string(path).map_err(|err| EffectError::Config(err.to_string()))?;
        Self::from_json(&text)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(text: &str) -> Result<Self, EffectError> {
        serde_json::from_str(text).map_err(|err| EffectError::Config(err.to_string()))
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! Keyframe samples and interpolation utilities.

use serde::{Deserialize, Serialize};

/// Interpolation mode applied at a keyframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InterpolationMode {
    /// Constant angular velocity across the segment.
    Linear,
    /// Eased start and stop. The default: linear interpolation reads as an
    /// abrupt jolt in simulated camera motion.
    #[default]
    Bezier,
}

/// One animation sample on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyframeSpec {
    /// Time in seconds, >= 0.
    pub time: f32,
    /// Parameter value at this instant.
    pub value: f32,
}

impl KeyframeSpec {
    /// Create a keyframe sample.
    pub fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// Interpolation utilities.
pub struct Interpolation;

impl Interpolation {
    /// Linear interpolation between two floats.
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Cubic bezier interpolation.
    pub fn bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        p0 * mt3 + 3.0 * p1 * mt2 * t + 3.0 * p2 * mt * t2 + p3 * t3
    }

    /// Eased interpolation with zero velocity at both endpoints.
    ///
    /// A cubic bezier with both inner control points pinned to the endpoint
    /// values, the curve a `Bezier` keyframe pair produces when the host
    /// assigns default tangents.
    pub fn ease(a: f32, b: f32, t: f32) -> f32 {
        Self::bezier(a, a, b, b, t)
    }
}

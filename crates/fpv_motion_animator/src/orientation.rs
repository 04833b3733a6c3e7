// SPDX-License-Identifier: MIT OR Apache-2.0
//! Two-axis camera orientation.

use crate::store::ParameterId;
use serde::{Deserialize, Serialize};

/// Orientation of the simulated camera: swivel and tilt angles in degrees.
///
/// Angles are unconstrained; values outside [-180, 180] are passed through
/// to the underlying rotation model unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Orientation {
    /// Rotation around the vertical axis (yaw-like), degrees.
    pub swivel: f32,
    /// Rotation around the horizontal axis (pitch-like), degrees.
    pub tilt: f32,
}

impl Orientation {
    /// The zero orientation, also the best-effort read default.
    pub const ZERO: Orientation = Orientation {
        swivel: 0.0,
        tilt: 0.0,
    };

    /// Create an orientation from swivel and tilt angles in degrees.
    pub fn new(swivel: f32, tilt: f32) -> Self {
        Self { swivel, tilt }
    }

    /// Per-axis components in store write order.
    pub fn components(&self) -> [(ParameterId, f32); 2] {
        [
            (ParameterId::Swivel, self.swivel),
            (ParameterId::Tilt, self.tilt),
        ]
    }

    /// Whether both angles are finite.
    pub fn is_finite(&self) -> bool {
        self.swivel.is_finite() && self.tilt.is_finite()
    }
}

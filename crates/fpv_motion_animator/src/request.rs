// SPDX-License-Identifier: MIT OR Apache-2.0
//! One-shot transition requests.

use crate::error::EffectError;
use crate::keyframe::KeyframeSpec;
use crate::orientation::Orientation;
use crate::store::ParameterId;
use serde::{Deserialize, Serialize};

/// A one-shot animation job: rotate from `start` to `end` over `duration`.
///
/// Validated, translated into one (start, end) keyframe pair per axis, and
/// handed to the store; the request holds no state afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionRequest {
    /// Orientation at the start of the transition.
    pub start: Orientation,
    /// Orientation at the end of the transition.
    pub end: Orientation,
    /// Transition start time in seconds, >= 0.
    pub start_time: f32,
    /// Transition length in seconds, > 0.
    pub duration: f32,
}

impl TransitionRequest {
    /// Create a transition request. Call [`Self::validate`] before use.
    pub fn new(start: Orientation, end: Orientation, start_time: f32, duration: f32) -> Self {
        Self {
            start,
            end,
            start_time,
            duration,
        }
    }

    /// Time of the transition's final keyframe.
    pub fn end_time(&self) -> f32 {
        self.start_time + self.duration
    }

    /// Check the request invariants.
    ///
    /// A zero or negative duration would collide the start and end keyframes
    /// in time, so it is rejected outright.
    pub fn validate(&self) -> Result<(), EffectError> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(EffectError::InvalidRequest(
                "orientation angles must be finite".into(),
            ));
        }
        // Negated comparisons so NaN fails too.
        if !(self.duration > 0.0) || !self.duration.is_finite() {
            return Err(EffectError::InvalidRequest(format!(
                "duration must be positive, got {}",
                self.duration
            )));
        }
        if !(self.start_time >= 0.0) || !self.start_time.is_finite() {
            return Err(EffectError::InvalidRequest(format!(
                "start time must be non-negative, got {}",
                self.start_time
            )));
        }
        Ok(())
    }

    /// The keyframe pair for each rotation axis, in write order.
    pub fn axis_pairs(&self) -> [(ParameterId, KeyframeSpec, KeyframeSpec); 2] {
        let end_time = self.end_time();
        [
            (
                ParameterId::Swivel,
                KeyframeSpec::new(self.start_time, self.start.swivel),
                KeyframeSpec::new(end_time, self.end.swivel),
            ),
            (
                ParameterId::Tilt,
                KeyframeSpec::new(self.start_time, self.start.tilt),
                KeyframeSpec::new(end_time, self.end.tilt),
            ),
        ]
    }
}

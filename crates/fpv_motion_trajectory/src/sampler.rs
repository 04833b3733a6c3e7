// SPDX-License-Identifier: MIT OR Apache-2.0
//! Dense per-frame sampling of rotation transitions.
//!
//! For hosts that want one keyframe per frame instead of a two-keyframe
//! eased pair. Sample counts are bounded by a frame budget so a long
//! transition cannot flood downstream processing.

use crate::bezier::bezier_trajectory;
use crate::error::SampleError;
use crate::rotation::RotationVector;
use fpv_motion_animator::{Interpolation, InterpolationMode, KeyframeSpec, SamplingConfig};
use tracing::warn;

/// Samples a rotation transition into per-frame angle triples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSampler {
    /// Samples per second of transition.
    pub fps: f32,
    /// Hard ceiling on samples per transition.
    pub max_frames: usize,
    /// Time easing applied across the transition.
    pub interpolation: InterpolationMode,
}

impl TransitionSampler {
    /// Create a sampler with the given rate and frame budget.
    pub fn new(fps: f32, max_frames: usize) -> Self {
        Self {
            fps,
            max_frames,
            interpolation: InterpolationMode::default(),
        }
    }

    /// Create a sampler from sampling configuration.
    pub fn from_config(config: &SamplingConfig) -> Self {
        Self::new(config.fps, config.max_frames)
    }

    /// Override the time easing.
    pub fn with_interpolation(mut self, mode: InterpolationMode) -> Self {
        self.interpolation = mode;
        self
    }

    /// Sample count for a transition of `duration` seconds, after the
    /// frame budget.
    fn frame_count(&self, duration: f32) -> usize {
        let frames = (duration * self.fps) as usize;
        if frames > self.max_frames {
            warn!(
                frames,
                budget = self.max_frames,
                "clamping transition sample count to frame budget"
            );
            self.max_frames
        } else {
            frames
        }
    }

    fn eased(&self, t: f32) -> f32 {
        match self.interpolation {
            InterpolationMode::Linear => t,
            InterpolationMode::Bezier => Interpolation::ease(0.0, 1.0, t),
        }
    }

    /// Sample per-frame rotation angles (degrees, `[x, y, z]`) across a
    /// transition, endpoints inclusive.
    pub fn sample(
        &self,
        start: [f32; 3],
        end: [f32; 3],
        duration: f32,
    ) -> Result<Vec<[f32; 3]>, SampleError> {
        if !(duration > 0.0) || !duration.is_finite() {
            return Err(SampleError::InvalidDuration(duration));
        }
        let steps = self.frame_count(duration);
        if steps < 2 {
            return Err(SampleError::TooFewFrames(steps));
        }

        let a = RotationVector::from_degrees(start);
        let b = RotationVector::from_degrees(end);
        Ok((0..steps)
            .map(|i| {
                let t = self.eased(i as f32 / (steps - 1) as f32);
                RotationVector::lerp(a, b, t).to_degrees()
            })
            .collect())
    }

    /// Sample a curved path through rotation waypoints (degrees), with the
    /// same frame budget as [`Self::sample`].
    pub fn sample_path(
        &self,
        waypoints: &[[f32; 3]],
        duration: f32,
    ) -> Result<Vec<[f32; 3]>, SampleError> {
        if !(duration > 0.0) || !duration.is_finite() {
            return Err(SampleError::InvalidDuration(duration));
        }
        let steps = self.frame_count(duration);
        if steps < 2 {
            return Err(SampleError::TooFewFrames(steps));
        }
        Ok(bezier_trajectory(waypoints, steps))
    }

    /// Turn sampled angles into keyframe specs for one axis (0 = x/swivel,
    /// 1 = y/tilt, 2 = z/roll), spread evenly across the transition.
    pub fn axis_keyframes(
        samples: &[[f32; 3]],
        axis: usize,
        start_time: f32,
        duration: f32,
    ) -> Vec<KeyframeSpec> {
        if samples.len() < 2 {
            return samples
                .iter()
                .map(|s| KeyframeSpec::new(start_time, s[axis]))
                .collect();
        }
        let step = duration / (samples.len() - 1) as f32;
        samples
            .iter()
            .enumerate()
            .map(|(i, s)| KeyframeSpec::new(start_time + step * i as f32, s[axis]))
            .collect()
    }
}

impl Default for TransitionSampler {
    fn default() -> Self {
        Self::from_config(&SamplingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-3, "{a} != {b}");
    }

    #[test]
    fn test_sample_endpoints_match_request() {
        let sampler = TransitionSampler::new(10.0, 100);
        let samples = sampler
            .sample([0.0, 0.0, 0.0], [15.0, -10.0, 0.0], 2.0)
            .unwrap();

        assert_eq!(samples.len(), 20);
        assert_close(samples[0][0], 0.0);
        assert_close(samples[19][0], 15.0);
        assert_close(samples[19][1], -10.0);
    }

    #[test]
    fn test_frame_budget_clamps_sample_count() {
        let sampler = TransitionSampler::new(30.0, 30);
        let samples = sampler
            .sample([0.0, 0.0, 0.0], [90.0, 0.0, 0.0], 10.0)
            .unwrap();
        assert_eq!(samples.len(), 30);
        // Endpoints still land exactly despite the clamp.
        assert_close(samples[29][0], 90.0);
    }

    #[test]
    fn test_eased_sampling_lags_linear_early_on() {
        let eased = TransitionSampler::new(10.0, 100);
        let linear = eased.with_interpolation(InterpolationMode::Linear);

        let e = eased.sample([0.0; 3], [100.0, 0.0, 0.0], 2.0).unwrap();
        let l = linear.sample([0.0; 3], [100.0, 0.0, 0.0], 2.0).unwrap();
        assert!(e[2][0] < l[2][0]);
    }

    #[test]
    fn test_invalid_duration_rejected() {
        let sampler = TransitionSampler::default();
        assert_eq!(
            sampler.sample([0.0; 3], [1.0; 3], 0.0),
            Err(SampleError::InvalidDuration(0.0))
        );
        assert!(sampler.sample([0.0; 3], [1.0; 3], -1.0).is_err());
    }

    #[test]
    fn test_too_short_transition_rejected() {
        let sampler = TransitionSampler::new(30.0, 30);
        assert!(matches!(
            sampler.sample([0.0; 3], [1.0; 3], 0.05),
            Err(SampleError::TooFewFrames(_))
        ));
    }

    #[test]
    fn test_axis_keyframes_spread_over_duration() {
        let sampler = TransitionSampler::new(2.0, 100).with_interpolation(InterpolationMode::Linear);
        let samples = sampler
            .sample([0.0, 0.0, 0.0], [30.0, 0.0, 0.0], 2.0)
            .unwrap();
        let keyframes = TransitionSampler::axis_keyframes(&samples, 0, 1.0, 2.0);

        assert_eq!(keyframes.len(), 4);
        assert_close(keyframes[0].time, 1.0);
        assert_close(keyframes[3].time, 3.0);
        assert_close(keyframes[0].value, 0.0);
        assert_close(keyframes[3].value, 30.0);
    }

    #[test]
    fn test_dense_keyframes_write_into_a_store() {
        use fpv_motion_animator::{
            EffectParameterStore, MemoryEffectStore, ParameterId, RotationAnimator,
        };

        let mut store = MemoryEffectStore::new();
        let effect = store.add_effect(RotationAnimator::DEFAULT_EFFECT);
        let param = store.parameter(effect, ParameterId::Swivel).unwrap();
        store.enable_time_varying(param).unwrap();

        let sampler = TransitionSampler::new(10.0, 100);
        let samples = sampler
            .sample([0.0, 0.0, 0.0], [15.0, -10.0, 0.0], 2.0)
            .unwrap();
        for kf in TransitionSampler::axis_keyframes(&samples, 0, 0.0, 2.0) {
            store.set_value_at_keyframe(param, kf.time, kf.value).unwrap();
        }

        let written = store.keyframes(param);
        assert_eq!(written.len(), 20);
        assert!(written.windows(2).all(|w| w[0].time < w[1].time));
        assert_close(written[19].value, 15.0);
    }

    #[test]
    fn test_sample_path_through_waypoints() {
        let sampler = TransitionSampler::new(10.0, 100);
        let waypoints = [[0.0, 0.0, 0.0], [10.0, 20.0, 0.0], [20.0, 0.0, 0.0]];
        let samples = sampler.sample_path(&waypoints, 1.0).unwrap();

        assert_eq!(samples.len(), 10);
        assert_eq!(samples[0], waypoints[0]);
        assert_close(samples[9][0], 20.0);
    }
}

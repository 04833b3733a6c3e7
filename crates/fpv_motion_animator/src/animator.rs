// SPDX-License-Identifier: MIT OR Apache-2.0
//! The rotation animator.
//!
//! Translates [`TransitionRequest`]s into keyframe writes on an external
//! parameter store and reads current orientation back. Stateless: the only
//! persistent state lives in the store.

use crate::config::AnimatorConfig;
use crate::error::EffectError;
use crate::keyframe::InterpolationMode;
use crate::orientation::Orientation;
use crate::request::TransitionRequest;
use crate::store::{EffectParameterStore, ParameterId};
use tracing::debug;

/// Applies FPV rotation animation onto an external parameter store.
#[derive(Debug, Clone)]
pub struct RotationAnimator {
    effect_name: String,
    interpolation: InterpolationMode,
}

impl RotationAnimator {
    /// Display name of the 3D rotation effect in the reference host.
    pub const DEFAULT_EFFECT: &'static str = "Basic 3D";

    /// Create an animator targeting the effect with the given display name.
    pub fn new(effect_name: impl Into<String>) -> Self {
        Self {
            effect_name: effect_name.into(),
            interpolation: InterpolationMode::default(),
        }
    }

    /// Override the interpolation mode written at transition keyframes.
    pub fn with_interpolation(mut self, mode: InterpolationMode) -> Self {
        self.interpolation = mode;
        self
    }

    /// Create an animator from configuration.
    pub fn from_config(config: &AnimatorConfig) -> Self {
        Self::new(config.effect_name.clone()).with_interpolation(config.interpolation)
    }

    /// Display name of the targeted effect.
    pub fn effect_name(&self) -> &str {
        &self.effect_name
    }

    /// Set every parameter to a static value: the rotation axes from
    /// `orientation`, the auxiliary depth and highlight parameters to 0.
    ///
    /// Idempotent; applying the same orientation twice leaves the store in
    /// the same observable state as applying it once.
    pub fn apply_static_orientation(
        &self,
        store: &mut dyn EffectParameterStore,
        orientation: Orientation,
    ) -> Result<(), EffectError> {
        let effect = store
            .resolve_effect(&self.effect_name)
            .ok_or_else(|| EffectError::EffectUnavailable(self.effect_name.clone()))?;

        for (id, value) in orientation.components() {
            let param = store
                .parameter(effect, id)
                .ok_or(EffectError::ParameterUnavailable(id))?;
            store.set_value(param, value)?;
        }
        for id in ParameterId::AUXILIARY {
            let param = store
                .parameter(effect, id)
                .ok_or(EffectError::ParameterUnavailable(id))?;
            store.set_value(param, 0.0)?;
        }
        Ok(())
    }

    /// Write an eased two-keyframe transition for each rotation axis.
    ///
    /// Axes are written in order (swivel, then tilt); each axis gets its
    /// time-varying mode enabled, a keyframe at `request.start_time` and one
    /// at `request.start_time + duration`, both with the configured
    /// interpolation mode. Keyframes landing on an existing timestamp
    /// overwrite it, so the axis sequence never holds duplicates.
    ///
    /// Fail-fast: a failure on one axis aborts the remaining axes without
    /// rolling back axes already written. Callers needing cross-axis
    /// atomicity must snapshot and restore the store themselves.
    pub fn create_transition(
        &self,
        store: &mut dyn EffectParameterStore,
        request: TransitionRequest,
    ) -> Result<(), EffectError> {
        request.validate()?;

        let effect = store
            .resolve_effect(&self.effect_name)
            .ok_or_else(|| EffectError::EffectUnavailable(self.effect_name.clone()))?;

        for (axis, start, end) in request.axis_pairs() {
            let param = store
                .parameter(effect, axis)
                .ok_or(EffectError::ParameterUnavailable(axis))?;
            if !store.supports_time_varying(param) {
                return Err(EffectError::TimeVaryingUnsupported(axis));
            }
            store.enable_time_varying(param)?;

            for keyframe in [start, end] {
                store.add_keyframe(param, keyframe.time)?;
                store.set_value_at_keyframe(param, keyframe.time, keyframe.value)?;
                store.set_interpolation(param, keyframe.time, self.interpolation)?;
            }
            debug!(
                axis = %axis,
                start_time = start.time,
                end_time = end.time,
                "wrote transition keyframes"
            );
        }
        Ok(())
    }

    /// Read the current orientation from the store.
    ///
    /// Best-effort: if the effect or a parameter cannot be resolved this
    /// returns [`Orientation::ZERO`] rather than an error, so the caller
    /// cannot distinguish "truly zero" from "unavailable".
    pub fn read_current_orientation(&self, store: &dyn EffectParameterStore) -> Orientation {
        self.try_read(store).unwrap_or(Orientation::ZERO)
    }

    fn try_read(&self, store: &dyn EffectParameterStore) -> Option<Orientation> {
        let effect = store.resolve_effect(&self.effect_name)?;
        let swivel = store.value(store.parameter(effect, ParameterId::Swivel)?)?;
        let tilt = store.value(store.parameter(effect, ParameterId::Tilt)?)?;
        Some(Orientation::new(swivel, tilt))
    }
}

impl Default for RotationAnimator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EFFECT)
    }
}

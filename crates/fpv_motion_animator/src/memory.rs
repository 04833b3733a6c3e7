// SPDX-License-Identifier: MIT OR Apache-2.0
//! In-memory parameter store.
//!
//! A complete [`EffectParameterStore`] backed by plain maps. The test suite
//! runs against it, and hosts without a native scripting backend can use it
//! as a staging area before flushing state to their own object model.

use crate::error::EffectError;
use crate::keyframe::{Interpolation, InterpolationMode};
use crate::store::{EffectHandle, EffectParameterStore, ParameterHandle, ParameterId};
use indexmap::IndexMap;

/// Timestamps closer than this are treated as the same keyframe.
pub const KEYFRAME_EPSILON: f32 = 1e-3;

/// One keyframe held by the memory store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoredKeyframe {
    /// Time in seconds.
    pub time: f32,
    /// Value at this keyframe.
    pub value: f32,
    /// Interpolation mode to the next keyframe.
    pub interpolation: InterpolationMode,
}

#[derive(Debug, Clone)]
struct StoredParameter {
    id: ParameterId,
    value: f32,
    animatable: bool,
    time_varying: bool,
    keyframes: Vec<StoredKeyframe>,
}

impl StoredParameter {
    fn new(id: ParameterId) -> Self {
        Self {
            id,
            value: 0.0,
            animatable: true,
            time_varying: false,
            keyframes: Vec::new(),
        }
    }

    fn keyframe_index_near(&self, time: f32) -> Option<usize> {
        self.keyframes
            .iter()
            .position(|k| (k.time - time).abs() < KEYFRAME_EPSILON)
    }

    /// Insert or overwrite the keyframe at `time`, keeping timestamps
    /// strictly increasing.
    fn upsert_keyframe(&mut self, time: f32, value: f32) {
        if let Some(idx) = self.keyframe_index_near(time) {
            self.keyframes[idx].value = value;
        } else {
            let interpolation = InterpolationMode::default();
            self.keyframes.push(StoredKeyframe {
                time,
                value,
                interpolation,
            });
            self.keyframes
                .sort_by(|a, b| a.time.total_cmp(&b.time));
        }
    }
}

#[derive(Debug, Clone)]
struct StoredEffect {
    name: String,
    handle: EffectHandle,
    parameters: IndexMap<ParameterId, ParameterHandle>,
}

/// An in-process [`EffectParameterStore`].
///
/// Effects are registered under a display name and looked up with a linear
/// scan, like a host walking the effects applied to one clip.
#[derive(Debug, Clone, Default)]
pub struct MemoryEffectStore {
    effects: Vec<StoredEffect>,
    parameters: IndexMap<ParameterHandle, StoredParameter>,
}

impl MemoryEffectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an effect with the standard rotation parameter set.
    pub fn add_effect(&mut self, name: impl Into<String>) -> EffectHandle {
        let handle = EffectHandle::new();
        let mut parameters = IndexMap::new();
        for id in ParameterId::ALL {
            let param = ParameterHandle::new();
            parameters.insert(id, param);
            self.parameters.insert(param, StoredParameter::new(id));
        }
        self.effects.push(StoredEffect {
            name: name.into(),
            handle,
            parameters,
        });
        handle
    }

    /// Mark a parameter as (not) animatable, for hosts where an axis cannot
    /// be keyframed.
    pub fn set_animatable(&mut self, param: ParameterHandle, animatable: bool) {
        if let Some(p) = self.parameters.get_mut(&param) {
            p.animatable = animatable;
        }
    }

    /// Whether the parameter is in time-varying mode.
    pub fn is_time_varying(&self, param: ParameterHandle) -> bool {
        self.parameters
            .get(&param)
            .is_some_and(|p| p.time_varying)
    }

    /// Keyframes of a parameter, sorted by time.
    pub fn keyframes(&self, param: ParameterHandle) -> &[StoredKeyframe] {
        self.parameters
            .get(&param)
            .map_or(&[], |p| p.keyframes.as_slice())
    }

    /// Evaluate the parameter at `time`.
    ///
    /// A parameter that is not time-varying (or has no keyframes) reports its
    /// static value. Outside the keyframe range the nearest keyframe's value
    /// holds; between keyframes the earlier keyframe's interpolation mode
    /// applies.
    pub fn animated_value(&self, param: ParameterHandle, time: f32) -> Option<f32> {
        let p = self.parameters.get(&param)?;
        if !p.time_varying || p.keyframes.is_empty() {
            return Some(p.value);
        }

        let next_idx = p.keyframes.iter().position(|k| k.time >= time);
        match next_idx {
            None => Some(p.keyframes[p.keyframes.len() - 1].value),
            Some(0) => Some(p.keyframes[0].value),
            Some(idx) => {
                let a = &p.keyframes[idx - 1];
                let b = &p.keyframes[idx];
                let t = (time - a.time) / (b.time - a.time);
                let value = match a.interpolation {
                    InterpolationMode::Linear => Interpolation::lerp(a.value, b.value, t),
                    InterpolationMode::Bezier => Interpolation::ease(a.value, b.value, t),
                };
                Some(value)
            }
        }
    }

    fn param(&self, handle: ParameterHandle) -> Result<&StoredParameter, EffectError> {
        self.parameters
            .get(&handle)
            .ok_or(EffectError::StaleHandle)
    }

    fn param_mut(&mut self, handle: ParameterHandle) -> Result<&mut StoredParameter, EffectError> {
        self.parameters
            .get_mut(&handle)
            .ok_or(EffectError::StaleHandle)
    }
}

impl EffectParameterStore for MemoryEffectStore {
    fn resolve_effect(&self, name: &str) -> Option<EffectHandle> {
        self.effects
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.handle)
    }

    fn parameter(&self, effect: EffectHandle, id: ParameterId) -> Option<ParameterHandle> {
        self.effects
            .iter()
            .find(|e| e.handle == effect)?
            .parameters
            .get(&id)
            .copied()
    }

    fn value(&self, param: ParameterHandle) -> Option<f32> {
        self.parameters.get(&param).map(|p| p.value)
    }

    fn set_value(&mut self, param: ParameterHandle, value: f32) -> Result<(), EffectError> {
        if !value.is_finite() {
            return Err(EffectError::InvalidValue(value));
        }
        self.param_mut(param)?.value = value;
        Ok(())
    }

    fn supports_time_varying(&self, param: ParameterHandle) -> bool {
        self.parameters.get(&param).is_some_and(|p| p.animatable)
    }

    fn enable_time_varying(&mut self, param: ParameterHandle) -> Result<(), EffectError> {
        let p = self.param_mut(param)?;
        if !p.animatable {
            return Err(EffectError::TimeVaryingUnsupported(p.id));
        }
        p.time_varying = true;
        Ok(())
    }

    fn add_keyframe(&mut self, param: ParameterHandle, time: f32) -> Result<(), EffectError> {
        if !(time >= 0.0) || !time.is_finite() {
            return Err(EffectError::InvalidRequest(format!(
                "keyframe time must be non-negative, got {time}"
            )));
        }
        let p = self.param_mut(param)?;
        if !p.time_varying {
            return Err(EffectError::TimeVaryingUnsupported(p.id));
        }
        // Reuse an existing keyframe at this timestamp; value is seeded from
        // the static value until set explicitly.
        if p.keyframe_index_near(time).is_none() {
            let value = p.value;
            p.upsert_keyframe(time, value);
        }
        Ok(())
    }

    fn set_value_at_keyframe(
        &mut self,
        param: ParameterHandle,
        time: f32,
        value: f32,
    ) -> Result<(), EffectError> {
        if !value.is_finite() {
            return Err(EffectError::InvalidValue(value));
        }
        let p = self.param_mut(param)?;
        if !p.time_varying {
            return Err(EffectError::TimeVaryingUnsupported(p.id));
        }
        p.upsert_keyframe(time, value);
        Ok(())
    }

    fn set_interpolation(
        &mut self,
        param: ParameterHandle,
        time: f32,
        mode: InterpolationMode,
    ) -> Result<(), EffectError> {
        let p = self.param_mut(param)?;
        let Some(idx) = p.keyframe_index_near(time) else {
            return Err(EffectError::InvalidRequest(format!(
                "no keyframe at {time} to set interpolation on"
            )));
        };
        p.keyframes[idx].interpolation = mode;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_param() -> (MemoryEffectStore, ParameterHandle) {
        let mut store = MemoryEffectStore::new();
        let effect = store.add_effect("Basic 3D");
        let param = store.parameter(effect, ParameterId::Swivel).unwrap();
        (store, param)
    }

    #[test]
    fn test_resolve_effect_by_display_name() {
        let mut store = MemoryEffectStore::new();
        store.add_effect("Gaussian Blur");
        let handle = store.add_effect("Basic 3D");
        assert_eq!(store.resolve_effect("Basic 3D"), Some(handle));
        assert_eq!(store.resolve_effect("Lens Flare"), None);
    }

    #[test]
    fn test_keyframes_stay_sorted() {
        let (mut store, param) = store_with_param();
        store.enable_time_varying(param).unwrap();
        store.set_value_at_keyframe(param, 2.0, 10.0).unwrap();
        store.set_value_at_keyframe(param, 0.5, 3.0).unwrap();
        store.set_value_at_keyframe(param, 1.0, 5.0).unwrap();

        let times: Vec<f32> = store.keyframes(param).iter().map(|k| k.time).collect();
        assert_eq!(times, vec![0.5, 1.0, 2.0]);
    }

    #[test]
    fn test_overwrite_within_epsilon() {
        let (mut store, param) = store_with_param();
        store.enable_time_varying(param).unwrap();
        store.set_value_at_keyframe(param, 1.0, 10.0).unwrap();
        store.set_value_at_keyframe(param, 1.0005, 20.0).unwrap();

        let kfs = store.keyframes(param);
        assert_eq!(kfs.len(), 1);
        assert_eq!(kfs[0].value, 20.0);
    }

    #[test]
    fn test_keyframes_require_time_varying_mode() {
        let (mut store, param) = store_with_param();
        assert!(matches!(
            store.add_keyframe(param, 0.0),
            Err(EffectError::TimeVaryingUnsupported(ParameterId::Swivel))
        ));
    }

    #[test]
    fn test_non_animatable_parameter_cannot_enable() {
        let (mut store, param) = store_with_param();
        store.set_animatable(param, false);
        assert!(!store.supports_time_varying(param));
        assert!(matches!(
            store.enable_time_varying(param),
            Err(EffectError::TimeVaryingUnsupported(ParameterId::Swivel))
        ));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let (mut store, param) = store_with_param();
        assert!(matches!(
            store.set_value(param, f32::NAN),
            Err(EffectError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_animated_value_eases_between_keyframes() {
        let (mut store, param) = store_with_param();
        store.enable_time_varying(param).unwrap();
        store.set_value_at_keyframe(param, 0.0, 0.0).unwrap();
        store.set_value_at_keyframe(param, 2.0, 10.0).unwrap();

        // Default Bezier easing: midpoint matches linear, quarter point lags.
        let mid = store.animated_value(param, 1.0).unwrap();
        assert!((mid - 5.0).abs() < 1e-4);
        let quarter = store.animated_value(param, 0.5).unwrap();
        assert!(quarter < 2.5);

        // Clamped outside the keyframe range.
        assert_eq!(store.animated_value(param, -1.0), Some(0.0));
        assert_eq!(store.animated_value(param, 5.0), Some(10.0));
    }

    #[test]
    fn test_static_parameter_reports_static_value() {
        let (mut store, param) = store_with_param();
        store.set_value(param, 7.5).unwrap();
        assert_eq!(store.animated_value(param, 1.0), Some(7.5));
    }
}

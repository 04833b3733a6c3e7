// SPDX-License-Identifier: MIT OR Apache-2.0
//! The host-supplied parameter store capability.
//!
//! The host (an editing application, a test harness) owns all effect state.
//! The animator only ever touches it through [`EffectParameterStore`], so the
//! core stays free of host object models and stringly property IDs.

use crate::error::EffectError;
use crate::keyframe::InterpolationMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque handle to an effect resolved on a clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectHandle(pub Uuid);

impl EffectHandle {
    /// Create a new random effect handle.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EffectHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Opaque handle to a parameter of a resolved effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterHandle(pub Uuid);

impl ParameterHandle {
    /// Create a new random parameter handle.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ParameterHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Typed addressing for the rotation effect's parameters.
///
/// The store maps these to whatever identifiers its host uses; the core
/// never sees a host property ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterId {
    /// Rotation around the vertical axis.
    Swivel,
    /// Rotation around the horizontal axis.
    Tilt,
    /// Depth/position value, held at 0 for pure rotation.
    Depth,
    /// Specular highlight value, held at 0 for pure rotation.
    Highlight,
}

impl ParameterId {
    /// The two rotation axes, in write order.
    pub const AXES: [ParameterId; 2] = [ParameterId::Swivel, ParameterId::Tilt];

    /// Fixed auxiliary parameters the effect carries besides the axes.
    pub const AUXILIARY: [ParameterId; 2] = [ParameterId::Depth, ParameterId::Highlight];

    /// All parameters of the rotation effect.
    pub const ALL: [ParameterId; 4] = [
        ParameterId::Swivel,
        ParameterId::Tilt,
        ParameterId::Depth,
        ParameterId::Highlight,
    ];

    /// Display name of the parameter.
    pub fn name(&self) -> &'static str {
        match self {
            ParameterId::Swivel => "Swivel",
            ParameterId::Tilt => "Tilt",
            ParameterId::Depth => "Depth",
            ParameterId::Highlight => "Highlight",
        }
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capability the host supplies for manipulating effect parameters.
///
/// Mutating calls take `&mut self`: the caller owns the store exclusively
/// for the duration of one operation, which is the whole concurrency model.
/// Implementations resolve effects by display name with a linear scan;
/// effect counts per clip are small and the lookup is not worth indexing.
pub trait EffectParameterStore {
    /// Find an effect on the clip by display name.
    fn resolve_effect(&self, name: &str) -> Option<EffectHandle>;

    /// Look up a parameter of a resolved effect.
    fn parameter(&self, effect: EffectHandle, id: ParameterId) -> Option<ParameterHandle>;

    /// Current static value of a parameter.
    fn value(&self, param: ParameterHandle) -> Option<f32>;

    /// Set a parameter to a static value.
    fn set_value(&mut self, param: ParameterHandle, value: f32) -> Result<(), EffectError>;

    /// Whether the parameter can hold time-varying values.
    fn supports_time_varying(&self, param: ParameterHandle) -> bool;

    /// Switch the parameter into time-varying (keyframed) mode.
    fn enable_time_varying(&mut self, param: ParameterHandle) -> Result<(), EffectError>;

    /// Insert a keyframe at `time`. A keyframe already within epsilon of
    /// `time` is reused rather than duplicated.
    fn add_keyframe(&mut self, param: ParameterHandle, time: f32) -> Result<(), EffectError>;

    /// Set the value of the keyframe at `time`, creating it if absent.
    fn set_value_at_keyframe(
        &mut self,
        param: ParameterHandle,
        time: f32,
        value: f32,
    ) -> Result<(), EffectError>;

    /// Set the interpolation mode of the keyframe at `time`.
    fn set_interpolation(
        &mut self,
        param: ParameterHandle,
        time: f32,
        mode: InterpolationMode,
    ) -> Result<(), EffectError>;
}

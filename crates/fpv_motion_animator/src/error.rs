// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error taxonomy for rotation-animation operations.
//!
//! Every failure here is request-scoped and recoverable at the boundary;
//! there are no fatal error classes. Read paths never surface these (see
//! [`crate::animator::RotationAnimator::read_current_orientation`]).

use crate::store::ParameterId;
use thiserror::Error;

/// Error from an animation operation against a parameter store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EffectError {
    /// The target effect is not present on the clip.
    #[error("effect not found: {0}")]
    EffectUnavailable(String),

    /// The effect does not expose the requested parameter.
    #[error("parameter not available: {0}")]
    ParameterUnavailable(ParameterId),

    /// The parameter cannot hold time-varying values.
    #[error("parameter cannot be animated: {0}")]
    TimeVaryingUnsupported(ParameterId),

    /// The request failed validation; the store was not touched.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The store rejected a value outside its domain.
    #[error("value rejected by the store: {0}")]
    InvalidValue(f32),

    /// A handle no longer refers to a live parameter.
    #[error("stale parameter handle")]
    StaleHandle,

    /// The configuration file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}

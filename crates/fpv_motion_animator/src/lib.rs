// SPDX-License-Identifier: MIT OR Apache-2.0
//! Keyframe-based rotation animation for a simulated FPV camera move.
//!
//! The core translates one-shot [`TransitionRequest`]s into eased keyframe
//! pairs on a host-owned [`EffectParameterStore`], and reads orientation
//! back best-effort. The host's object model never leaks in; everything
//! goes through the store capability and typed [`ParameterId`]s.
//!
//! ## Architecture
//!
//! - [`animator`] — the stateless [`RotationAnimator`] operations
//! - [`store`] — the capability trait hosts implement, plus opaque handles
//! - [`memory`] — an in-process store for tests and headless hosts
//! - [`bridge`] — boolean-outcome entry points for scripting boundaries
//! - [`config`] — JSON file configuration with in-code defaults

pub mod animator;
pub mod bridge;
pub mod config;
pub mod error;
pub mod keyframe;
pub mod memory;
pub mod orientation;
pub mod request;
pub mod store;

pub use animator::RotationAnimator;
pub use config::{AnimatorConfig, SamplingConfig};
pub use error::EffectError;
pub use keyframe::{Interpolation, InterpolationMode, KeyframeSpec};
pub use memory::{MemoryEffectStore, StoredKeyframe, KEYFRAME_EPSILON};
pub use orientation::Orientation;
pub use request::TransitionRequest;
pub use store::{EffectHandle, EffectParameterStore, ParameterHandle, ParameterId};

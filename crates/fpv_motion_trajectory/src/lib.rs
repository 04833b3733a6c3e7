// SPDX-License-Identifier: MIT OR Apache-2.0
//! Dense trajectory sampling for FPV rotation transitions.
//!
//! Companion to `fpv_motion_animator`: where the animator writes a
//! two-keyframe eased pair, this crate produces per-frame samples for hosts
//! that keyframe every frame.
//!
//! - [`rotation`] — Rodrigues vectors, matrix conversion, pose interpolation
//! - [`bezier`] — Bernstein-polynomial trajectories through control points
//! - [`sampler`] — frame-budgeted transition sampling

pub mod bezier;
pub mod error;
pub mod rotation;
pub mod sampler;

pub use bezier::{bernstein, bezier_trajectory};
pub use error::SampleError;
pub use rotation::{trajectory_interpolate, RotationVector};
pub use sampler::TransitionSampler;

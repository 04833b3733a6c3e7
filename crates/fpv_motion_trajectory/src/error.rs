// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for trajectory sampling.

use thiserror::Error;

/// Error from sampling a transition.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SampleError {
    /// Duration must be positive.
    #[error("duration must be positive, got {0}")]
    InvalidDuration(f32),

    /// The frame budget yields too few samples to describe a transition.
    #[error("frame budget yields only {0} samples, need at least 2")]
    TooFewFrames(usize),
}

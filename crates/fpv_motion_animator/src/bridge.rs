// SPDX-License-Identifier: MIT OR Apache-2.0
//! The host boundary: primitive arguments in, boolean outcomes out.
//!
//! Host scripting layers cannot catch structured errors across the bridge,
//! so nothing here returns a `Result` and nothing panics: failures are
//! logged and collapsed to `false`, and reads degrade to zeroes.

use crate::animator::RotationAnimator;
use crate::orientation::Orientation;
use crate::request::TransitionRequest;
use crate::store::EffectParameterStore;
use tracing::warn;

/// Apply the rotation effect statically.
///
/// Argument naming follows the original panel API: the swivel parameter
/// receives `tilt` and the tilt parameter receives `pan`.
pub fn apply_fpv_effect(store: &mut dyn EffectParameterStore, tilt: f32, pan: f32) -> bool {
    let animator = RotationAnimator::default();
    match animator.apply_static_orientation(store, Orientation::new(tilt, pan)) {
        Ok(()) => true,
        Err(err) => {
            warn!(%err, "failed to apply FPV effect");
            false
        }
    }
}

/// Write transition keyframes from `start` to `end` angles ([swivel, tilt]
/// in degrees) over `duration` seconds.
pub fn create_transition_keyframes(
    store: &mut dyn EffectParameterStore,
    start: [f32; 2],
    end: [f32; 2],
    start_time: f32,
    duration: f32,
) -> bool {
    let animator = RotationAnimator::default();
    let request = TransitionRequest::new(
        Orientation::new(start[0], start[1]),
        Orientation::new(end[0], end[1]),
        start_time,
        duration,
    );
    match animator.create_transition(store, request) {
        Ok(()) => true,
        Err(err) => {
            warn!(%err, "failed to create transition keyframes");
            false
        }
    }
}

/// Read the current rotation as `[swivel, tilt]` degrees, zeroes if the
/// effect is absent.
pub fn get_current_rotation(store: &dyn EffectParameterStore) -> [f32; 2] {
    let orientation = RotationAnimator::default().read_current_orientation(store);
    [orientation.swivel, orientation.tilt]
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! Bezier trajectories through control points.

/// Binomial coefficient for the small `n` a trajectory ever uses.
fn binomial(n: usize, k: usize) -> u64 {
    let k = k.min(n - k);
    let mut acc: u64 = 1;
    for i in 0..k {
        acc = acc * (n - i) as u64 / (i + 1) as u64;
    }
    acc
}

/// Bernstein polynomial coefficient `B(i, n)` at `t`.
pub fn bernstein(i: usize, n: usize, t: f32) -> f32 {
    binomial(n, i) as f32 * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32)
}

/// Sample a smooth trajectory defined by Bezier control points.
///
/// Returns `steps` positions, endpoints inclusive; the curve passes through
/// the first and last control point and is pulled toward the rest.
pub fn bezier_trajectory(control_points: &[[f32; 3]], steps: usize) -> Vec<[f32; 3]> {
    if control_points.is_empty() || steps == 0 {
        return Vec::new();
    }
    if steps == 1 {
        return vec![control_points[0]];
    }
    if control_points.len() == 1 {
        return vec![control_points[0]; steps];
    }

    let n = control_points.len() - 1;
    (0..steps)
        .map(|s| {
            let t = s as f32 / (steps - 1) as f32;
            let mut point = [0.0f32; 3];
            for (i, cp) in control_points.iter().enumerate() {
                let coeff = bernstein(i, n, t);
                for (out, component) in point.iter_mut().zip(cp) {
                    *out += coeff * component;
                }
            }
            point
        })
        .collect()
}

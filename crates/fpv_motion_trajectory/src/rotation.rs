// SPDX-License-Identifier: MIT OR Apache-2.0
//! Axis-angle rotation math.
//!
//! Poses are carried as Rodrigues rotation vectors: direction is the
//! rotation axis, magnitude the angle in radians. Interpolating the vectors
//! linearly gives a constant-axis sweep between two poses, which is what a
//! simulated camera move wants.

use fpv_motion_animator::Interpolation;
use serde::{Deserialize, Serialize};

/// Below this angle a rotation is treated as the identity.
const ANGLE_EPSILON: f32 = 1e-6;

/// An axis-angle rotation (Rodrigues vector), components in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RotationVector(pub [f32; 3]);

impl RotationVector {
    /// Build from per-axis angles in degrees.
    pub fn from_degrees(angles: [f32; 3]) -> Self {
        Self(angles.map(f32::to_radians))
    }

    /// Per-axis angles in degrees.
    pub fn to_degrees(self) -> [f32; 3] {
        self.0.map(f32::to_degrees)
    }

    /// Rotation angle in radians (vector magnitude).
    pub fn angle(self) -> f32 {
        let [x, y, z] = self.0;
        (x * x + y * y + z * z).sqrt()
    }

    /// The 3x3 rotation matrix for this vector (Rodrigues formula).
    pub fn to_matrix(self) -> [[f32; 3]; 3] {
        let theta = self.angle();
        if theta < ANGLE_EPSILON {
            return IDENTITY;
        }

        let [kx, ky, kz] = self.0.map(|c| c / theta);
        let (sin, cos) = theta.sin_cos();
        let omc = 1.0 - cos;

        // R = I + sin(theta) K + (1 - cos(theta)) K^2, K the cross-product
        // matrix of the unit axis.
        [
            [
                cos + kx * kx * omc,
                kx * ky * omc - kz * sin,
                kx * kz * omc + ky * sin,
            ],
            [
                ky * kx * omc + kz * sin,
                cos + ky * ky * omc,
                ky * kz * omc - kx * sin,
            ],
            [
                kz * kx * omc - ky * sin,
                kz * ky * omc + kx * sin,
                cos + kz * kz * omc,
            ],
        ]
    }

    /// Recover the rotation vector from a rotation matrix.
    pub fn from_matrix(m: [[f32; 3]; 3]) -> Self {
        let trace = m[0][0] + m[1][1] + m[2][2];
        let cos = ((trace - 1.0) / 2.0).clamp(-1.0, 1.0);
        let theta = cos.acos();

        if theta < ANGLE_EPSILON {
            return Self::default();
        }

        let sin = theta.sin();
        if sin.abs() > ANGLE_EPSILON {
            let scale = theta / (2.0 * sin);
            return Self([
                (m[2][1] - m[1][2]) * scale,
                (m[0][2] - m[2][0]) * scale,
                (m[1][0] - m[0][1]) * scale,
            ]);
        }

        // theta near pi: the skew part vanishes, take the axis from the
        // dominant diagonal entry of (R + I) / 2.
        let xx = ((m[0][0] + 1.0) / 2.0).max(0.0).sqrt();
        let yy = ((m[1][1] + 1.0) / 2.0).max(0.0).sqrt();
        let zz = ((m[2][2] + 1.0) / 2.0).max(0.0).sqrt();
        let axis = if xx >= yy && xx >= zz {
            [xx, m[0][1] / (2.0 * xx), m[0][2] / (2.0 * xx)]
        } else if yy >= zz {
            [m[0][1] / (2.0 * yy), yy, m[1][2] / (2.0 * yy)]
        } else {
            [m[0][2] / (2.0 * zz), m[1][2] / (2.0 * zz), zz]
        };
        Self(axis.map(|c| c * theta))
    }

    /// Linear interpolation of rotation vectors.
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        Self([
            Interpolation::lerp(a.0[0], b.0[0], t),
            Interpolation::lerp(a.0[1], b.0[1], t),
            Interpolation::lerp(a.0[2], b.0[2], t),
        ])
    }
}

const IDENTITY: [[f32; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Interpolate between two poses over `steps` samples, endpoints inclusive.
///
/// `steps` of 0 or 1 yield that many samples (the single sample being the
/// start pose), mirroring an inclusive linspace.
pub fn trajectory_interpolate(a: RotationVector, b: RotationVector, steps: usize) -> Vec<RotationVector> {
    match steps {
        0 => Vec::new(),
        1 => vec![a],
        _ => (0..steps)
            .map(|i| {
                let t = i as f32 / (steps - 1) as f32;
                RotationVector::lerp(a, b, t)
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "{a} != {b}");
    }

    #[test]
    fn test_zero_vector_gives_identity_matrix() {
        let m = RotationVector::default().to_matrix();
        assert_eq!(m, IDENTITY);
    }

    #[test]
    fn test_matrix_round_trip() {
        let v = RotationVector::from_degrees([15.0, -10.0, 5.0]);
        let back = RotationVector::from_matrix(v.to_matrix());
        for i in 0..3 {
            assert_close(back.0[i], v.0[i]);
        }
    }

    #[test]
    fn test_matrix_is_orthonormal() {
        let m = RotationVector::from_degrees([30.0, 45.0, -60.0]).to_matrix();
        for row in m {
            let len = (row[0] * row[0] + row[1] * row[1] + row[2] * row[2]).sqrt();
            assert_close(len, 1.0);
        }
        let dot = m[0][0] * m[1][0] + m[0][1] * m[1][1] + m[0][2] * m[1][2];
        assert_close(dot, 0.0);
    }

    #[test]
    fn test_degrees_round_trip() {
        let angles = RotationVector::from_degrees([15.0, -10.0, 0.0]).to_degrees();
        assert_close(angles[0], 15.0);
        assert_close(angles[1], -10.0);
        assert_close(angles[2], 0.0);
    }

    #[test]
    fn test_trajectory_endpoints_and_count() {
        let a = RotationVector::from_degrees([0.0, 0.0, 0.0]);
        let b = RotationVector::from_degrees([15.0, -10.0, 0.0]);
        let poses = trajectory_interpolate(a, b, 5);

        assert_eq!(poses.len(), 5);
        assert_eq!(poses[0], a);
        let last = poses[4].to_degrees();
        assert_close(last[0], 15.0);
        assert_close(last[1], -10.0);
    }

    #[test]
    fn test_trajectory_degenerate_step_counts() {
        let a = RotationVector::from_degrees([1.0, 2.0, 3.0]);
        let b = RotationVector::from_degrees([4.0, 5.0, 6.0]);
        assert!(trajectory_interpolate(a, b, 0).is_empty());
        assert_eq!(trajectory_interpolate(a, b, 1), vec![a]);
    }
}

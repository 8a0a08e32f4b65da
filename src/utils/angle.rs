use crate::math::{Real, Vector};
use core::f64::consts::{PI, TAU};

/// Converts an angle expressed in degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: Real) -> Real {
    degrees * PI / 180.0
}

/// Converts an angle expressed in radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: Real) -> Real {
    radians * 180.0 / PI
}

/// Reduces an angle to its canonical value inside `[0, 2π)`.
///
/// Every rotation angle stored by the shapes goes through this reduction,
/// so angles read back from two shapes are always directly comparable.
#[inline]
pub fn wrap_angle(radians: Real) -> Real {
    radians.rem_euclid(TAU)
}

/// Computes the angle, in radians, between two vectors.
///
/// The cosine is clamped to `[-1, 1]` before taking the arc-cosine, so
/// near-parallel vectors do not produce `NaN` from rounding. A zero-length
/// operand still yields `NaN`.
#[inline]
pub fn angle_between(v1: &Vector<Real>, v2: &Vector<Real>) -> Real {
    (v1.dot(v2) / (v1.norm() * v2.norm())).clamp(-1.0, 1.0).acos()
}

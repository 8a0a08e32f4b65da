use crate::math::{Real, Vector};

/// Computes the scalar projection `v1 · v2 / |v1|`.
///
/// Returns `NaN` if `v1` has zero length; callers must guard against
/// degenerate operands themselves.
#[inline]
pub fn scalar_projection(v1: &Vector<Real>, v2: &Vector<Real>) -> Real {
    v1.dot(v2) / v1.norm()
}

/// Computes the projection of `v1` onto `v2`, as a vector along `v2`.
///
/// Returns a vector with `NaN` components if `v2` has zero length.
#[inline]
pub fn vector_projection(v1: &Vector<Real>, v2: &Vector<Real>) -> Vector<Real> {
    *v2 * (v1.dot(v2) / v2.norm_squared())
}

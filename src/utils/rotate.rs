use crate::math::{Point, Real, Rotation};

/// Rotates `pt` around `pivot` by `radians`.
///
/// Positive angles rotate counter-clockwise in a Y-up coordinate
/// convention, following the standard `[cos θ, -sin θ; sin θ, cos θ]`
/// rotation matrix. This is the single rotation primitive used by the
/// shapes, so the sense of rotation is uniform across the crate.
#[inline]
pub fn rotate_around(pt: &Point<Real>, pivot: &Point<Real>, radians: Real) -> Point<Real> {
    *pivot + Rotation::new(radians) * (*pt - *pivot)
}

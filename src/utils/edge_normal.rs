use crate::math::{Real, Vector};

/// Computes a vector perpendicular to `v`.
///
/// The result is `(v.y, -v.x)`, the right-hand perpendicular in a Y-up
/// convention. It is not normalized and has the same length as `v`.
#[inline]
pub fn edge_normal(v: &Vector<Real>) -> Vector<Real> {
    Vector::new(v.y, -v.x)
}

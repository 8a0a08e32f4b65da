use crate::math::{Point, Real};

/// Computes the geometric center (centroid) of a set of points.
///
/// The center is the arithmetic mean of the points, with every point
/// weighted equally. It is not the area-weighted centroid, so for shapes
/// with unevenly spaced vertices it is not a physical center of mass; for
/// the uniform convex shapes this crate targets the approximation is
/// acceptable.
///
/// # Panics
///
/// Panics if the input slice is empty.
#[inline]
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    assert!(
        !pts.is_empty(),
        "Cannot compute the center of less than 1 point."
    );

    let denom = 1.0 / (pts.len() as Real);

    let mut piter = pts.iter();
    let mut res = *piter.next().unwrap() * denom;

    for pt in piter {
        res += pt.coords * denom;
    }

    res
}

/// Translates centroid-relative points into world space.
///
/// Each point is offset by the coordinates of `position`, the centroid's
/// world-space location.
#[inline]
pub fn world_points(local: &[Point<Real>], position: &Point<Real>) -> Vec<Point<Real>> {
    local.iter().map(|pt| *pt + position.coords).collect()
}

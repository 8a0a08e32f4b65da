//! The separating axis theorem, with a swept extension.

use crate::math::{Point, Real, Vector};
use crate::query::CollisionResult;
use crate::shape::PolygonShape;
use crate::utils;

/// Tests two convex shapes for current and predicted overlap.
///
/// `velocity_a` is the displacement `shape_a` undergoes during the current
/// simulation step. Along every candidate axis, the projection of
/// `shape_a` is extended by the velocity's component on that axis, which
/// turns the query into a conservative per-axis prediction of whether the
/// shapes overlap after the move. Pass a zero vector (or use
/// [`intersection_test`]) for a purely static test, in which case
/// `will_intersect == intersects`.
///
/// When `will_intersect` is `true`, the returned minimum translation
/// vector pushes `shape_a` out of `shape_b` along the axis of least
/// penetration; adding it to `shape_a`'s position separates the shapes.
///
/// The scan is a single pass over the edges of `shape_a` followed by the
/// edges of `shape_b`, so the cost is `O(edges_a + edges_b)` projections.
/// Ties between equally small overlaps resolve to the first axis scanned,
/// which makes the result deterministic for a fixed edge order.
pub fn check_collision<A, B>(
    shape_a: &A,
    shape_b: &B,
    velocity_a: &Vector<Real>,
) -> CollisionResult
where
    A: PolygonShape + ?Sized,
    B: PolygonShape + ?Sized,
{
    let mut result = CollisionResult {
        intersects: true,
        will_intersect: true,
        min_translation_vector: Vector::zeros(),
    };

    let mut min_interval_distance = Real::INFINITY;
    let mut translation_axis = Vector::zeros();

    for edge in shape_a.edges().iter().chain(shape_b.edges().iter()) {
        let Some(axis) = utils::edge_normal(edge).try_normalize(0.0) else {
            // Zero-length edges are rejected at construction; reaching one
            // here means a shape bypassed validation.
            log::debug!("hit a zero-length edge in the SAT query; skipping its axis");
            continue;
        };

        let (mut min_a, mut max_a) = project_onto_axis(&axis, shape_a.vertices());
        let (min_b, max_b) = project_onto_axis(&axis, shape_b.vertices());

        // A single positive gap proves the shapes are currently separate.
        if interval_distance(min_a, max_a, min_b, max_b) > 0.0 {
            result.intersects = false;
        }

        // Extend the first shape's interval by its motion along the axis.
        let velocity_projection = axis.dot(velocity_a);
        if velocity_projection < 0.0 {
            min_a += velocity_projection;
        } else {
            max_a += velocity_projection;
        }

        let distance = interval_distance(min_a, max_a, min_b, max_b);
        if distance > 0.0 {
            result.will_intersect = false;
        }

        // Remaining axes can only confirm separation, never undo it.
        if !result.intersects && !result.will_intersect {
            break;
        }

        let distance = distance.abs();
        if distance < min_interval_distance {
            min_interval_distance = distance;

            // Orient the axis so it points from the second shape toward
            // the first.
            let delta = shape_a.position() - shape_b.position();
            translation_axis = if delta.dot(&axis) < 0.0 { -axis } else { axis };
        }
    }

    if result.will_intersect {
        result.min_translation_vector = translation_axis * min_interval_distance;
    }

    result
}

/// Tests whether two static shapes currently overlap.
///
/// Equivalent to [`check_collision`] with a zero velocity, keeping only
/// the `intersects` flag.
pub fn intersection_test<A, B>(shape_a: &A, shape_b: &B) -> bool
where
    A: PolygonShape + ?Sized,
    B: PolygonShape + ?Sized,
{
    check_collision(shape_a, shape_b, &Vector::zeros()).intersects
}

/// Projects `vertices` onto `axis` and returns their `[min, max]` interval.
///
/// # Panics
///
/// Panics if `vertices` is empty.
pub fn project_onto_axis(axis: &Vector<Real>, vertices: &[Point<Real>]) -> (Real, Real) {
    let mut min = axis.dot(&vertices[0].coords);
    let mut max = min;

    for pt in &vertices[1..] {
        let d = axis.dot(&pt.coords);

        if d < min {
            min = d;
        } else if d > max {
            max = d;
        }
    }

    (min, max)
}

/// Computes the signed gap between the intervals `[min_a, max_a]` and
/// `[min_b, max_b]`.
///
/// Positive when the intervals are disjoint; negative or zero when they
/// overlap or touch. Its absolute value is the penetration depth used for
/// the minimum translation vector.
#[inline]
pub fn interval_distance(min_a: Real, max_a: Real, min_b: Real, max_b: Real) -> Real {
    if min_a < min_b {
        min_b - max_a
    } else {
        min_a - max_b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_distance_of_overlapping_intervals_is_negative() {
        assert_eq!(interval_distance(1.0, 5.0, 3.0, 8.0), -2.0);
        assert_eq!(interval_distance(3.0, 8.0, 1.0, 5.0), -2.0);
    }

    #[test]
    fn interval_distance_of_disjoint_intervals_is_positive() {
        assert_eq!(interval_distance(1.0, 2.0, 5.0, 8.0), 3.0);
        assert_eq!(interval_distance(5.0, 8.0, 1.0, 2.0), 3.0);
    }

    #[test]
    fn interval_distance_of_touching_intervals_is_zero() {
        assert_eq!(interval_distance(1.0, 5.0, 5.0, 9.0), 0.0);
        assert_eq!(interval_distance(5.0, 9.0, 1.0, 5.0), 0.0);
    }

    #[test]
    fn projection_spans_the_vertex_extremes() {
        let axis = Vector::new(1.0, 0.0);
        let vertices = [
            Point::new(-3.0, 2.0),
            Point::new(7.0, -1.0),
            Point::new(2.0, 4.0),
        ];

        assert_eq!(project_onto_axis(&axis, &vertices), (-3.0, 7.0));
    }

    #[test]
    fn projection_onto_diagonal_axis() {
        let axis = Vector::new(1.0, 1.0).normalize();
        let vertices = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let (min, max) = project_onto_axis(&axis, &vertices);

        assert_eq!(min, 0.0);
        assert!((max - 2.0_f64.sqrt()).abs() < 1.0e-12);
    }
}

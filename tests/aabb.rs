use approx::{assert_abs_diff_eq, assert_relative_eq};
use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, SQRT_2, TAU};
use impact2d::math::Point;
use impact2d::shape::{Aabb, PolygonShape, ShapeError};
use impact2d::utils;

#[test]
fn construction_places_the_corners_around_the_origin() {
    let aabb = Aabb::new(50.0, 50.0, Point::new(100.0, 100.0)).unwrap();

    let expected = [
        Point::new(75.0, 75.0),
        Point::new(125.0, 75.0),
        Point::new(125.0, 125.0),
        Point::new(75.0, 125.0),
    ];

    for (vertex, expected) in aabb.vertices().iter().zip(expected.iter()) {
        assert!(utils::points_eq(vertex, expected));
    }

    assert_eq!(aabb.width(), 50.0);
    assert_eq!(aabb.height(), 50.0);
    assert_eq!(aabb.half_width(), 25.0);
    assert_eq!(aabb.half_height(), 25.0);
    assert_eq!(aabb.angle(), 0.0);
}

#[test]
fn construction_rejects_empty_extents() {
    assert_eq!(
        Aabb::new(0.0, 10.0, Point::origin()),
        Err(ShapeError::EmptyExtents {
            width: 0.0,
            height: 10.0
        })
    );
    assert_eq!(
        Aabb::new(10.0, -1.0, Point::origin()),
        Err(ShapeError::EmptyExtents {
            width: 10.0,
            height: -1.0
        })
    );
}

#[test]
fn set_origin_translates_the_corners() {
    let mut aabb = Aabb::new(4.0, 2.0, Point::origin()).unwrap();

    aabb.set_origin(Point::new(10.0, -5.0));

    assert!(utils::points_eq(&aabb.origin(), &Point::new(10.0, -5.0)));
    assert!(utils::points_eq(&aabb.vertices()[0], &Point::new(8.0, -6.0)));
    assert!(utils::points_eq(&aabb.vertices()[2], &Point::new(12.0, -4.0)));
}

#[test]
fn rotation_yields_a_general_quadrilateral() {
    let mut aabb = Aabb::new(2.0, 2.0, Point::origin()).unwrap();

    aabb.set_angle(FRAC_PI_4);

    // A unit half-extent square rotated by 45° has its corners on the axes.
    let expected = [
        Point::new(0.0, -SQRT_2),
        Point::new(SQRT_2, 0.0),
        Point::new(0.0, SQRT_2),
        Point::new(-SQRT_2, 0.0),
    ];

    for (vertex, expected) in aabb.vertices().iter().zip(expected.iter()) {
        assert_abs_diff_eq!(vertex, expected, epsilon = 1.0e-12);
    }
}

#[test]
fn quarter_turn_cycles_the_corners() {
    let mut aabb = Aabb::new(2.0, 2.0, Point::new(3.0, 3.0)).unwrap();
    let before = aabb.vertices().to_vec();

    aabb.set_angle(FRAC_PI_2);

    // Rotating a square by 90° about its center maps each corner onto the
    // next one.
    for (i, vertex) in aabb.vertices().iter().enumerate() {
        assert_abs_diff_eq!(vertex, &before[(i + 1) % 4], epsilon = 1.0e-12);
    }
}

#[test]
fn rotation_preserves_the_centroid_and_edge_count() {
    let mut aabb = Aabb::new(8.0, 3.0, Point::new(-2.0, 7.0)).unwrap();

    aabb.set_angle(1.9);

    assert_eq!(aabb.edges().len(), 4);
    assert_eq!(aabb.vertices().len(), 4);
    let centroid = utils::center(aabb.vertices());
    assert_relative_eq!(centroid, aabb.position(), epsilon = 1.0e-9);
}

#[test]
fn bounds_of_a_rotated_box_grow_with_the_corners() {
    let mut aabb = Aabb::new(2.0, 2.0, Point::origin()).unwrap();

    let (mins, maxs) = aabb.bounds();
    assert!(utils::points_eq(&mins, &Point::new(-1.0, -1.0)));
    assert!(utils::points_eq(&maxs, &Point::new(1.0, 1.0)));

    aabb.set_angle(FRAC_PI_4);

    let (mins, maxs) = aabb.bounds();
    assert_abs_diff_eq!(mins, Point::new(-SQRT_2, -SQRT_2), epsilon = 1.0e-12);
    assert_abs_diff_eq!(maxs, Point::new(SQRT_2, SQRT_2), epsilon = 1.0e-12);
}

#[test]
fn angle_wraps_past_a_full_turn() {
    let mut aabb = Aabb::new(1.0, 1.0, Point::origin()).unwrap();

    aabb.set_angle(TAU + FRAC_PI_2);
    assert_relative_eq!(aabb.angle(), FRAC_PI_2);

    let before = aabb.vertices().to_vec();
    aabb.set_angle(aabb.angle() + TAU);

    // Adding a full turn reduces to the same canonical angle, leaving the
    // corners bit-for-bit unchanged.
    for (after, before) in aabb.vertices().iter().zip(before.iter()) {
        assert!(utils::points_eq(after, before));
    }
}

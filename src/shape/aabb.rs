//! Axis-aligned rectangle shape, with rotation support.

use crate::math::{Point, Real, Vector};
use crate::shape::{PolygonShape, ShapeError};
use crate::utils;

/// A rectangle centered on its origin.
///
/// The box is built axis-aligned from its width and height, which makes it
/// suitable both as a cheap broad-phase volume and as a simple rectangular
/// body. It supports the same rotation as [`ConvexPolygon`]: once rotated
/// it still has four vertices and four edges, but they are no longer
/// axis-aligned, and the collision query treats it exactly like any other
/// convex quadrilateral.
///
/// The extents are immutable after construction; only the origin and the
/// angle can change.
///
/// [`ConvexPolygon`]: crate::shape::ConvexPolygon
#[derive(Clone, Debug, PartialEq)]
pub struct Aabb {
    origin: Point<Real>,
    width: Real,
    height: Real,
    angle: Real,
    vertices: [Point<Real>; 4],
    edges: [Vector<Real>; 4],
}

impl Aabb {
    /// Creates an axis-aligned box of the given extents, centered on
    /// `origin`.
    ///
    /// Returns an error unless both extents are strictly positive and
    /// finite enough to compare (`NaN` extents are rejected).
    pub fn new(width: Real, height: Real, origin: Point<Real>) -> Result<Self, ShapeError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(ShapeError::EmptyExtents { width, height });
        }

        let vertices = Self::axis_aligned_vertices(&origin, width, height);
        let edges = Self::edges_of(&vertices);

        Ok(Aabb {
            origin,
            width,
            height,
            angle: 0.0,
            vertices,
            edges,
        })
    }

    fn axis_aligned_vertices(
        origin: &Point<Real>,
        width: Real,
        height: Real,
    ) -> [Point<Real>; 4] {
        let hw = width / 2.0;
        let hh = height / 2.0;

        [
            Point::new(origin.x - hw, origin.y - hh),
            Point::new(origin.x + hw, origin.y - hh),
            Point::new(origin.x + hw, origin.y + hh),
            Point::new(origin.x - hw, origin.y + hh),
        ]
    }

    fn edges_of(vertices: &[Point<Real>; 4]) -> [Vector<Real>; 4] {
        [
            vertices[1] - vertices[0],
            vertices[2] - vertices[1],
            vertices[3] - vertices[2],
            vertices[0] - vertices[3],
        ]
    }

    /// The center of this box.
    #[inline]
    pub fn origin(&self) -> Point<Real> {
        self.origin
    }

    /// The width of this box, as given at construction.
    #[inline]
    pub fn width(&self) -> Real {
        self.width
    }

    /// The height of this box, as given at construction.
    #[inline]
    pub fn height(&self) -> Real {
        self.height
    }

    /// Half the width of this box.
    #[inline]
    pub fn half_width(&self) -> Real {
        self.width / 2.0
    }

    /// Half the height of this box.
    #[inline]
    pub fn half_height(&self) -> Real {
        self.height / 2.0
    }

    /// The cumulative rotation of this box, always inside `[0, 2π)`.
    #[inline]
    pub fn angle(&self) -> Real {
        self.angle
    }

    /// The world-space vertices of this box, in winding order.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The edge vectors of this box, wrapping around at the end.
    #[inline]
    pub fn edges(&self) -> &[Vector<Real>] {
        &self.edges
    }

    /// Moves the box so that its center lands on `origin`.
    pub fn set_origin(&mut self, origin: Point<Real>) {
        let delta = origin - self.origin;

        for pt in &mut self.vertices {
            *pt += delta;
        }

        self.origin = origin;
    }

    /// Rotates the box about its center so that its cumulative rotation
    /// equals `angle`.
    ///
    /// Same canonical-angle policy as [`ConvexPolygon::set_angle`]: the
    /// target is reduced to `[0, 2π)` and the vertices rotate by the delta
    /// between the reduced target and the current angle.
    ///
    /// [`ConvexPolygon::set_angle`]: crate::shape::ConvexPolygon::set_angle
    pub fn set_angle(&mut self, angle: Real) {
        let target = utils::wrap_angle(angle);
        let delta = target - self.angle;

        if delta != 0.0 {
            for pt in &mut self.vertices {
                *pt = utils::rotate_around(pt, &self.origin, delta);
            }
            self.edges = Self::edges_of(&self.vertices);
        }

        self.angle = target;
    }
}

impl PolygonShape for Aabb {
    #[inline]
    fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    #[inline]
    fn edges(&self) -> &[Vector<Real>] {
        &self.edges
    }

    #[inline]
    fn position(&self) -> Point<Real> {
        // The origin is the centroid of the four corners, rotated or not.
        self.origin
    }
}

use crate::math::{Point, Real, Vector};
use crate::shape::{PolygonShape, ShapeError};
use crate::utils;
use core::fmt;

/// A rigid 2D convex polygon.
///
/// The polygon owns its world-space vertices together with the derived edge
/// vectors, its centroid, and its cumulative rotation angle. The centroid
/// always equals the arithmetic mean of the vertices and is the pivot used
/// by [`ConvexPolygon::set_angle`].
///
/// Convexity of the input is not checked; feeding a concave vertex list
/// produces a shape the collision query will treat as if it were its convex
/// hull on some axes, with no error reported.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    vertices: Vec<Point<Real>>,
    edges: Vec<Vector<Real>>,
    position: Point<Real>,
    angle: Real,
}

impl ConvexPolygon {
    /// Creates a polygon from world-space vertices, recentered so that its
    /// centroid lands on `position`.
    ///
    /// The vertices keep their relative arrangement and winding order; the
    /// whole set is translated by `position - center(vertices)`.
    ///
    /// Returns an error if fewer than three vertices are given or if two
    /// consecutive vertices coincide.
    pub fn new(vertices: Vec<Point<Real>>, position: Point<Real>) -> Result<Self, ShapeError> {
        Self::validate(&vertices)?;

        let offset = position - utils::center(&vertices);
        let vertices = vertices.into_iter().map(|pt| pt + offset).collect();

        Ok(Self::assemble(vertices, position))
    }

    /// Creates a polygon from vertices expressed relative to the centroid,
    /// placed at the world-space `position`.
    ///
    /// If the local vertices do not average to the origin, the stored
    /// position is the actual centroid of the translated vertices rather
    /// than the requested `position`, keeping the centroid invariant intact.
    pub fn from_local_vertices(
        local: &[Point<Real>],
        position: Point<Real>,
    ) -> Result<Self, ShapeError> {
        Self::validate(local)?;

        let vertices = utils::world_points(local, &position);
        let position = utils::center(&vertices);

        Ok(Self::assemble(vertices, position))
    }

    fn validate(vertices: &[Point<Real>]) -> Result<(), ShapeError> {
        if vertices.len() < 3 {
            return Err(ShapeError::NotEnoughVertices(vertices.len()));
        }

        for i in 0..vertices.len() {
            let j = (i + 1) % vertices.len();
            if utils::points_eq(&vertices[i], &vertices[j]) {
                return Err(ShapeError::DegenerateEdge(i, j));
            }
        }

        Ok(())
    }

    fn assemble(vertices: Vec<Point<Real>>, position: Point<Real>) -> Self {
        let mut result = ConvexPolygon {
            vertices,
            edges: Vec::new(),
            position,
            angle: 0.0,
        };
        result.rebuild_edges();
        result
    }

    fn rebuild_edges(&mut self) {
        self.edges.clear();

        let n = self.vertices.len();
        for i in 0..n {
            self.edges.push(self.vertices[(i + 1) % n] - self.vertices[i]);
        }
    }

    /// The world-space vertices of this polygon, in winding order.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The edge vectors of this polygon; `edges()[i]` joins `vertices()[i]`
    /// to the next vertex, wrapping around at the end.
    #[inline]
    pub fn edges(&self) -> &[Vector<Real>] {
        &self.edges
    }

    /// The centroid of this polygon.
    #[inline]
    pub fn position(&self) -> Point<Real> {
        self.position
    }

    /// The cumulative rotation of this polygon, always inside `[0, 2π)`.
    #[inline]
    pub fn angle(&self) -> Real {
        self.angle
    }

    /// Moves the polygon so that its centroid lands on `position`.
    ///
    /// Every vertex is translated by the same delta; the edges are
    /// translation-invariant and left untouched.
    pub fn set_position(&mut self, position: Point<Real>) {
        let delta = position - self.position;

        for pt in &mut self.vertices {
            *pt += delta;
        }

        self.position = position;
    }

    /// Rotates the polygon about its centroid so that its cumulative
    /// rotation equals `angle`.
    ///
    /// The target is first reduced to `[0, 2π)` with
    /// [`utils::wrap_angle`]; the vertices are then rotated by the
    /// difference between the reduced target and the current angle. Setting
    /// an angle equivalent to the current one (modulo 2π) leaves the
    /// vertices bit-for-bit unchanged.
    pub fn set_angle(&mut self, angle: Real) {
        let target = utils::wrap_angle(angle);
        let delta = target - self.angle;

        if delta != 0.0 {
            for pt in &mut self.vertices {
                *pt = utils::rotate_around(pt, &self.position, delta);
            }
            self.rebuild_edges();
        }

        self.angle = target;
    }
}

impl PolygonShape for ConvexPolygon {
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
        self.position
    }
}

impl fmt::Display for ConvexPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pt) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "({}, {})", pt.x, pt.y)?;
        }
        Ok(())
    }
}

//! Trait for shapes the SAT collision query can operate on.

use crate::math::{Point, Real, Vector};

/// Capabilities required from a shape by the SAT collision query.
///
/// The query is deliberately oblivious to concrete shape types: anything
/// exposing world-space vertices, the matching edge vectors, and a position
/// can be tested against anything else. Both [`ConvexPolygon`] and
/// [`Aabb`] implement this trait.
///
/// [`ConvexPolygon`]: crate::shape::ConvexPolygon
/// [`Aabb`]: crate::shape::Aabb
pub trait PolygonShape {
    /// The world-space vertices of this shape, in winding order.
    ///
    /// Implementors guarantee at least three vertices.
    fn vertices(&self) -> &[Point<Real>];

    /// The edge vectors of this shape: `edges()[i]` joins `vertices()[i]`
    /// to the next vertex, wrapping around at the end. Always as many
    /// edges as vertices.
    fn edges(&self) -> &[Vector<Real>];

    /// The position (arithmetic-mean centroid) of this shape.
    fn position(&self) -> Point<Real>;

    /// The `(mins, maxs)` corners of the smallest axis-aligned rectangle
    /// enclosing this shape, suitable for broad-phase culling.
    fn bounds(&self) -> (Point<Real>, Point<Real>) {
        let vertices = self.vertices();
        let mut mins = vertices[0];
        let mut maxs = vertices[0];

        for pt in &vertices[1..] {
            mins = mins.inf(pt);
            maxs = maxs.sup(pt);
        }

        (mins, maxs)
    }
}

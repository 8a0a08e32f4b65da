use crate::math::Real;

/// Indicates invalid input while constructing a shape.
///
/// Construction is the only place where degenerate geometry is rejected;
/// the collision query itself assumes every live shape is valid and
/// performs no validation of its own.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// A convex polygon needs at least three vertices.
    #[error("a convex polygon needs at least 3 vertices, got {0}.")]
    NotEnoughVertices(usize),
    /// Two consecutive vertices coincide, producing a zero-length edge.
    #[error("the vertices {0} and {1} coincide, producing a zero-length edge.")]
    DegenerateEdge(usize, usize),
    /// A rectangle needs strictly positive extents.
    #[error("a rectangle needs strictly positive extents, got {width} x {height}.")]
    EmptyExtents {
        /// The rejected width.
        width: Real,
        /// The rejected height.
        height: Real,
    },
}

use crate::math::{Real, Vector};

/// The outcome of a SAT collision query between two shapes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CollisionResult {
    /// `true` when the two shapes currently overlap.
    pub intersects: bool,
    /// `true` when the shapes overlap once the first shape's velocity is
    /// applied. Equals `intersects` for a zero velocity.
    pub will_intersect: bool,
    /// The smallest vector that, added to the first shape's position,
    /// separates the two shapes along the axis of least penetration.
    ///
    /// Zero unless `will_intersect` is `true`.
    pub min_translation_vector: Vector<Real>,
}

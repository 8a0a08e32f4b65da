use crate::math::{Point, Real};

/// Exact component-wise point equality.
///
/// Shape validation and parts of the test-suite rely on exact floating
/// point comparison. Every call site needing that contract goes through
/// this function, so a tolerance-based comparison can later be substituted
/// in a single place.
#[inline]
pub fn points_eq(lhs: &Point<Real>, rhs: &Point<Real>) -> bool {
    lhs == rhs
}

/*!
impact2d
========

**impact2d** is a 2-dimensional narrow-phase collision detection library
for convex polygons, written with the rust programming language.

It implements the separating axis theorem (SAT), including a swept variant
that predicts whether two shapes will overlap once the first shape's
per-step velocity is applied, and reports the minimum translation vector
separating two overlapping shapes.

```
use impact2d::math::{Point, Vector};
use impact2d::query;
use impact2d::shape::Aabb;

let a = Aabb::new(50.0, 50.0, Point::new(100.0, 100.0)).unwrap();
let b = Aabb::new(50.0, 50.0, Point::new(125.0, 100.0)).unwrap();

let result = query::check_collision(&a, &b, &Vector::zeros());
assert!(result.intersects);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    pub use f64 as Real;
}

/// Aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point2, Rotation2, Vector2};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The rotation matrix type.
    pub type Rotation = Rotation2<Real>;
}

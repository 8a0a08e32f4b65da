//! Shapes supported by impact2d.

pub use self::aabb::Aabb;
pub use self::convex_polygon::ConvexPolygon;
pub use self::error::ShapeError;
pub use self::polygon_shape::PolygonShape;

mod aabb;
mod convex_polygon;
mod error;
mod polygon_shape;

//! Geometrical operators shared by the shapes and the collision query.

pub use self::angle::{angle_between, degrees_to_radians, radians_to_degrees, wrap_angle};
pub use self::center::{center, world_points};
pub use self::edge_normal::edge_normal;
pub use self::eq::points_eq;
pub use self::projection::{scalar_projection, vector_projection};
pub use self::rotate::rotate_around;

mod angle;
mod center;
mod edge_normal;
mod eq;
mod projection;
mod rotate;

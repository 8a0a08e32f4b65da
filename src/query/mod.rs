//! Non-persistent collision queries between convex shapes.
//!
//! The two entry points provided by this module are:
//!
//! * [`query::check_collision()`] to compute current overlap, predicted
//!   overlap under a velocity, and the minimum translation vector.
//! * [`query::intersection_test()`] to determine if two static shapes are
//!   intersecting or not.
//!
//! The reusable pieces of the separating axis theorem (axis projection and
//! interval arithmetic) live in the [`sat`] submodule.
//!
//! [`query::check_collision()`]: check_collision
//! [`query::intersection_test()`]: intersection_test

pub use self::collision_result::CollisionResult;
pub use self::sat::{check_collision, intersection_test};

mod collision_result;
pub mod sat;

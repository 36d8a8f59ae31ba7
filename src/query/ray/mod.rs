//! Ray-casting related definitions and implementations.

pub use self::ray::{Ray, RayCast, RayIntersection};
pub use self::ray_ball::{ray_toi_and_normal_with_ball, ray_toi_with_ball};

mod ray;
mod ray_ball;
mod ray_capsule;
mod ray_convex_polyhedron;
mod ray_convex_shape;
mod ray_cuboid;

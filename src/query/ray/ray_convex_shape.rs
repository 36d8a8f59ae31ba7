use crate::math::Real;
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::ConvexShape;

impl RayCast for ConvexShape {
    fn cast_local_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_toi: Real,
        solid: bool,
    ) -> Option<RayIntersection> {
        match self {
            ConvexShape::Ball(s) => s.cast_local_ray_and_get_normal(ray, max_toi, solid),
            ConvexShape::Cuboid(s) => s.cast_local_ray_and_get_normal(ray, max_toi, solid),
            ConvexShape::Capsule(s) => s.cast_local_ray_and_get_normal(ray, max_toi, solid),
            ConvexShape::ConvexPolyhedron(s) => {
                s.cast_local_ray_and_get_normal(ray, max_toi, solid)
            }
        }
    }
}

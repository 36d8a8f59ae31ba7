use super::ray::{select_convex_hit, static_ray_hit};
use crate::math::{Point, Real, Vector};
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::{Ball, FeatureId};

impl RayCast for Ball {
    #[inline]
    fn cast_local_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_toi: Real,
        solid: bool,
    ) -> Option<RayIntersection> {
        ray_toi_and_normal_with_ball(&Point::origin(), self.total_radius(), ray, max_toi, solid)
    }
}

/// Computes the parameters at which the line supporting `ray` enters and leaves
/// the ball with the given `center` and `radius`.
///
/// Returns `None` if the line misses the ball or if the ray direction is zero.
#[inline]
pub fn ray_toi_with_ball(center: &Point<Real>, radius: Real, ray: &Ray) -> Option<[Real; 2]> {
    let dcenter = ray.origin - *center;

    let a = ray.dir.norm_squared();
    let b = dcenter.dot(&ray.dir);
    let c = dcenter.norm_squared() - radius * radius;

    if a == 0.0 {
        return None;
    }

    let delta = b * b - a * c;

    if delta < 0.0 {
        // no solution
        None
    } else {
        let sqrt_delta = delta.sqrt();
        Some([(-b - sqrt_delta) / a, (-b + sqrt_delta) / a])
    }
}

/// Casts a ray on the ball with the given `center` and `radius`.
pub fn ray_toi_and_normal_with_ball(
    center: &Point<Real>,
    radius: Real,
    ray: &Ray,
    max_toi: Real,
    solid: bool,
) -> Option<RayIntersection> {
    if ray.dir == Vector::zeros() {
        let inside = na::distance_squared(center, &ray.origin) <= radius * radius;
        return static_ray_hit(inside, solid);
    }

    let [enter, exit] = ray_toi_with_ball(center, radius, ray)?;
    let normal_at = |t: Real| {
        (ray.point_at(t) - center)
            .try_normalize(0.0)
            .unwrap_or_else(|| -ray.dir.normalize())
    };

    select_convex_hit(
        (enter, normal_at(enter), FeatureId::Face(0)),
        (exit, normal_at(exit), FeatureId::Face(0)),
        max_toi,
        solid,
    )
}

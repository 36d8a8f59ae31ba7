use super::ray::{select_convex_hit, static_ray_hit};
use super::ray_ball::ray_toi_with_ball;
use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::{Capsule, FeatureId};
use arrayvec::ArrayVec;

/// A point where the line of a ray crosses the capsule surface, with the outward normal
/// and the feature there.
type SurfaceCrossing = (Real, Vector<Real>, FeatureId);

impl RayCast for Capsule {
    fn cast_local_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_toi: Real,
        solid: bool,
    ) -> Option<RayIntersection> {
        let radius = self.total_radius();

        if ray.dir == Vector::zeros() {
            let inside = distance_to_segment(self, &ray.origin) <= radius;
            return static_ray_hit(inside, solid);
        }

        let crossings = capsule_surface_crossings(self, radius, ray);
        let enter = crossings
            .iter()
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .copied()?;
        let exit = crossings
            .iter()
            .max_by(|a, b| a.0.total_cmp(&b.0))
            .copied()?;

        select_convex_hit(enter, exit, max_toi, solid)
    }
}

fn distance_to_segment(capsule: &Capsule, pt: &Point<Real>) -> Real {
    let segment = capsule.segment();
    let ab = segment.scaled_direction();
    let sqlen = ab.norm_squared();
    let t = if sqlen > DEFAULT_EPSILON {
        na::clamp((pt - segment.a).dot(&ab) / sqlen, 0.0, 1.0)
    } else {
        0.0
    };
    na::distance(&(segment.a + ab * t), pt)
}

/// Intersects the line of `ray` with the cylindrical body and the two spherical caps.
///
/// Since the capsule is convex, the smallest and largest crossings are where the
/// line enters and leaves it.
fn capsule_surface_crossings(
    capsule: &Capsule,
    radius: Real,
    ray: &Ray,
) -> ArrayVec<SurfaceCrossing, 6> {
    let mut result = ArrayVec::new();
    let segment = capsule.segment();
    let axis = segment.scaled_direction();
    let dd = axis.norm_squared();

    if dd > DEFAULT_EPSILON {
        let m = ray.origin - segment.a;
        let md = m.dot(&axis);
        let nd = ray.dir.dot(&axis);
        let a = dd * ray.dir.norm_squared() - nd * nd;
        let b = dd * m.dot(&ray.dir) - nd * md;
        let c = dd * (m.norm_squared() - radius * radius) - md * md;
        let delta = b * b - a * c;

        // The cylinder is skipped for rays parallel to the axis: the caps catch them.
        if a > DEFAULT_EPSILON * dd && delta >= 0.0 {
            let sqrt_delta = delta.sqrt();

            for t in [(-b - sqrt_delta) / a, (-b + sqrt_delta) / a] {
                let s = (md + t * nd) / dd;

                if (0.0..=1.0).contains(&s) {
                    let on_axis = segment.a + axis * s;
                    let normal = (ray.point_at(t) - on_axis) / radius;
                    result.push((t, normal, FeatureId::Edge(0)));
                }
            }
        }
    }

    for (vid, center, side) in [(0, segment.a, -1.0), (1, segment.b, 1.0)] {
        if let Some(roots) = ray_toi_with_ball(&center, radius, ray) {
            for t in roots {
                let offset = ray.point_at(t) - center;

                if dd <= DEFAULT_EPSILON || offset.dot(&axis) * side >= 0.0 {
                    let normal = offset.try_normalize(0.0).unwrap_or_else(|| -ray.dir.normalize());
                    result.push((t, normal, FeatureId::Vertex(vid)));
                }
            }
        }
    }

    result
}

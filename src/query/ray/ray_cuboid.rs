use super::ray::{select_convex_hit, static_ray_hit};
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DIM};
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::{Cuboid, FeatureId};

/// A slab boundary crossed by a ray: its parameter, axis, and the sign of its outward normal.
#[derive(Copy, Clone, Debug)]
struct SlabHit {
    toi: Real,
    axis: usize,
    sign: Real,
}

impl SlabHit {
    fn normal(&self) -> Vector<Real> {
        Vector::ith(self.axis, self.sign)
    }
}

/// Clips the line supporting `ray` against the slabs of the box `[mins, maxs]`.
///
/// Returns the entry and exit boundaries, `None` if the line misses the box.
fn clip_line_with_slabs(mins: &Point<Real>, maxs: &Point<Real>, ray: &Ray) -> Option<[SlabHit; 2]> {
    let mut near: Option<SlabHit> = None;
    let mut far: Option<SlabHit> = None;

    for i in 0usize..DIM {
        if ray.dir[i] == 0.0 {
            if ray.origin[i] < mins[i] || ray.origin[i] > maxs[i] {
                return None;
            }
            continue;
        }

        let denom = 1.0 / ray.dir[i];
        let mut t_min_side = SlabHit {
            toi: (mins[i] - ray.origin[i]) * denom,
            axis: i,
            sign: -1.0,
        };
        let mut t_max_side = SlabHit {
            toi: (maxs[i] - ray.origin[i]) * denom,
            axis: i,
            sign: 1.0,
        };

        if t_min_side.toi > t_max_side.toi {
            core::mem::swap(&mut t_min_side, &mut t_max_side);
        }

        if near.map(|n| t_min_side.toi > n.toi).unwrap_or(true) {
            near = Some(t_min_side);
        }

        if far.map(|f| t_max_side.toi < f.toi).unwrap_or(true) {
            far = Some(t_max_side);
        }

        if let (Some(n), Some(f)) = (near, far) {
            if n.toi > f.toi {
                return None;
            }
        }
    }

    Some([near?, far?])
}

fn cast_ray_on_box(
    mins: &Point<Real>,
    maxs: &Point<Real>,
    ray: &Ray,
    max_toi: Real,
    solid: bool,
    feature: impl Fn(&SlabHit) -> FeatureId,
) -> Option<RayIntersection> {
    if ray.dir == Vector::zeros() {
        let inside = (0..DIM).all(|i| ray.origin[i] >= mins[i] && ray.origin[i] <= maxs[i]);
        return static_ray_hit(inside, solid);
    }

    let [near, far] = clip_line_with_slabs(mins, maxs, ray)?;
    select_convex_hit(
        (near.toi, near.normal(), feature(&near)),
        (far.toi, far.normal(), feature(&far)),
        max_toi,
        solid,
    )
}

impl RayCast for Aabb {
    fn cast_local_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_toi: Real,
        solid: bool,
    ) -> Option<RayIntersection> {
        cast_ray_on_box(&self.mins, &self.maxs, ray, max_toi, solid, |hit| {
            let offset = if hit.sign < 0.0 { DIM } else { 0 };
            FeatureId::Face((hit.axis + offset) as u32)
        })
    }
}

impl RayCast for Cuboid {
    fn cast_local_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_toi: Real,
        solid: bool,
    ) -> Option<RayIntersection> {
        let extent = self.extent();
        let mins = Point::from(-extent);
        let maxs = Point::from(extent);

        cast_ray_on_box(&mins, &maxs, ray, max_toi, solid, |hit| {
            FeatureId::Face(Cuboid::face_toward_axis(hit.axis, hit.sign))
        })
    }
}

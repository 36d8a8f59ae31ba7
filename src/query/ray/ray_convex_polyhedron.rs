use super::ray::{select_convex_hit, static_ray_hit};
use crate::math::{Real, Vector};
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::{ConvexPolyhedron, FeatureId, PolyhedralShape};

impl RayCast for ConvexPolyhedron {
    fn cast_local_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_toi: Real,
        solid: bool,
    ) -> Option<RayIntersection> {
        cast_ray_on_face_planes(self, ray, max_toi, solid)
    }
}

/// Cyrus-Beck clipping of a ray against the face planes of a polyhedron, each
/// plane being pushed outward by the shape margin.
pub(crate) fn cast_ray_on_face_planes(
    shape: &dyn PolyhedralShape,
    ray: &Ray,
    max_toi: Real,
    solid: bool,
) -> Option<RayIntersection> {
    let margin = shape.margin();
    let mut enter = (-Real::MAX, Vector::zeros(), FeatureId::Unknown);
    let mut exit = (Real::MAX, Vector::zeros(), FeatureId::Unknown);
    let mut origin_inside = true;

    for (fid, face) in shape.topology().faces().iter().enumerate() {
        let normal = face.normal.into_inner();
        let offset = normal.dot(&shape.core_vertex(face.vertices[0]).coords) + margin;
        // Positive if the ray origin is behind the plane.
        let num = offset - normal.dot(&ray.origin.coords);
        let denom = normal.dot(&ray.dir);
        origin_inside = origin_inside && num >= 0.0;

        if denom == 0.0 {
            if num < 0.0 {
                return None;
            }
            continue;
        }

        let t = num / denom;

        if denom < 0.0 {
            if t > enter.0 {
                enter = (t, normal, FeatureId::Face(fid as u32));
            }
        } else if t < exit.0 {
            exit = (t, normal, FeatureId::Face(fid as u32));
        }

        if enter.0 > exit.0 {
            return None;
        }
    }

    if ray.dir == Vector::zeros() {
        return static_ray_hit(origin_inside, solid);
    }

    select_convex_hit(enter, exit, max_toi, solid)
}

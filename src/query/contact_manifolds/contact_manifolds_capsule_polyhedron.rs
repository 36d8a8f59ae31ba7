use crate::math::{Isometry, Point, Real, UnitVector, DEFAULT_EPSILON};
use crate::query::closest_points::closest_points_segment_segment_with_locations;
use crate::query::contact_manifolds::contact_manifolds_ball_capsule::capsule_feature;
use crate::query::sat::{self, EdgeSeparation};
use crate::query::{ContactManifoldInfo, NarrowPhaseConfig};
use crate::shape::{Capsule, FeatureId, PolyhedralShape, Segment};
use na::Unit;

/// Computes the contact manifold between a capsule and a polyhedron.
///
/// The capsule segment is tested against the face normals of the polyhedron and the
/// cross products of its edges with the segment. A face axis gives up to two contact
/// points: the segment clipped by the side planes of that face. An edge axis gives one
/// contact point between the closest points of both edges.
pub fn contact_manifold_capsule_polyhedron(
    pos12: &Isometry<Real>,
    capsule1: &Capsule,
    poly2: &dyn PolyhedralShape,
    config: &NarrowPhaseConfig,
    manifold: &mut ContactManifoldInfo,
) {
    manifold.clear();

    // Everything is computed in the local-space of the polyhedron.
    let pos21 = pos12.inverse();
    let segment = capsule1.segment().transformed(&pos21);
    let capsule_radius = capsule1.total_radius();
    let sum_radius = capsule_radius + poly2.margin();

    let (face_sep, face) = sat::polyhedron_support_map_find_local_separating_face(
        poly2,
        &segment,
        &Isometry::identity(),
    );
    if face_sep >= sum_radius {
        return;
    }

    let edge_sep = sat::polyhedron_segment_find_local_separating_edge_twoway(
        poly2,
        &segment,
        config.degenerate_axis_epsilon,
    );
    if edge_sep.is_some_and(|e| e.separation >= sum_radius) {
        return;
    }

    let mut contacts = CapsuleContacts {
        pos12,
        capsule_radius,
        poly_margin: poly2.margin(),
        manifold,
    };

    match edge_sep {
        Some(edge) if config.prefers_axis(edge.separation, face_sep) => {
            contacts.edge_contact(&segment, &edge)
        }
        _ => {
            if !contacts.face_contacts(poly2, face, &segment) {
                log::debug!("capsule outside of the reference face prism, using its boundary");
                contacts.face_boundary_contact(poly2, face, &segment);
            }
        }
    }
}

struct CapsuleContacts<'a> {
    pos12: &'a Isometry<Real>,
    capsule_radius: Real,
    poly_margin: Real,
    manifold: &'a mut ContactManifoldInfo,
}

impl CapsuleContacts<'_> {
    fn sum_radius(&self) -> Real {
        self.capsule_radius + self.poly_margin
    }

    /// Adds a contact from points on the core of both shapes, expressed in the local-space
    /// of the polyhedron. `normal` points from the polyhedron toward the capsule and `dist`
    /// is the core distance along it.
    fn push(
        &mut self,
        capsule_pt: &Point<Real>,
        poly_pt: &Point<Real>,
        normal: &UnitVector<Real>,
        dist: Real,
        fid1: FeatureId,
        fid2: FeatureId,
    ) {
        if self.manifold.is_empty() {
            let local_n1 = Unit::new_unchecked(self.pos12 * -**normal);
            self.manifold.set_local_normal1(&local_n1);
        }

        self.manifold.push(
            self.pos12 * (capsule_pt - **normal * self.capsule_radius),
            self.pos12 * (poly_pt + **normal * self.poly_margin),
            fid1,
            fid2,
            self.sum_radius() - dist,
        );
    }

    fn edge_contact(&mut self, segment: &Segment, edge: &EdgeSeparation) {
        let (loc_poly, loc_capsule) =
            closest_points_segment_segment_with_locations(&edge.segment1, segment);
        let poly_pt = edge.segment1.point_at(&loc_poly);
        let capsule_pt = segment.point_at(&loc_capsule);

        // Use the actual distance when the cores are apart, the axis otherwise.
        let (normal, dist) = match Unit::try_new_and_get(capsule_pt - poly_pt, DEFAULT_EPSILON) {
            Some((normal, dist)) if edge.separation > 0.0 => (normal, dist),
            _ => (edge.axis, edge.separation),
        };

        if dist < self.sum_radius() {
            self.push(
                &capsule_pt,
                &poly_pt,
                &normal,
                dist,
                capsule_feature(&loc_capsule),
                FeatureId::Edge(edge.edge1),
            );
        }
    }

    /// Clips the segment with the side planes of the face. Returns `false` if nothing
    /// remains of the segment.
    fn face_contacts(&mut self, poly: &dyn PolyhedralShape, face: u32, segment: &Segment) -> bool {
        let topology = poly.topology();
        let normal = poly.face_normal(face);
        let origin = poly.core_vertex(topology.face(face).vertices[0]);
        let dir = segment.scaled_direction();
        let mut range = [0.0 as Real, 1.0];

        for e in topology.face_half_edges(face) {
            let a = poly.core_vertex(topology.origin(e));
            let b = poly.core_vertex(topology.destination(e));
            let side = (b - a).cross(&normal);

            if side.norm_squared() <= DEFAULT_EPSILON {
                continue;
            }

            // The segment point at `t` is inside the side plane if `d0 + t * dd <= 0`.
            let d0 = side.dot(&(segment.a - a));
            let dd = side.dot(&dir);

            if dd.abs() <= DEFAULT_EPSILON {
                if d0 > 0.0 {
                    return false;
                }
            } else {
                let t = -d0 / dd;
                if dd > 0.0 {
                    range[1] = range[1].min(t);
                } else {
                    range[0] = range[0].max(t);
                }
            }
        }

        if range[0] > range[1] {
            return false;
        }

        let num_points = if range[1] - range[0] <= DEFAULT_EPSILON { 1 } else { 2 };

        for t in range.iter().take(num_points) {
            let capsule_pt = segment.a + dir * *t;
            let dist = normal.dot(&(capsule_pt - origin));

            if dist < self.sum_radius() {
                let fid1 = if *t <= 0.0 {
                    FeatureId::Vertex(0)
                } else if *t >= 1.0 {
                    FeatureId::Vertex(1)
                } else {
                    FeatureId::Edge(0)
                };
                let poly_pt = capsule_pt - *normal * dist;
                self.push(&capsule_pt, &poly_pt, &normal, dist, fid1, FeatureId::Face(face));
            }
        }

        true
    }

    fn face_boundary_contact(&mut self, poly: &dyn PolyhedralShape, face: u32, segment: &Segment) {
        let topology = poly.topology();
        let mut best = None;
        let mut best_dist = Real::MAX;

        for e in topology.face_half_edges(face) {
            let edge = sat::polyhedron_edge_segment(poly, e);
            let (loc_poly, loc_capsule) =
                closest_points_segment_segment_with_locations(&edge, segment);
            let poly_pt = edge.point_at(&loc_poly);
            let capsule_pt = segment.point_at(&loc_capsule);
            let dist = na::distance(&poly_pt, &capsule_pt);

            if dist < best_dist {
                best_dist = dist;
                best = Some((poly_pt, capsule_pt, loc_capsule, e));
            }
        }

        if let Some((poly_pt, capsule_pt, loc_capsule, e)) = best {
            let normal = Unit::try_new(capsule_pt - poly_pt, DEFAULT_EPSILON)
                .unwrap_or_else(|| poly.face_normal(face));

            if best_dist < self.sum_radius() {
                self.push(
                    &capsule_pt,
                    &poly_pt,
                    &normal,
                    best_dist,
                    capsule_feature(&loc_capsule),
                    FeatureId::Edge(e),
                );
            }
        }
    }
}

use crate::math::{Isometry, Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::query::clip::{clip_halfspace_polygon, ClippedPolygon};
use crate::query::closest_points::closest_points_segment_segment_with_locations;
use crate::query::sat::{self, EdgeSeparation};
use crate::query::{ContactManifoldInfo, NarrowPhaseConfig};
use crate::shape::{FeatureId, PolyhedralShape};
use na::Unit;
use smallvec::SmallVec;

/// Face separations closer than this are considered equal.
const FACE_TIE_TOLERANCE: Real = 1.0e-5;

/// A contact point found by clipping, expressed in the local-space of the reference shape.
struct ClippedContact {
    point_ref: Point<Real>,
    point_inc: Point<Real>,
    fid_ref: FeatureId,
    fid_inc: FeatureId,
    depth: Real,
}

/// Computes the contact manifold between two polyhedra.
///
/// This runs a separating axis test over the face normals of both shapes and the cross
/// products of their edges. If no axis separates the shapes, the axis with the smallest
/// penetration decides how contacts are generated:
/// - a face normal: the closest face of the other shape is clipped against the side
///   planes of the reference face,
/// - an edge-edge axis: a single contact is generated between the closest points of
///   both edges.
///
/// The reference face is the face axis of smallest penetration, whichever shape it
/// belongs to. Near ties go to the larger face.
///
/// Shapes exactly touching (zero separation) are reported with a zero penetration depth.
pub fn contact_manifold_polyhedron_polyhedron(
    pos12: &Isometry<Real>,
    poly1: &dyn PolyhedralShape,
    poly2: &dyn PolyhedralShape,
    config: &NarrowPhaseConfig,
    manifold: &mut ContactManifoldInfo,
) {
    manifold.clear();

    let pos21 = pos12.inverse();
    let margins = poly1.margin() + poly2.margin();

    /*
     * Face normals.
     */
    let (sep1, face1) = sat::polyhedron_support_map_find_local_separating_face(poly1, poly2, pos12);
    let sep1 = sep1 - margins;
    if sep1 > 0.0 {
        return;
    }

    let (sep2, face2) =
        sat::polyhedron_support_map_find_local_separating_face(poly2, poly1, &pos21);
    let sep2 = sep2 - margins;
    if sep2 > 0.0 {
        return;
    }

    /*
     * Edge-edge cases.
     */
    let edge = sat::polyhedron_polyhedron_find_local_separating_edge_twoway(
        poly1,
        poly2,
        pos12,
        config.degenerate_axis_epsilon,
    )
    .map(|e| EdgeSeparation {
        separation: e.separation - margins,
        ..e
    });

    if edge.is_some_and(|e| e.separation > 0.0) {
        return;
    }

    /*
     * Select the best axis and generate the contacts.
     */
    let use_face2 = if (sep2 - sep1).abs() <= FACE_TIE_TOLERANCE {
        face_area(poly2, face2) > face_area(poly1, face1)
    } else {
        sep2 > sep1
    };
    let face_sep = if use_face2 { sep2 } else { sep1 };

    if let Some(edge) = edge {
        if config.prefers_axis(edge.separation, face_sep) {
            edge_edge_contact(poly1, poly2, &edge, manifold);
            return;
        }
    }

    let clipped = if use_face2 {
        clip_incident_face(poly2, face2, poly1, &pos21, config)
    } else {
        clip_incident_face(poly1, face1, poly2, pos12, config)
    };

    match clipped {
        Some(contacts) if !contacts.is_empty() => {
            if use_face2 {
                let local_n1 = Unit::new_unchecked(pos12 * -*poly2.face_normal(face2));
                manifold.set_local_normal1(&local_n1);

                for c in contacts {
                    manifold.push(
                        pos12 * c.point_inc,
                        pos12 * c.point_ref,
                        c.fid_inc,
                        c.fid_ref,
                        c.depth,
                    );
                }
            } else {
                manifold.set_local_normal1(&poly1.face_normal(face1));

                for c in contacts {
                    manifold.push(c.point_ref, c.point_inc, c.fid_ref, c.fid_inc, c.depth);
                }
            }
        }
        _ => {
            log::debug!(
                "degenerate face clipping between {:?} and {:?}, falling back to the closest edges",
                manifold.shape1,
                manifold.shape2
            );

            if let Some(edge) = edge {
                edge_edge_contact(poly1, poly2, &edge, manifold);
            } else {
                let normal1 = if use_face2 {
                    Unit::new_unchecked(pos12 * -*poly2.face_normal(face2))
                } else {
                    poly1.face_normal(face1)
                };
                deepest_vertex_contact(poly1, poly2, pos12, &normal1, -face_sep, manifold);
            }
        }
    }
}

fn face_area(poly: &dyn PolyhedralShape, face: u32) -> Real {
    let vertices = &poly.topology().face(face).vertices;
    let Some(first) = vertices.first() else {
        return 0.0;
    };
    let origin = poly.core_vertex(*first);
    let doubled: Vector<Real> = vertices
        .windows(2)
        .map(|w| (poly.core_vertex(w[0]) - origin).cross(&(poly.core_vertex(w[1]) - origin)))
        .sum();
    doubled.norm() * 0.5
}

fn edge_edge_contact(
    poly1: &dyn PolyhedralShape,
    poly2: &dyn PolyhedralShape,
    edge: &EdgeSeparation,
    manifold: &mut ContactManifoldInfo,
) {
    let (loc1, loc2) =
        closest_points_segment_segment_with_locations(&edge.segment1, &edge.segment2);
    let pt1 = edge.segment1.point_at(&loc1);
    let pt2 = edge.segment2.point_at(&loc2);

    manifold.set_local_normal1(&edge.axis);
    manifold.push(
        pt1 + *edge.axis * poly1.margin(),
        pt2 - *edge.axis * poly2.margin(),
        FeatureId::Edge(edge.edge1),
        FeatureId::Edge(edge.edge2),
        -edge.separation,
    );
}

fn deepest_vertex_contact(
    poly1: &dyn PolyhedralShape,
    poly2: &dyn PolyhedralShape,
    pos12: &Isometry<Real>,
    normal1: &UnitVector<Real>,
    depth: Real,
    manifold: &mut ContactManifoldInfo,
) {
    let pt1 = poly1.local_support_point_without_margin(normal1);
    let dir2 = pos12.inverse_transform_vector(&-**normal1);
    let pt2 = pos12 * poly2.local_support_point_without_margin(&dir2);

    manifold.set_local_normal1(normal1);
    manifold.push(
        pt1 + **normal1 * poly1.margin(),
        pt2 - **normal1 * poly2.margin(),
        FeatureId::Unknown,
        FeatureId::Unknown,
        depth,
    );
}

/// Clips the face of `inc_poly` most anti-parallel to the `ref_face`-th face of
/// `ref_poly` with the side planes of that reference face.
///
/// `pos_inc` is the position of the incident shape relative to the reference shape.
/// Returns `None` if the incident face is nearly perpendicular to the reference face.
fn clip_incident_face(
    ref_poly: &dyn PolyhedralShape,
    ref_face: u32,
    inc_poly: &dyn PolyhedralShape,
    pos_inc: &Isometry<Real>,
    config: &NarrowPhaseConfig,
) -> Option<SmallVec<[ClippedContact; 8]>> {
    let ref_topology = ref_poly.topology();
    let inc_topology = inc_poly.topology();
    let normal = ref_poly.face_normal(ref_face);
    let ref_origin = ref_poly.core_vertex(ref_topology.face(ref_face).vertices[0]);

    // Find the incident face, in the local-space of the reference shape.
    let mut inc_face = 0;
    let mut best_dot = Real::MAX;

    for i in 0..inc_topology.num_faces() as u32 {
        let dot = (pos_inc * *inc_poly.face_normal(i)).dot(&normal);

        if dot < best_dot {
            best_dot = dot;
            inc_face = i;
        }
    }

    if best_dot > -config.degenerate_axis_epsilon {
        return None;
    }

    let mut polygon: ClippedPolygon = inc_topology
        .face(inc_face)
        .vertices
        .iter()
        .map(|v| pos_inc * inc_poly.core_vertex(*v))
        .collect();
    let mut clipped = ClippedPolygon::new();

    for e in ref_topology.face_half_edges(ref_face) {
        let a = ref_poly.core_vertex(ref_topology.origin(e));
        let b = ref_poly.core_vertex(ref_topology.destination(e));

        if (b - a).norm_squared() <= DEFAULT_EPSILON {
            continue;
        }

        let side_normal = (b - a).cross(&normal);
        clip_halfspace_polygon(&a, &side_normal, &polygon, &mut clipped);
        core::mem::swap(&mut polygon, &mut clipped);
    }

    let margin_ref = ref_poly.margin();
    let margin_inc = inc_poly.margin();

    Some(
        polygon
            .iter()
            .filter_map(|pt| {
                let dist = normal.dot(&(pt - ref_origin));
                let separation = dist - margin_ref - margin_inc;

                (separation <= 0.0).then(|| ClippedContact {
                    point_ref: pt - *normal * (dist - margin_ref),
                    point_inc: pt - *normal * margin_inc,
                    fid_ref: FeatureId::Face(ref_face),
                    fid_inc: FeatureId::Face(inc_face),
                    depth: -separation,
                })
            })
            .collect(),
    )
}

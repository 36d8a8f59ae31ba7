use crate::math::{Isometry, Point, Real, DEFAULT_EPSILON};
use crate::query::closest_points::closest_point_on_segment;
use crate::query::ContactManifoldInfo;
use crate::shape::{Ball, FeatureId, PolyhedralShape, SegmentPointLocation};
use na::Unit;

/// Computes the point of the `face`-th face of `poly` closest to `point`.
///
/// Both `point` and the result are expressed in the local-space of `poly`. If the
/// projection of `point` on the face plane lies inside of the face, it is returned
/// together with the face feature. Otherwise the closest point of the face boundary is
/// returned, with the edge (half-edge index) or vertex feature it lies on.
pub(crate) fn closest_point_on_face(
    poly: &dyn PolyhedralShape,
    face: u32,
    point: &Point<Real>,
) -> (Point<Real>, FeatureId) {
    let topology = poly.topology();
    let normal = topology.face_normal(face);
    let origin = poly.core_vertex(topology.face(face).vertices[0]);
    let proj = point - *normal * normal.dot(&(point - origin));

    let inside = topology.face_half_edges(face).all(|e| {
        let a = poly.core_vertex(topology.origin(e));
        let b = poly.core_vertex(topology.destination(e));
        (b - a).cross(&(proj - a)).dot(&normal) >= 0.0
    });

    if inside {
        return (proj, FeatureId::Face(face));
    }

    let mut best = (proj, FeatureId::Face(face));
    let mut best_dist = Real::MAX;

    for e in topology.face_half_edges(face) {
        let edge = crate::query::sat::polyhedron_edge_segment(poly, e);
        let (pt, location) = closest_point_on_segment(point, &edge);
        let dist = na::distance_squared(&pt, point);

        if dist < best_dist {
            best_dist = dist;
            let feature = match location {
                SegmentPointLocation::OnVertex(0) => FeatureId::Vertex(topology.origin(e)),
                SegmentPointLocation::OnVertex(_) => FeatureId::Vertex(topology.destination(e)),
                SegmentPointLocation::OnEdge(_) => FeatureId::Edge(e),
            };
            best = (pt, feature);
        }
    }

    best
}

/// Computes the contact manifold between a ball and a polyhedron.
///
/// The face of the polyhedron with the largest signed distance to the ball center is
/// found first. If the center projects inside of this face, the contact normal is the
/// face normal. Otherwise, the ball touches the boundary of that face and the normal
/// joins the closest boundary point to the center. The result has at most one point.
pub fn contact_manifold_ball_polyhedron(
    pos12: &Isometry<Real>,
    ball1: &Ball,
    poly2: &dyn PolyhedralShape,
    manifold: &mut ContactManifoldInfo,
) {
    manifold.clear();

    let center1_2 = pos12.inverse_transform_point(&Point::origin());
    let ball_radius = ball1.total_radius();
    let poly_margin = poly2.margin();
    let sum_radius = ball_radius + poly_margin;

    let (face, signed_dist) = poly2.most_separating_face(&center1_2);

    if signed_dist >= sum_radius {
        return;
    }

    let (closest, fid2) = closest_point_on_face(poly2, face, &center1_2);

    // Normal pointing from the polyhedron toward the ball, and distance to the core.
    let (local_n2, dist) = if let FeatureId::Face(_) = fid2 {
        (poly2.face_normal(face), signed_dist)
    } else {
        let (normal, dist) = Unit::try_new_and_get(center1_2 - closest, DEFAULT_EPSILON)
            .unwrap_or((poly2.face_normal(face), 0.0));
        (normal, dist)
    };

    let depth = sum_radius - dist;
    if depth <= 0.0 {
        return;
    }

    let local_n1 = Unit::new_unchecked(pos12 * -*local_n2);
    manifold.set_local_normal1(&local_n1);
    manifold.push(
        Point::from(*local_n1 * ball_radius),
        pos12 * (closest + *local_n2 * poly_margin),
        FeatureId::Face(0),
        fid2,
        depth,
    );
}

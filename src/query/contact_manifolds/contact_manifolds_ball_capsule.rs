use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::closest_points::closest_point_on_segment;
use crate::query::ContactManifoldInfo;
use crate::shape::{Ball, Capsule, FeatureId, SegmentPointLocation};
use na::Unit;

/// The feature of a capsule matching a location on its segment.
pub(crate) fn capsule_feature(location: &SegmentPointLocation) -> FeatureId {
    match location {
        SegmentPointLocation::OnVertex(i) => FeatureId::Vertex(*i),
        SegmentPointLocation::OnEdge(_) => FeatureId::Edge(0),
    }
}

/// Computes the contact manifold between a ball and a capsule.
pub fn contact_manifold_ball_capsule(
    pos12: &Isometry<Real>,
    ball1: &Ball,
    capsule2: &Capsule,
    manifold: &mut ContactManifoldInfo,
) {
    manifold.clear();

    let segment2_1 = capsule2.segment().transformed(pos12);
    let (proj, location) = closest_point_on_segment(&Point::origin(), &segment2_1);
    let radius1 = ball1.total_radius();
    let radius2 = capsule2.total_radius();
    let sum_radius = radius1 + radius2;
    let dist = proj.coords.norm();

    if dist >= sum_radius {
        return;
    }

    let local_n1 = Unit::try_new(proj.coords, DEFAULT_EPSILON).unwrap_or_else(Vector::y_axis);
    manifold.set_local_normal1(&local_n1);
    manifold.push(
        Point::from(*local_n1 * radius1),
        proj - *local_n1 * radius2,
        FeatureId::Face(0),
        capsule_feature(&location),
        sum_radius - dist,
    );
}

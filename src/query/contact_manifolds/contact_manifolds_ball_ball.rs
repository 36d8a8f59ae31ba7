use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::ContactManifoldInfo;
use crate::shape::{Ball, FeatureId};
use na::Unit;

/// Computes the contact manifold between two balls.
///
/// Balls exactly touching are not considered in contact.
pub fn contact_manifold_ball_ball(
    pos12: &Isometry<Real>,
    ball1: &Ball,
    ball2: &Ball,
    manifold: &mut ContactManifoldInfo,
) {
    manifold.clear();

    let radius1 = ball1.total_radius();
    let radius2 = ball2.total_radius();
    let center2_1 = Point::from(pos12.translation.vector);
    let dist = center2_1.coords.norm();
    let sum_radius = radius1 + radius2;

    if dist >= sum_radius {
        return;
    }

    let local_n1 = Unit::try_new(center2_1.coords, DEFAULT_EPSILON).unwrap_or_else(Vector::y_axis);
    manifold.set_local_normal1(&local_n1);
    manifold.push(
        Point::from(*local_n1 * radius1),
        center2_1 - *local_n1 * radius2,
        FeatureId::Face(0),
        FeatureId::Face(0),
        sum_radius - dist,
    );
}

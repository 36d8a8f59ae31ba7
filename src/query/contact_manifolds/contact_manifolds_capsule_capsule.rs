use crate::math::{Isometry, Real, Vector, DEFAULT_EPSILON};
use crate::query::clip::clip_segment_segment;
use crate::query::closest_points::closest_points_segment_segment_with_locations;
use crate::query::contact_manifolds::contact_manifolds_ball_capsule::capsule_feature;
use crate::query::{ContactManifoldInfo, NarrowPhaseConfig};
use crate::shape::{Capsule, FeatureId};
use crate::utils::SIN_FRAC_PI_8;
use na::Unit;

fn clipping_feature(feature: usize) -> FeatureId {
    match feature {
        0 => FeatureId::Vertex(0),
        2 => FeatureId::Vertex(1),
        _ => FeatureId::Edge(0),
    }
}

/// Computes the contact manifold between two capsules.
///
/// Capsules with almost parallel axes, almost perpendicular to the contact normal, get
/// two contact points at the ends of the overlap of their segments.
pub fn contact_manifold_capsule_capsule(
    pos12: &Isometry<Real>,
    capsule1: &Capsule,
    capsule2: &Capsule,
    config: &NarrowPhaseConfig,
    manifold: &mut ContactManifoldInfo,
) {
    manifold.clear();

    let seg1 = *capsule1.segment();
    let seg2_1 = capsule2.segment().transformed(pos12);
    let (loc1, loc2) = closest_points_segment_segment_with_locations(&seg1, &seg2_1);
    let local_p1 = seg1.point_at(&loc1);
    let local_p2_1 = seg2_1.point_at(&loc2);

    let radius1 = capsule1.total_radius();
    let radius2 = capsule2.total_radius();
    let sum_radius = radius1 + radius2;
    let dist = na::distance(&local_p1, &local_p2_1);

    if dist >= sum_radius {
        return;
    }

    let local_n1 =
        Unit::try_new(local_p2_1 - local_p1, DEFAULT_EPSILON).unwrap_or_else(Vector::y_axis);
    manifold.set_local_normal1(&local_n1);

    if let (Some(dir1), Some(dir2)) = (seg1.direction(), seg2_1.direction()) {
        if dir1.dot(&dir2).abs() >= config.parallel_edge_cos_tolerance
            && dir1.dot(&local_n1).abs() < SIN_FRAC_PI_8
        {
            // Capsules axes are almost parallel and are almost perpendicular to the normal.
            if let Some((clip_a, clip_b)) = clip_segment_segment(&seg1, &seg2_1) {
                let same_point =
                    (clip_a.0 - clip_b.0).norm_squared() <= DEFAULT_EPSILON * 100.0;
                let num_clips = if same_point { 1 } else { 2 };

                for (p1, p2, f1, f2) in [clip_a, clip_b].iter().take(num_clips) {
                    let dist = (p2 - p1).dot(&local_n1);

                    if dist < sum_radius {
                        manifold.push(
                            p1 + *local_n1 * radius1,
                            p2 - *local_n1 * radius2,
                            clipping_feature(*f1),
                            clipping_feature(*f2),
                            sum_radius - dist,
                        );
                    }
                }

                if !manifold.is_empty() {
                    return;
                }
            }
        }
    }

    manifold.push(
        local_p1 + *local_n1 * radius1,
        local_p2_1 - *local_n1 * radius2,
        capsule_feature(&loc1),
        capsule_feature(&loc2),
        sum_radius - dist,
    );
}

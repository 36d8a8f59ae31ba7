use crate::math::{Point, Real};
use crate::shape::Segment;

// Features in clipping points are:
// 0 = First vertex.
// 1 = On the face.
// 2 = Second vertex.
/// A pair of matching points on two clipped segments, with their features.
pub type ClippingPoints = (Point<Real>, Point<Real>, usize, usize);

/// Projects two segments on the line of `seg1` and returns the two ends of their overlap.
///
/// Each end is given as the pair of points at this position on `seg1` and `seg2`.
/// Returns `None` if the projections do not overlap, or if `seg1` has a zero length.
pub fn clip_segment_segment(seg1: &Segment, seg2: &Segment) -> Option<(ClippingPoints, ClippingPoints)> {
    let (seg1, mut seg2) = ((seg1.a, seg1.b), (seg2.a, seg2.b));
    // NOTE: no need to normalize the tangent.
    let tangent1 = seg1.1 - seg1.0;
    let sqnorm_tangent1 = tangent1.norm_squared();

    if sqnorm_tangent1 == 0.0 {
        return None;
    }

    let range1 = [0.0, sqnorm_tangent1];
    let mut range2 = [
        (seg2.0 - seg1.0).dot(&tangent1),
        (seg2.1 - seg1.0).dot(&tangent1),
    ];
    let features1 = [0, 2];
    let mut features2 = [0, 2];

    if range2[1] < range2[0] {
        range2.swap(0, 1);
        features2.swap(0, 1);
        core::mem::swap(&mut seg2.0, &mut seg2.1);
    }

    if range2[0] > range1[1] || range1[0] > range2[1] {
        // No clip point.
        return None;
    }

    let length1 = range1[1] - range1[0];
    let length2 = range2[1] - range2[0];
    let lerp2 = |bcoord: Real| {
        if length2 > 0.0 {
            seg2.0 + (seg2.1 - seg2.0) * bcoord
        } else {
            seg2.0
        }
    };

    let ca = if range2[0] > range1[0] {
        let bcoord = (range2[0] - range1[0]) / length1;
        (seg1.0 + tangent1 * bcoord, seg2.0, 1, features2[0])
    } else {
        let bcoord = (range1[0] - range2[0]) / length2;
        (seg1.0, lerp2(bcoord), features1[0], 1)
    };

    let cb = if range2[1] < range1[1] {
        let bcoord = (range2[1] - range1[0]) / length1;
        (seg1.0 + tangent1 * bcoord, seg2.1, 1, features2[1])
    } else {
        let bcoord = (range1[1] - range2[0]) / length2;
        (seg1.1, lerp2(bcoord), features1[1], 1)
    };

    Some((ca, cb))
}

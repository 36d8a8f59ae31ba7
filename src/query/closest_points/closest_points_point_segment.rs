use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::shape::{Segment, SegmentPointLocation};

/// Computes the point of `segment` closest to `pt`, and its location on the segment.
///
/// A degenerate segment is treated as its first vertex.
pub fn closest_point_on_segment(
    pt: &Point<Real>,
    segment: &Segment,
) -> (Point<Real>, SegmentPointLocation) {
    let ab = segment.scaled_direction();
    let sqnab = ab.norm_squared();

    if sqnab <= DEFAULT_EPSILON {
        return (segment.a, SegmentPointLocation::OnVertex(0));
    }

    let t = (pt - segment.a).dot(&ab) / sqnab;

    if t <= 0.0 {
        (segment.a, SegmentPointLocation::OnVertex(0))
    } else if t >= 1.0 {
        (segment.b, SegmentPointLocation::OnVertex(1))
    } else {
        (segment.a + ab * t, SegmentPointLocation::OnEdge([1.0 - t, t]))
    }
}

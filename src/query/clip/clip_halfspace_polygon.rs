use crate::math::{Point, Real, Vector};
use smallvec::SmallVec;

/// A convex polygon being clipped. Most polygons of a box contact have at most 8 vertices.
pub type ClippedPolygon = SmallVec<[Point<Real>; 8]>;

/// Cuts a polygon with the given half-space (Sutherland-Hodgman).
///
/// The half-space is the set of points `pt` with `(pt - center).dot(normal) <= 0`.
/// Vertices of `polygon` lying on this side are kept, and each polygon edge strictly
/// crossing the plane adds its crossing point. The result, cleared first, is written into `result`.
/// `normal` does not have to be normalized.
pub fn clip_halfspace_polygon(
    center: &Point<Real>,
    normal: &Vector<Real>,
    polygon: &[Point<Real>],
    result: &mut ClippedPolygon,
) {
    result.clear();

    let Some(last_pt) = polygon.last() else {
        return;
    };

    let signed_dist = |pt: &Point<Real>| (pt - center).dot(normal);
    let mut prev_pt = last_pt;
    let mut prev_dist = signed_dist(prev_pt);

    for pt in polygon {
        let dist = signed_dist(pt);

        // A vertex lying exactly on the plane is kept as is, without a crossing point.
        if (dist <= 0.0) != (prev_dist <= 0.0) && dist != 0.0 && prev_dist != 0.0 {
            // We crossed the plane, so we need to cut the edge.
            let t = prev_dist / (prev_dist - dist);
            result.push(prev_pt + (pt - prev_pt) * t);
        }

        if dist <= 0.0 {
            result.push(*pt);
        }

        prev_pt = pt;
        prev_dist = dist;
    }
}

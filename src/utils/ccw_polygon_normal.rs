use crate::math::*;

/// Computes the normal of a counter-clock-wise planar polygon using Newell's method.
///
/// This is robust to collinear consecutive vertices. Returns `None` if the
/// polygon has a zero area.
pub fn ccw_polygon_normal(
    points: &[Point<Real>],
    polygon: impl IntoIterator<Item = u32> + Clone,
) -> Option<UnitVector<Real>> {
    let mut normal = Vector::zeros();
    let first = polygon.clone().into_iter().next()?;
    let mut prev = points[first as usize];

    for id in polygon.into_iter().skip(1).chain(core::iter::once(first)) {
        let curr = points[id as usize];
        normal.x += (prev.y - curr.y) * (prev.z + curr.z);
        normal.y += (prev.z - curr.z) * (prev.x + curr.x);
        normal.z += (prev.x - curr.x) * (prev.y + curr.y);
        prev = curr;
    }

    UnitVector::try_new(normal, DEFAULT_EPSILON)
}

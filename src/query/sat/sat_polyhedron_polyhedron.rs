use crate::math::{Isometry, Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::shape::{PolyhedralShape, Segment, SupportMap};
use smallvec::SmallVec;

/// The best separating axis found among the cross products of the edges of two shapes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeSeparation {
    /// The separation between the cores of both shapes along `axis`.
    pub separation: Real,
    /// The separating axis, expressed in the local-space of the first shape and
    /// pointing toward the second shape.
    pub axis: UnitVector<Real>,
    /// The half-edge of the first shape this axis was built from.
    pub edge1: u32,
    /// The edge of the second shape this axis was built from.
    pub edge2: u32,
    /// The edge of the first shape, in the local-space of the first shape.
    pub segment1: Segment,
    /// The edge of the second shape, in the local-space of the first shape.
    pub segment2: Segment,
}

/// The segment joining the endpoints of the half-edge `edge` of `poly`.
pub fn polyhedron_edge_segment(poly: &dyn PolyhedralShape, edge: u32) -> Segment {
    let topology = poly.topology();
    Segment::new(
        poly.core_vertex(topology.origin(edge)),
        poly.core_vertex(topology.destination(edge)),
    )
}

/// Finds the best separating axis among the cross products of the edges of two polyhedra.
///
/// Each undirected edge is visited once and both orientations of each axis are tested.
/// An edge pair only counts if both edges actually lie on the supporting planes of
/// their shape along the axis. Returns `None` if no pair forms a valid axis.
pub fn polyhedron_polyhedron_find_local_separating_edge_twoway(
    poly1: &dyn PolyhedralShape,
    poly2: &dyn PolyhedralShape,
    pos12: &Isometry<Real>,
    degenerate_axis_epsilon: Real,
) -> Option<EdgeSeparation> {
    let edges2: SmallVec<[(u32, Segment); 16]> = poly2
        .topology()
        .unique_edges()
        .map(|e| (e, polyhedron_edge_segment(poly2, e).transformed(pos12)))
        .collect();
    let support2 = |dir: &Vector<Real>| {
        pos12 * poly2.local_support_point_without_margin(&pos12.inverse_transform_vector(dir))
    };

    find_separating_edge_twoway(poly1, &edges2, support2, degenerate_axis_epsilon)
}

/// Finds the best separating axis among the cross products of the edges of a polyhedron
/// and a segment expressed in the local-space of the polyhedron.
pub fn polyhedron_segment_find_local_separating_edge_twoway(
    poly1: &dyn PolyhedralShape,
    segment: &Segment,
    degenerate_axis_epsilon: Real,
) -> Option<EdgeSeparation> {
    let support2 = |dir: &Vector<Real>| segment.local_support_point_without_margin(dir);
    find_separating_edge_twoway(poly1, &[(0, *segment)], support2, degenerate_axis_epsilon)
}

fn find_separating_edge_twoway(
    poly1: &dyn PolyhedralShape,
    edges2: &[(u32, Segment)],
    support2: impl Fn(&Vector<Real>) -> Point<Real>,
    degenerate_axis_epsilon: Real,
) -> Option<EdgeSeparation> {
    let mut best: Option<EdgeSeparation> = None;

    for edge1 in poly1.topology().unique_edges() {
        let segment1 = polyhedron_edge_segment(poly1, edge1);
        let dir1 = segment1.scaled_direction();

        for (edge2, segment2) in edges2 {
            let dir2 = segment2.scaled_direction();
            let cross = dir1.cross(&dir2);
            let norm = cross.norm();

            if norm <= degenerate_axis_epsilon * dir1.norm() * dir2.norm() || norm == 0.0 {
                continue;
            }

            let axis = UnitVector::new_unchecked(cross / norm);

            for axis in [axis, -axis] {
                let max1 = poly1.local_support_point_without_margin(&axis).coords.dot(&axis);
                let min2 = support2(&-*axis).coords.dot(&axis);
                let separation = min2 - max1;

                if best.is_some_and(|b| separation <= b.separation) {
                    continue;
                }

                let tolerance = DEFAULT_EPSILON.sqrt() * (1.0 + max1.abs().max(min2.abs()));
                let on_support1 = segment1.a.coords.dot(&axis) >= max1 - tolerance
                    && segment1.b.coords.dot(&axis) >= max1 - tolerance;
                let on_support2 = segment2.a.coords.dot(&axis) <= min2 + tolerance
                    && segment2.b.coords.dot(&axis) <= min2 + tolerance;

                if on_support1 && on_support2 {
                    best = Some(EdgeSeparation {
                        separation,
                        axis,
                        edge1,
                        edge2: *edge2,
                        segment1,
                        segment2: *segment2,
                    });
                }
            }
        }
    }

    best
}

use crate::math::{Isometry, Real};
use crate::shape::{PolyhedralShape, SupportMap};

/// Computes the separation between the cores of `poly1` and `sm2` along the normal of
/// the `face1`-th face of `poly1`.
///
/// The result is expressed in the local-space of `poly1`. Margins are not included.
pub fn polyhedron_support_map_compute_separation_wrt_local_face<S2: ?Sized + SupportMap>(
    poly1: &dyn PolyhedralShape,
    sm2: &S2,
    pos12: &Isometry<Real>,
    face1: u32,
) -> Real {
    let normal1 = poly1.face_normal(face1);
    let origin1 = poly1.core_vertex(poly1.topology().face(face1).vertices[0]);
    let local_dir2 = pos12.inverse_transform_vector(&-*normal1);
    let pt2 = pos12 * sm2.local_support_point_without_margin(&local_dir2);
    normal1.dot(&(pt2 - origin1))
}

/// Finds the face of `poly1` whose normal separates `poly1` and `sm2` the most.
///
/// Returns the core separation and the face index. Ties are resolved in favor of the
/// smallest face index.
pub fn polyhedron_support_map_find_local_separating_face<S2: ?Sized + SupportMap>(
    poly1: &dyn PolyhedralShape,
    sm2: &S2,
    pos12: &Isometry<Real>,
) -> (Real, u32) {
    let mut best_separation = -Real::MAX;
    let mut best_face = 0;

    for face1 in 0..poly1.topology().num_faces() as u32 {
        let separation =
            polyhedron_support_map_compute_separation_wrt_local_face(poly1, sm2, pos12, face1);

        if separation > best_separation {
            best_separation = separation;
            best_face = face1;
        }
    }

    (best_separation, best_face)
}

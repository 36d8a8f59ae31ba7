use crate::math::{Point, Real, UnitVector};
use crate::shape::{HalfEdgeStructure, SupportMap};

/// A shape with a polyhedral core geometry described by a half-edge structure.
///
/// This is what the sphere-polyhedron, capsule-polyhedron, and polyhedron-polyhedron
/// contact algorithms operate on.
pub trait PolyhedralShape: SupportMap {
    /// The topology of this polyhedron.
    fn topology(&self) -> &HalfEdgeStructure;

    /// The vertices of the core geometry of this polyhedron, without margin.
    fn core_vertices(&self) -> &[Point<Real>];

    /// The `i`-th vertex of the core geometry.
    #[inline]
    fn core_vertex(&self, i: u32) -> Point<Real> {
        self.core_vertices()[i as usize]
    }

    /// The outward normal of the `i`-th face.
    #[inline]
    fn face_normal(&self, i: u32) -> UnitVector<Real> {
        self.topology().face_normal(i)
    }

    /// The centroid of the core vertices.
    fn core_centroid(&self) -> Point<Real> {
        let vertices = self.core_vertices();
        let sum = vertices
            .iter()
            .fold(na::Vector3::zeros(), |acc, pt| acc + pt.coords);
        Point::from(sum / vertices.len() as Real)
    }

    /// Returns the index of the face with the largest signed distance to `point`
    /// together with that distance. Ties are resolved in favor of the smallest index.
    fn most_separating_face(&self, point: &Point<Real>) -> (u32, Real) {
        let topology = self.topology();
        let mut best = (0, -Real::MAX);

        for (fid, face) in topology.faces().iter().enumerate() {
            let origin = self.core_vertex(face.vertices[0]);
            let dist = face.normal.dot(&(point - origin));

            if dist > best.1 {
                best = (fid as u32, dist);
            }
        }

        best
    }
}

use crate::bounding_volume::Aabb;
use crate::mass_properties::MassProperties;
use crate::math::{Point, Real};
use crate::shape::HalfEdgeStructure;

impl MassProperties {
    /// Computes the mass properties of a convex polyhedron.
    ///
    /// The mass and center of mass are exact. The angular inertia is the one of
    /// the bounding box of `vertices`, centered at the center of mass.
    pub fn from_convex_polyhedron(
        density: Real,
        vertices: &[Point<Real>],
        topology: &HalfEdgeStructure,
    ) -> MassProperties {
        let (volume, com) = convex_polyhedron_volume_and_center_of_mass(vertices, topology);
        let mass = volume * density;
        let half_extents = Aabb::from_points(vertices.iter().copied()).half_extents();
        let (_, unit_i) = Self::cuboid_volume_unit_inertia(half_extents);
        Self::new(com, mass, unit_i * mass)
    }
}

/// Computes the volume and center of mass of a closed convex polyhedron.
///
/// Each face is fanned into triangles from its first vertex, and each triangle
/// forms a tetrahedron with the mean of `vertices`.
pub fn convex_polyhedron_volume_and_center_of_mass(
    vertices: &[Point<Real>],
    topology: &HalfEdgeStructure,
) -> (Real, Point<Real>) {
    let apex = vertices
        .iter()
        .fold(Point::origin(), |acc, pt| acc + pt.coords / vertices.len() as Real);

    let mut res = Point::origin();
    let mut vol = 0.0;

    for face in topology.faces() {
        let p1 = vertices[face.vertices[0] as usize];

        for w in face.vertices[1..].windows(2) {
            let p2 = vertices[w[0] as usize];
            let p3 = vertices[w[1] as usize];
            let volume = (p1 - apex).dot(&(p2 - apex).cross(&(p3 - apex))) / 6.0;
            let center = (apex.coords + p1.coords + p2.coords + p3.coords) / 4.0;

            res += center * volume;
            vol += volume;
        }
    }

    if vol == 0.0 {
        (vol, apex)
    } else {
        (vol, res / vol)
    }
}

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::shape::shape_error::{check_margin, check_scaling};
use crate::shape::{HalfEdgeStructure, PolyhedralShape, ShapeError, SupportMap};
use crate::utils;

/// A convex polyhedron with explicit faces.
///
/// The polyhedron owns its [`HalfEdgeStructure`]. Its topology never changes
/// once built: rescaling only moves the vertices and recomputes the face normals.
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexPolyhedron {
    original_points: Vec<Point<Real>>,
    points: Vec<Point<Real>>,
    topology: HalfEdgeStructure,
    margin: Real,
    local_scaling: Vector<Real>,
}

impl ConvexPolyhedron {
    /// Creates a new convex polyhedron from its vertices and faces.
    ///
    /// Each face is a list of at least three vertex indices. Faces may be given in any
    /// winding, they are reoriented outward. Fails if the topology is not a closed
    /// 2-manifold, if a face is degenerate, or if the shape is not convex.
    ///
    /// # Example
    ///
    /// ```
    /// use narrowphase3d::math::Point;
    /// use narrowphase3d::shape::{ConvexPolyhedron, PolyhedralShape};
    ///
    /// let points = vec![
    ///     Point::origin(),
    ///     Point::new(1.0, 0.0, 0.0),
    ///     Point::new(0.0, 1.0, 0.0),
    ///     Point::new(0.0, 0.0, 1.0),
    /// ];
    /// let faces = [[0u32, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
    ///
    /// let tetrahedron = ConvexPolyhedron::from_convex_mesh(points, &faces).unwrap();
    /// assert_eq!(tetrahedron.topology().num_edges(), 6);
    /// ```
    pub fn from_convex_mesh<F: AsRef<[u32]>>(
        points: Vec<Point<Real>>,
        faces: &[F],
    ) -> Result<ConvexPolyhedron, ShapeError> {
        let topology = HalfEdgeStructure::new(&points, faces)?;
        check_convexity(&points, &topology)?;

        Ok(ConvexPolyhedron {
            original_points: points.clone(),
            points,
            topology,
            margin: 0.0,
            local_scaling: Vector::repeat(1.0),
        })
    }

    /// Returns this polyhedron with the given collision margin.
    pub fn with_margin(mut self, margin: Real) -> Result<Self, ShapeError> {
        self.set_margin(margin)?;
        Ok(self)
    }

    /// The current, scaled, vertices of this polyhedron.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The vertices this polyhedron was built from, before any scaling.
    #[inline]
    pub fn original_points(&self) -> &[Point<Real>] {
        &self.original_points
    }

    /// Sets the collision margin of this polyhedron.
    pub fn set_margin(&mut self, margin: Real) -> Result<(), ShapeError> {
        self.margin = check_margin(margin)?;
        Ok(())
    }

    /// The scaling factors currently applied to this polyhedron.
    #[inline]
    pub fn local_scaling(&self) -> Vector<Real> {
        self.local_scaling
    }

    /// Rescales the vertices of this polyhedron, relative to its original vertices.
    pub fn set_local_scaling(&mut self, scaling: Vector<Real>) -> Result<(), ShapeError> {
        check_scaling(&scaling)?;

        for (pt, orig) in self.points.iter_mut().zip(self.original_points.iter()) {
            *pt = orig.coords.component_mul(&scaling).into();
        }

        self.topology.recompute_normals(&self.points);
        self.local_scaling = scaling;
        Ok(())
    }

    /// The number of faces of this polyhedron.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.topology.num_faces()
    }

    /// The number of vertices of this polyhedron.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// The `i`-th vertex of the core of this polyhedron.
    #[inline]
    pub fn vertex(&self, i: u32) -> Point<Real> {
        self.points[i as usize]
    }

    /// The outward normal of the `i`-th face.
    #[inline]
    pub fn face_normal(&self, i: u32) -> UnitVector<Real> {
        self.topology.face_normal(i)
    }

    /// The mean of the vertices of this polyhedron.
    #[inline]
    pub fn centroid(&self) -> Point<Real> {
        self.core_centroid()
    }

    /// Tests if `point` lies strictly behind every face plane of the core of this
    /// polyhedron.
    pub fn test_point_inside(&self, point: &Point<Real>) -> bool {
        self.most_separating_face(point).1 < 0.0
    }
}

fn check_convexity(points: &[Point<Real>], topology: &HalfEdgeStructure) -> Result<(), ShapeError> {
    let scale = points
        .iter()
        .fold(0.0, |acc: Real, pt| acc.max(pt.coords.amax()))
        .max(1.0);
    let tolerance = DEFAULT_EPSILON.sqrt() * scale;

    for (fid, face) in topology.faces().iter().enumerate() {
        let origin = points[face.vertices[0] as usize];

        for (vid, pt) in points.iter().enumerate() {
            if face.normal.dot(&(pt - origin)) > tolerance {
                return Err(ShapeError::NotConvex {
                    face: fid as u32,
                    vertex: vid as u32,
                });
            }
        }
    }

    Ok(())
}

impl SupportMap for ConvexPolyhedron {
    #[inline]
    fn local_support_point_without_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, &self.points)
    }

    #[inline]
    fn margin(&self) -> Real {
        self.margin
    }
}

impl PolyhedralShape for ConvexPolyhedron {
    #[inline]
    fn topology(&self) -> &HalfEdgeStructure {
        &self.topology
    }

    #[inline]
    fn core_vertices(&self) -> &[Point<Real>] {
        &self.points
    }
}

//! Support mapping based Cuboid shape.

use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::shape_error::{check_margin, check_scaling};
use crate::shape::{HalfEdgeStructure, PolyhedralShape, ShapeError, SupportMap};
use crate::utils::WSign;
use std::sync::OnceLock;

/// Shape of a box.
///
/// `half_extents` describes the core of the box, without its margin. The
/// extent actually used for collision detection is `half_extents + margin`,
/// see [`Cuboid::extent`].
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    half_extents: Vector<Real>,
    margin: Real,
    local_scaling: Vector<Real>,
    vertices: [Point<Real>; 8],
    topology: &'static HalfEdgeStructure,
}

// NOTE: format of the cuboid vertex and face ids.
//
// Vertices: 0 (-x,-y,+z), 1 (+x,-y,+z), 2 (+x,+y,+z), 3 (-x,+y,+z),
//           4 (-x,-y,-z), 5 (+x,-y,-z), 6 (+x,+y,-z), 7 (-x,+y,-z).
// Faces:    0 (+z), 1 (+x), 2 (-z), 3 (-x), 4 (-y), 5 (+y).
const VERTEX_SIGNS: [[Real; 3]; 8] = [
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
];

const FACES: [[u32; 4]; 6] = [
    [0, 1, 2, 3],
    [1, 5, 6, 2],
    [4, 7, 6, 5],
    [4, 0, 3, 7],
    [4, 5, 1, 0],
    [3, 2, 6, 7],
];

fn cuboid_topology() -> Result<&'static HalfEdgeStructure, ShapeError> {
    static TOPOLOGY: OnceLock<Result<HalfEdgeStructure, ShapeError>> = OnceLock::new();

    // The unit cube has the same topology and face normals as any box.
    TOPOLOGY
        .get_or_init(|| {
            let unit_vertices = VERTEX_SIGNS.map(|s| Point::new(s[0], s[1], s[2]));
            HalfEdgeStructure::new(&unit_vertices, &FACES)
        })
        .as_ref()
        .map_err(|e| *e)
}

impl Cuboid {
    /// Creates a new box from its half-extents and a zero margin.
    ///
    /// Half-extents are the box half-width along each axis. Each half-extent
    /// must be non-negative.
    pub fn new(half_extents: Vector<Real>) -> Result<Cuboid, ShapeError> {
        if let Some(e) = half_extents.iter().find(|e| !e.is_finite() || **e < 0.0) {
            return Err(ShapeError::NegativeExtent(*e));
        }

        Ok(Cuboid {
            half_extents,
            margin: 0.0,
            local_scaling: Vector::repeat(1.0),
            vertices: Self::compute_vertices(&half_extents),
            topology: cuboid_topology()?,
        })
    }

    /// Returns this box with the given collision margin.
    pub fn with_margin(mut self, margin: Real) -> Result<Self, ShapeError> {
        self.set_margin(margin)?;
        Ok(self)
    }

    fn compute_vertices(extent: &Vector<Real>) -> [Point<Real>; 8] {
        VERTEX_SIGNS.map(|s| Point::new(s[0] * extent.x, s[1] * extent.y, s[2] * extent.z))
    }

    /// The half-extents of the core of this box, without margin.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        self.half_extents
    }

    /// The half-extents of this box, margin included.
    #[inline]
    pub fn extent(&self) -> Vector<Real> {
        self.half_extents + Vector::repeat(self.margin)
    }

    /// Sets the collision margin of this box.
    pub fn set_margin(&mut self, margin: Real) -> Result<(), ShapeError> {
        self.margin = check_margin(margin)?;
        Ok(())
    }

    /// The scaling factors currently applied to this box.
    #[inline]
    pub fn local_scaling(&self) -> Vector<Real> {
        self.local_scaling
    }

    /// Rescales this box: each half-extent is multiplied by the ratio between the
    /// new and the previous scaling factor along its axis.
    pub fn set_local_scaling(&mut self, scaling: Vector<Real>) -> Result<(), ShapeError> {
        check_scaling(&scaling)?;
        self.half_extents = self
            .half_extents
            .component_div(&self.local_scaling)
            .component_mul(&scaling);
        self.local_scaling = scaling;
        self.vertices = Self::compute_vertices(&self.half_extents);
        Ok(())
    }

    /// The number of faces of a box.
    #[inline]
    pub fn face_count(&self) -> usize {
        6
    }

    /// The number of vertices of a box.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        8
    }

    /// The number of half-edges of a box.
    #[inline]
    pub fn half_edge_count(&self) -> usize {
        24
    }

    /// The position of the `i`-th vertex, using the extent with margin.
    pub fn vertex(&self, i: u32) -> Point<Real> {
        let s = VERTEX_SIGNS[i as usize];
        let e = self.extent();
        Point::new(s[0] * e.x, s[1] * e.y, s[2] * e.z)
    }

    /// The outward normal of the `i`-th face.
    #[inline]
    pub fn face_normal(&self, i: u32) -> UnitVector<Real> {
        self.topology.face_normal(i)
    }

    /// The index of the face with the outward normal `sign * e_axis`.
    pub fn face_toward_axis(axis: usize, sign: Real) -> u32 {
        match (axis, sign >= 0.0) {
            (2, true) => 0,
            (0, true) => 1,
            (2, false) => 2,
            (0, false) => 3,
            (1, false) => 4,
            _ => 5,
        }
    }

    /// The centroid of a box is always its local origin.
    #[inline]
    pub fn centroid(&self) -> Point<Real> {
        Point::origin()
    }

    /// Tests if `point` lies strictly inside of the core of this box.
    pub fn test_point_inside(&self, point: &Point<Real>) -> bool {
        (0..3).all(|i| point[i] < self.half_extents[i] && point[i] > -self.half_extents[i])
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point_without_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        dir.copy_sign_to(self.half_extents).into()
    }

    #[inline]
    fn margin(&self) -> Real {
        self.margin
    }
}

impl PolyhedralShape for Cuboid {
    #[inline]
    fn topology(&self) -> &HalfEdgeStructure {
        self.topology
    }

    #[inline]
    fn core_vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    #[inline]
    fn core_centroid(&self) -> Point<Real> {
        Point::origin()
    }
}

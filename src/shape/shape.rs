use crate::bounding_volume::Aabb;
use crate::mass_properties::MassProperties;
use crate::math::{Isometry, Matrix, Point, Real, UnitVector, Vector};
use crate::shape::{
    Ball, Capsule, ConvexPolyhedron, Cuboid, HalfEdge, HalfEdgeFace, PolyhedralShape, ShapeError,
    SupportMap,
};

/// Enum representing the type of a shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeType {
    /// A ball shape.
    Ball = 0,
    /// A cuboid shape.
    Cuboid,
    /// A capsule shape.
    Capsule,
    /// A convex polyhedron.
    ConvexPolyhedron,
}

impl ShapeType {
    /// The number of shape types.
    pub const COUNT: usize = 4;

    /// All the shape types, ordered by index.
    pub const ALL: [ShapeType; Self::COUNT] = [
        ShapeType::Ball,
        ShapeType::Cuboid,
        ShapeType::Capsule,
        ShapeType::ConvexPolyhedron,
    ];

    /// The index of this shape type, in `0..ShapeType::COUNT`.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Is this a shape type with a polyhedral core (`Cuboid` or `ConvexPolyhedron`)?
    #[inline]
    pub fn is_polyhedral(self) -> bool {
        matches!(self, ShapeType::Cuboid | ShapeType::ConvexPolyhedron)
    }
}

/// A convex shape taking part in collision detection.
///
/// This is a closed set of shapes: the narrow-phase picks a contact algorithm
/// from the [`ShapeType`] of both shapes, without any downcasting.
#[derive(Clone, Debug, PartialEq)]
pub enum ConvexShape {
    /// A ball shape.
    Ball(Ball),
    /// A cuboid shape.
    Cuboid(Cuboid),
    /// A capsule shape.
    Capsule(Capsule),
    /// A convex polyhedron.
    ConvexPolyhedron(ConvexPolyhedron),
}

macro_rules! dispatch(
    ($shape: expr, $s: ident => $e: expr) => {
        match $shape {
            ConvexShape::Ball($s) => $e,
            ConvexShape::Cuboid($s) => $e,
            ConvexShape::Capsule($s) => $e,
            ConvexShape::ConvexPolyhedron($s) => $e,
        }
    }
);

impl ConvexShape {
    /// The type tag of this shape.
    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        match self {
            ConvexShape::Ball(_) => ShapeType::Ball,
            ConvexShape::Cuboid(_) => ShapeType::Cuboid,
            ConvexShape::Capsule(_) => ShapeType::Capsule,
            ConvexShape::ConvexPolyhedron(_) => ShapeType::ConvexPolyhedron,
        }
    }

    /// This shape as a ball, if it is one.
    pub fn as_ball(&self) -> Option<&Ball> {
        match self {
            ConvexShape::Ball(b) => Some(b),
            _ => None,
        }
    }

    /// This shape as a cuboid, if it is one.
    pub fn as_cuboid(&self) -> Option<&Cuboid> {
        match self {
            ConvexShape::Cuboid(c) => Some(c),
            _ => None,
        }
    }

    /// This shape as a capsule, if it is one.
    pub fn as_capsule(&self) -> Option<&Capsule> {
        match self {
            ConvexShape::Capsule(c) => Some(c),
            _ => None,
        }
    }

    /// This shape as a convex polyhedron, if it is one.
    pub fn as_convex_polyhedron(&self) -> Option<&ConvexPolyhedron> {
        match self {
            ConvexShape::ConvexPolyhedron(c) => Some(c),
            _ => None,
        }
    }

    /// This shape as a support map.
    pub fn as_support_map(&self) -> &dyn SupportMap {
        dispatch!(self, s => s as &dyn SupportMap)
    }

    /// This shape as a polyhedron, if its kind is polyhedral.
    pub fn as_polyhedral(&self) -> Option<&dyn PolyhedralShape> {
        match self {
            ConvexShape::Cuboid(c) => Some(c as &dyn PolyhedralShape),
            ConvexShape::ConvexPolyhedron(c) => Some(c as &dyn PolyhedralShape),
            _ => None,
        }
    }

    /// Sets the collision margin of this shape.
    pub fn set_margin(&mut self, margin: Real) -> Result<(), ShapeError> {
        dispatch!(self, s => s.set_margin(margin))
    }

    /// The scaling factors currently applied to this shape.
    pub fn local_scaling(&self) -> Vector<Real> {
        dispatch!(self, s => s.local_scaling())
    }

    /// Rescales the core of this shape. Its topology is left unchanged.
    pub fn set_local_scaling(&mut self, scaling: Vector<Real>) -> Result<(), ShapeError> {
        dispatch!(self, s => s.set_local_scaling(scaling))
    }

    /// The bounding box of this shape, margin included, in its local-space.
    pub fn local_bounds(&self) -> Aabb {
        match self {
            ConvexShape::Ball(b) => {
                Aabb::from_half_extents(Point::origin(), Vector::repeat(b.total_radius()))
            }
            ConvexShape::Cuboid(c) => Aabb::from_half_extents(Point::origin(), c.extent()),
            ConvexShape::Capsule(c) => {
                let segment = c.segment();
                Aabb::from_points([segment.a, segment.b]).loosened(c.total_radius())
            }
            ConvexShape::ConvexPolyhedron(c) => {
                Aabb::from_points(c.points().iter().copied()).loosened(c.margin())
            }
        }
    }

    /// The world-space bounding box of this shape at the position `pos`.
    pub fn compute_aabb(&self, pos: &Isometry<Real>) -> Aabb {
        self.local_bounds().transform_by(pos)
    }

    /// Tests if `point` lies strictly inside of the core of this shape.
    pub fn test_point_inside(&self, point: &Point<Real>) -> bool {
        dispatch!(self, s => s.test_point_inside(point))
    }

    /// The mass properties of this shape, margin included, for a uniform `density`.
    pub fn mass_properties(&self, density: Real) -> MassProperties {
        match self {
            ConvexShape::Ball(b) => MassProperties::from_ball(density, b.total_radius()),
            ConvexShape::Cuboid(c) => MassProperties::from_cuboid(density, c.extent()),
            ConvexShape::Capsule(c) => {
                let segment = c.segment();
                MassProperties::from_capsule(density, segment.a, segment.b, c.total_radius())
            }
            ConvexShape::ConvexPolyhedron(c) => {
                MassProperties::from_convex_polyhedron(density, c.points(), c.topology())
            }
        }
    }

    /// The local inertia tensor of this shape for the given total `mass`.
    pub fn local_inertia_tensor(&self, mass: Real) -> Matrix<Real> {
        match self {
            ConvexShape::Ball(b) => {
                let (_, unit_i) = MassProperties::ball_volume_unit_angular_inertia(b.total_radius());
                Matrix::from_diagonal(&(unit_i * mass))
            }
            ConvexShape::Cuboid(c) => {
                let (_, unit_i) = MassProperties::cuboid_volume_unit_inertia(c.extent());
                Matrix::from_diagonal(&(unit_i * mass))
            }
            ConvexShape::Capsule(_) => {
                let unit = self.mass_properties(1.0);
                let unit_mass = unit.mass();

                if unit_mass > 0.0 {
                    unit.reconstruct_inertia_matrix() * (mass / unit_mass)
                } else {
                    Matrix::zeros()
                }
            }
            ConvexShape::ConvexPolyhedron(_) => {
                let half_extents = self.local_bounds().half_extents();
                let (_, unit_i) = MassProperties::cuboid_volume_unit_inertia(half_extents);
                Matrix::from_diagonal(&(unit_i * mass))
            }
        }
    }

    /// The number of faces, for polyhedral shapes.
    pub fn face_count(&self) -> Option<usize> {
        self.as_polyhedral().map(|p| p.topology().num_faces())
    }

    /// The `i`-th face, for polyhedral shapes.
    pub fn face(&self, i: u32) -> Option<&HalfEdgeFace> {
        match self {
            ConvexShape::Cuboid(c) => c.topology().faces().get(i as usize),
            ConvexShape::ConvexPolyhedron(c) => c.topology().faces().get(i as usize),
            _ => None,
        }
    }

    /// The number of vertices, for polyhedral shapes.
    pub fn vertex_count(&self) -> Option<usize> {
        self.as_polyhedral().map(|p| p.core_vertices().len())
    }

    /// The `i`-th vertex, for polyhedral shapes.
    ///
    /// Cuboid vertices are placed on the margined extent, polyhedron vertices
    /// are the ones of the core.
    pub fn vertex(&self, i: u32) -> Option<Point<Real>> {
        match self {
            ConvexShape::Cuboid(c) if (i as usize) < c.vertex_count() => Some(c.vertex(i)),
            ConvexShape::ConvexPolyhedron(c) => c.points().get(i as usize).copied(),
            _ => None,
        }
    }

    /// The number of undirected edges, for polyhedral shapes.
    pub fn edge_count(&self) -> Option<usize> {
        self.as_polyhedral().map(|p| p.topology().num_edges())
    }

    /// The `i`-th half-edge, for polyhedral shapes.
    pub fn half_edge(&self, i: u32) -> Option<&HalfEdge> {
        match self {
            ConvexShape::Cuboid(c) => c.topology().half_edges().get(i as usize),
            ConvexShape::ConvexPolyhedron(c) => c.topology().half_edges().get(i as usize),
            _ => None,
        }
    }

    /// The outward normal of the `i`-th face, for polyhedral shapes.
    pub fn face_normal(&self, i: u32) -> Option<UnitVector<Real>> {
        self.face(i).map(|f| f.normal)
    }

    /// The centroid of the vertices, for polyhedral shapes.
    pub fn centroid(&self) -> Option<Point<Real>> {
        self.as_polyhedral().map(|p| p.core_centroid())
    }
}

impl SupportMap for ConvexShape {
    #[inline]
    fn local_support_point_without_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        dispatch!(self, s => s.local_support_point_without_margin(dir))
    }

    #[inline]
    fn margin(&self) -> Real {
        dispatch!(self, s => s.margin())
    }
}

macro_rules! impl_from_shape(
    ($($variant: ident),*) => {$(
        impl From<$variant> for ConvexShape {
            fn from(shape: $variant) -> Self {
                ConvexShape::$variant(shape)
            }
        }
    )*}
);

impl_from_shape!(Ball, Cuboid, Capsule, ConvexPolyhedron);

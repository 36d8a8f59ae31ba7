use crate::math::{Isometry, Real};
use crate::pipeline::ShapeId;
use crate::query::contact_manifolds::{
    contact_manifold_ball_ball, contact_manifold_ball_capsule, contact_manifold_ball_polyhedron,
    contact_manifold_capsule_capsule, contact_manifold_capsule_polyhedron,
    contact_manifold_polyhedron_polyhedron,
};
use crate::query::{ContactManifoldInfo, NarrowPhaseConfig, Unsupported};
use crate::shape::{ConvexShape, ShapeType};

/// The narrow-phase algorithms available for each pair of shape kinds.
///
/// Each algorithm expects its shapes in a specific order, e.g., the ball first for
/// [`NarrowPhaseAlgorithm::SpherePolyhedron`]. The [`DispatchTable`] takes care of
/// swapping the shapes when needed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NarrowPhaseAlgorithm {
    /// Ball against ball.
    SphereSphere,
    /// Ball against capsule.
    SphereCapsule,
    /// Ball against cuboid or convex polyhedron.
    SpherePolyhedron,
    /// Capsule against capsule.
    CapsuleCapsule,
    /// Capsule against cuboid or convex polyhedron.
    CapsulePolyhedron,
    /// Cuboid or convex polyhedron against cuboid or convex polyhedron.
    PolyhedronPolyhedron,
}

impl NarrowPhaseAlgorithm {
    /// Can this algorithm run with shapes of kinds `kind1` and `kind2`, in this order?
    pub fn accepts(self, kind1: ShapeType, kind2: ShapeType) -> bool {
        use ShapeType::{Ball, Capsule};

        match self {
            Self::SphereSphere => kind1 == Ball && kind2 == Ball,
            Self::SphereCapsule => kind1 == Ball && kind2 == Capsule,
            Self::SpherePolyhedron => kind1 == Ball && kind2.is_polyhedral(),
            Self::CapsuleCapsule => kind1 == Capsule && kind2 == Capsule,
            Self::CapsulePolyhedron => kind1 == Capsule && kind2.is_polyhedral(),
            Self::PolyhedronPolyhedron => kind1.is_polyhedral() && kind2.is_polyhedral(),
        }
    }

    /// Runs this algorithm on two shapes given in the order it accepts.
    ///
    /// `manifold` must have been created with the positions of both shapes.
    pub fn compute(
        self,
        shape1: &ConvexShape,
        shape2: &ConvexShape,
        config: &NarrowPhaseConfig,
        manifold: &mut ContactManifoldInfo,
    ) -> Result<(), Unsupported> {
        let pos12 = manifold.pos12();

        match (self, shape1, shape2) {
            (Self::SphereSphere, ConvexShape::Ball(b1), ConvexShape::Ball(b2)) => {
                contact_manifold_ball_ball(&pos12, b1, b2, manifold)
            }
            (Self::SphereCapsule, ConvexShape::Ball(b1), ConvexShape::Capsule(c2)) => {
                contact_manifold_ball_capsule(&pos12, b1, c2, manifold)
            }
            (Self::CapsuleCapsule, ConvexShape::Capsule(c1), ConvexShape::Capsule(c2)) => {
                contact_manifold_capsule_capsule(&pos12, c1, c2, config, manifold)
            }
            (Self::SpherePolyhedron, ConvexShape::Ball(b1), _) => {
                let p2 = shape2.as_polyhedral().ok_or(unsupported(shape1, shape2))?;
                contact_manifold_ball_polyhedron(&pos12, b1, p2, manifold)
            }
            (Self::CapsulePolyhedron, ConvexShape::Capsule(c1), _) => {
                let p2 = shape2.as_polyhedral().ok_or(unsupported(shape1, shape2))?;
                contact_manifold_capsule_polyhedron(&pos12, c1, p2, config, manifold)
            }
            (Self::PolyhedronPolyhedron, _, _) => {
                match (shape1.as_polyhedral(), shape2.as_polyhedral()) {
                    (Some(p1), Some(p2)) => {
                        contact_manifold_polyhedron_polyhedron(&pos12, p1, p2, config, manifold)
                    }
                    _ => return Err(unsupported(shape1, shape2)),
                }
            }
            _ => return Err(unsupported(shape1, shape2)),
        }

        Ok(())
    }
}

fn unsupported(shape1: &ConvexShape, shape2: &ConvexShape) -> Unsupported {
    Unsupported {
        kind1: shape1.shape_type(),
        kind2: shape2.shape_type(),
    }
}

/// The table selecting the narrow-phase algorithm of each pair of shape kinds.
///
/// The table is symmetric: registering an algorithm for `(kind1, kind2)` registers it
/// for `(kind2, kind1)` too. When dispatching, the shapes are swapped if the algorithm
/// expects them in the other order, and the resulting manifold is flipped back so its
/// first shape is always the first shape given by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchTable {
    algorithms: [[Option<NarrowPhaseAlgorithm>; ShapeType::COUNT]; ShapeType::COUNT],
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchTable {
    /// A table with one algorithm for every pair of shape kinds.
    pub fn new() -> Self {
        use NarrowPhaseAlgorithm as Algo;
        use ShapeType::{Ball, Capsule, ConvexPolyhedron, Cuboid};

        let entries = [
            (Ball, Ball, Algo::SphereSphere),
            (Ball, Capsule, Algo::SphereCapsule),
            (Ball, Cuboid, Algo::SpherePolyhedron),
            (Ball, ConvexPolyhedron, Algo::SpherePolyhedron),
            (Capsule, Capsule, Algo::CapsuleCapsule),
            (Capsule, Cuboid, Algo::CapsulePolyhedron),
            (Capsule, ConvexPolyhedron, Algo::CapsulePolyhedron),
            (Cuboid, Cuboid, Algo::PolyhedronPolyhedron),
            (Cuboid, ConvexPolyhedron, Algo::PolyhedronPolyhedron),
            (ConvexPolyhedron, ConvexPolyhedron, Algo::PolyhedronPolyhedron),
        ];

        let mut table = Self::empty();
        for (kind1, kind2, algorithm) in entries {
            let _ = table.register(kind1, kind2, algorithm);
        }
        table
    }

    /// A table without any algorithm.
    pub fn empty() -> Self {
        Self {
            algorithms: [[None; ShapeType::COUNT]; ShapeType::COUNT],
        }
    }

    /// Registers `algorithm` for the unordered pair of kinds `kind1`, `kind2`.
    ///
    /// Returns the algorithm previously registered for this pair, if any.
    pub fn register(
        &mut self,
        kind1: ShapeType,
        kind2: ShapeType,
        algorithm: NarrowPhaseAlgorithm,
    ) -> Option<NarrowPhaseAlgorithm> {
        let previous = self.algorithms[kind1.index()][kind2.index()].replace(algorithm);
        self.algorithms[kind2.index()][kind1.index()] = Some(algorithm);
        previous
    }

    /// Removes the algorithm registered for the unordered pair of kinds `kind1`, `kind2`.
    pub fn unregister(
        &mut self,
        kind1: ShapeType,
        kind2: ShapeType,
    ) -> Option<NarrowPhaseAlgorithm> {
        self.algorithms[kind2.index()][kind1.index()] = None;
        self.algorithms[kind1.index()][kind2.index()].take()
    }

    /// The algorithm registered for the pair of kinds `kind1`, `kind2`.
    pub fn algorithm(&self, kind1: ShapeType, kind2: ShapeType) -> Option<NarrowPhaseAlgorithm> {
        self.algorithms[kind1.index()][kind2.index()]
    }

    /// Computes the contact manifold between two shapes.
    ///
    /// `manifold` must have been created with the positions of both shapes. Its points are
    /// replaced by the contacts found, reduced to at most
    /// [`NarrowPhaseConfig::max_manifold_points`].
    pub fn dispatch(
        &self,
        shape1: &ConvexShape,
        shape2: &ConvexShape,
        config: &NarrowPhaseConfig,
        manifold: &mut ContactManifoldInfo,
    ) -> Result<(), Unsupported> {
        let (kind1, kind2) = (shape1.shape_type(), shape2.shape_type());
        let algorithm = self
            .algorithm(kind1, kind2)
            .ok_or(Unsupported { kind1, kind2 })?;

        if algorithm.accepts(kind1, kind2) {
            algorithm.compute(shape1, shape2, config, manifold)?;
        } else if algorithm.accepts(kind2, kind1) {
            manifold.flip();
            let result = algorithm.compute(shape2, shape1, config, manifold);
            manifold.flip();
            result.map_err(|_| Unsupported { kind1, kind2 })?;
        } else {
            return Err(Unsupported { kind1, kind2 });
        }

        manifold.reduce(config.manifold_capacity());
        debug_assert!(manifold.validate(config.manifold_capacity()));
        Ok(())
    }

    /// Computes the contact manifold between two shapes at the given world positions.
    ///
    /// The shape handles of the returned manifold are [`ShapeId::INVALID`].
    pub fn test(
        &self,
        shape1: &ConvexShape,
        pos1: &Isometry<Real>,
        shape2: &ConvexShape,
        pos2: &Isometry<Real>,
        config: &NarrowPhaseConfig,
    ) -> Result<ContactManifoldInfo, Unsupported> {
        let mut manifold =
            ContactManifoldInfo::new(ShapeId::INVALID, ShapeId::INVALID, *pos1, *pos2);
        self.dispatch(shape1, shape2, config, &mut manifold)?;
        Ok(manifold)
    }
}

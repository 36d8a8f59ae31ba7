use crate::math::{Point, Real, Vector};
use crate::pipeline::ShapeId;
use crate::query::ContactManifoldInfo;
use core::cmp::Reverse;
use ordered_float::OrderedFloat;

/// A world-space contact, as seen by debug tools.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorldContact {
    /// The handle of the first collider.
    pub shape1: ShapeId,
    /// The handle of the second collider.
    pub shape2: ShapeId,
    /// The contact point on the first collider.
    pub point1: Point<Real>,
    /// The contact point on the second collider.
    pub point2: Point<Real>,
    /// The contact normal, pointing from the first collider toward the second.
    pub normal: Vector<Real>,
    /// The penetration depth.
    pub penetration_depth: Real,
}

/// A read-only view of the contact manifolds computed by the last narrow-phase pass.
#[derive(Copy, Clone, Debug)]
pub struct ContactSnapshot<'a> {
    manifolds: &'a [ContactManifoldInfo],
}

impl<'a> ContactSnapshot<'a> {
    pub(crate) fn new(manifolds: &'a [ContactManifoldInfo]) -> Self {
        Self { manifolds }
    }

    /// The manifolds of the last pass.
    pub fn manifolds(&self) -> &'a [ContactManifoldInfo] {
        self.manifolds
    }

    /// The total number of contact points of the last pass.
    pub fn num_contacts(&self) -> usize {
        self.manifolds.iter().map(|m| m.len()).sum()
    }

    /// Iterates through every contact point of the last pass, in world-space.
    pub fn contacts(&self) -> impl Iterator<Item = WorldContact> + 'a {
        self.manifolds.iter().flat_map(|manifold| {
            manifold.points.iter().map(move |pt| WorldContact {
                shape1: manifold.shape1,
                shape2: manifold.shape2,
                point1: manifold.position1 * pt.local_p1,
                point2: manifold.position2 * pt.local_p2,
                normal: pt.normal,
                penetration_depth: pt.penetration_depth,
            })
        })
    }

    /// Iterates through the world-space contact points on the first collider of each pair.
    pub fn world_points1(&self) -> impl Iterator<Item = Point<Real>> + 'a {
        self.contacts().map(|c| c.point1)
    }

    /// Iterates through the world-space contact points on the second collider of each pair.
    pub fn world_points2(&self) -> impl Iterator<Item = Point<Real>> + 'a {
        self.contacts().map(|c| c.point2)
    }

    /// The deepest contact of the last pass.
    ///
    /// Among equally deep contacts, the first one is returned.
    pub fn deepest_contact(&self) -> Option<WorldContact> {
        self.contacts()
            .min_by_key(|c| Reverse(OrderedFloat(c.penetration_depth)))
    }
}

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real};
use crate::shape::ConvexShape;
use slab::Slab;

/// The handle of a collider inserted into a [`ColliderSet`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(u32);

impl ShapeId {
    /// A handle that never identifies a collider of a [`ColliderSet`].
    pub const INVALID: ShapeId = ShapeId(u32::MAX);

    /// Creates a handle from its raw index.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw index of this handle.
    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }

    /// Is this handle different from [`ShapeId::INVALID`]?
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

/// The handle of the rigid-body a collider is attached to.
///
/// Bodies are owned by the caller: this crate only uses their handle to group
/// colliders and to index the body properties given to the constraint builder.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

/// A shape attached to a rigid-body at a given world position.
#[derive(Clone, Debug, PartialEq)]
pub struct Collider {
    /// The shape of this collider.
    pub shape: ConvexShape,
    /// The world-space position of this collider.
    pub position: Isometry<Real>,
    /// The rigid-body this collider is attached to.
    pub body: BodyId,
}

impl Collider {
    /// Creates a new collider.
    pub fn new(shape: ConvexShape, position: Isometry<Real>, body: BodyId) -> Self {
        Self {
            shape,
            position,
            body,
        }
    }

    /// The world-space bounding box of this collider, margin included.
    pub fn compute_aabb(&self) -> Aabb {
        self.shape.compute_aabb(&self.position)
    }
}

/// The set of colliders taking part in the narrow-phase.
///
/// Handles stay valid until their collider is removed. The handle of a removed
/// collider may be reused by a later insertion.
#[derive(Clone, Debug, Default)]
pub struct ColliderSet {
    colliders: Slab<Collider>,
}

impl ColliderSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a collider to this set and returns its handle.
    pub fn insert(&mut self, collider: Collider) -> ShapeId {
        let key = self.colliders.insert(collider);
        ShapeId::new(key as u32)
    }

    /// Removes a collider from this set.
    pub fn remove(&mut self, handle: ShapeId) -> Option<Collider> {
        self.colliders.try_remove(handle.id() as usize)
    }

    /// The collider with the given handle.
    #[inline]
    pub fn get(&self, handle: ShapeId) -> Option<&Collider> {
        self.colliders.get(handle.id() as usize)
    }

    /// The collider with the given handle, mutably.
    ///
    /// This cannot be called while a narrow-phase pass borrows this set.
    #[inline]
    pub fn get_mut(&mut self, handle: ShapeId) -> Option<&mut Collider> {
        self.colliders.get_mut(handle.id() as usize)
    }

    /// Does this set contain a collider with the given handle?
    #[inline]
    pub fn contains(&self, handle: ShapeId) -> bool {
        self.colliders.contains(handle.id() as usize)
    }

    /// The number of colliders in this set.
    #[inline]
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Is this set empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Iterates through all the colliders of this set, with their handle.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Collider)> {
        self.colliders
            .iter()
            .map(|(key, collider)| (ShapeId::new(key as u32), collider))
    }
}

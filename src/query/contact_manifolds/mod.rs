//! Contact manifolds between pairs of convex shapes.
//!
//! A **contact manifold** is the set of contact points between two shapes sharing the
//! same contact normal. A box resting on another box needs four of them (one per corner
//! of the contact area) to stay stable, a ball resting on a plane needs a single one.
//!
//! Each function of this module implements the narrow-phase algorithm for one pair of
//! shape kinds. They all take the position of the second shape relative to the first
//! one, and write their result into a [`ContactManifoldInfo`] whose positions, normals
//! and points are then consistent with each other. The
//! [`DispatchTable`](crate::query::DispatchTable) selects the right function for any
//! pair of [`ConvexShape`](crate::shape::ConvexShape)s.

pub use self::contact_manifold::{
    ContactManifoldInfo, ContactPoint, MAX_MANIFOLD_POINTS, REDUCTION_DEPTH_TOLERANCE,
};
pub use self::contact_manifolds_ball_ball::contact_manifold_ball_ball;
pub use self::contact_manifolds_ball_capsule::contact_manifold_ball_capsule;
pub use self::contact_manifolds_ball_polyhedron::contact_manifold_ball_polyhedron;
pub use self::contact_manifolds_capsule_capsule::contact_manifold_capsule_capsule;
pub use self::contact_manifolds_capsule_polyhedron::contact_manifold_capsule_polyhedron;
pub use self::contact_manifolds_polyhedron_polyhedron::contact_manifold_polyhedron_polyhedron;

mod contact_manifold;
mod contact_manifolds_ball_ball;
mod contact_manifolds_ball_capsule;
mod contact_manifolds_ball_polyhedron;
mod contact_manifolds_capsule_capsule;
mod contact_manifolds_capsule_polyhedron;
mod contact_manifolds_polyhedron_polyhedron;

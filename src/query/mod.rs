//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general entry point of this module is [`DispatchTable::dispatch`], which selects
//! the contact algorithm matching the kinds of two [`ConvexShape`](crate::shape::ConvexShape)s
//! and fills a [`ContactManifoldInfo`] with at most [`MAX_MANIFOLD_POINTS`] contacts.
//!
//! Ray-casting can be achieved by importing the [`RayCast`] trait.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are the algorithms called by the dispatch
//! table. For example `contact_manifold_ball_ball` computes the contacts between two shapes
//! known at compile-time to be balls. They have the form `contact_manifold_[shape1]_[shape2]()`.

pub use self::contact_manifolds::{
    ContactManifoldInfo, ContactPoint, MAX_MANIFOLD_POINTS, REDUCTION_DEPTH_TOLERANCE,
};
pub use self::dispatcher::{DispatchTable, NarrowPhaseAlgorithm};
pub use self::error::Unsupported;
pub use self::narrow_phase_config::NarrowPhaseConfig;
pub use self::ray::{Ray, RayCast, RayIntersection};

pub mod clip;
pub mod closest_points;
mod contact_manifolds;
mod dispatcher;
mod error;
mod narrow_phase_config;
mod ray;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::contact_manifolds::{
        contact_manifold_ball_ball, contact_manifold_ball_capsule,
        contact_manifold_ball_polyhedron, contact_manifold_capsule_capsule,
        contact_manifold_capsule_polyhedron, contact_manifold_polyhedron_polyhedron,
    };
    pub use super::ray::{ray_toi_and_normal_with_ball, ray_toi_with_ball};
}

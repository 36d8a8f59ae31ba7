//! The narrow-phase pass over the pairs emitted by a broad-phase.

pub use self::collider::{BodyId, Collider, ColliderSet, ShapeId};
pub use self::contact_snapshot::{ContactSnapshot, WorldContact};
pub use self::narrow_phase::{
    NarrowPhase, NarrowPhaseError, NarrowPhaseReport, ShapePair,
};

mod collider;
mod contact_snapshot;
mod narrow_phase;

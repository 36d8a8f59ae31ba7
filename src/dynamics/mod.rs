//! Conversion of contact manifolds into the constraints consumed by a contact solver.

pub use self::contact_constraint::{
    build_contact_constraint, build_contact_constraints, combine_friction, ConstraintDiagnostics,
    ConstraintSkip, ContactConstraint, ContactConstraintPoint,
};
pub use self::jacobian::JacobianRow;
pub use self::rigid_body_properties::RigidBodyProperties;

mod contact_constraint;
mod jacobian;
mod rigid_body_properties;

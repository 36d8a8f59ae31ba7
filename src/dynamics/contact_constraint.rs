use crate::dynamics::{JacobianRow, RigidBodyProperties};
use crate::math::{Point, Real, Vector};
use crate::pipeline::{BodyId, ColliderSet, ShapeId};
use crate::query::{ContactManifoldInfo, MAX_MANIFOLD_POINTS};
use crate::utils::hashmap::HashMap;
use crate::utils::WBasis;
use arrayvec::ArrayVec;

/// The reason why no contact constraint was built for a manifold.
///
/// Skipping a constraint is never fatal: the pair is simply not handed to the solver.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConstraintSkip {
    /// Both bodies have an infinite mass and angular inertia.
    #[error("both bodies are static")]
    BothStatic,
    /// The inverse mass or inertia of one body is negative or not finite.
    #[error("the mass properties of {0:?} are invalid")]
    InvalidMassProperties(BodyId),
    /// The manifold has no contact point.
    #[error("the contact manifold is empty")]
    EmptyManifold,
    /// The manifold refers to a collider missing from the collider set.
    #[error("the collider {0:?} does not exist")]
    UnknownShape(ShapeId),
    /// No properties were given for the body of a collider.
    #[error("no properties are known for {0:?}")]
    UnknownBody(BodyId),
}

/// The rows of a contact constraint for one contact point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactConstraintPoint {
    /// The world-space contact point on the first body.
    pub point1: Point<Real>,
    /// The world-space contact point on the second body.
    pub point2: Point<Real>,
    /// The row preventing penetration along the contact normal.
    pub normal_row: JacobianRow,
    /// The friction rows, along each tangent of the constraint.
    pub tangent_rows: [JacobianRow; 2],
    /// The penetration depth of this contact.
    pub penetration_depth: Real,
}

/// The contact constraint between two rigid-bodies, ready for a solver.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactConstraint {
    /// The first body.
    pub body1: BodyId,
    /// The second body.
    pub body2: BodyId,
    /// The collider of the first body involved in the contact.
    pub shape1: ShapeId,
    /// The collider of the second body involved in the contact.
    pub shape2: ShapeId,
    /// The world-space contact normal, pointing from the first body toward the second.
    pub normal: Vector<Real>,
    /// Two unit vectors forming an orthonormal basis with the normal.
    pub tangents: [Vector<Real>; 2],
    /// The combined friction coefficient of both bodies.
    pub friction: Real,
    /// One entry per contact point of the manifold.
    pub points: ArrayVec<ContactConstraintPoint, MAX_MANIFOLD_POINTS>,
}

/// Counters of a constraint building pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstraintDiagnostics {
    /// The number of constraints built.
    pub num_built: usize,
    /// The number of manifolds skipped because both bodies are static.
    pub num_both_static: usize,
    /// The number of manifolds skipped because of invalid mass properties.
    pub num_invalid_mass_properties: usize,
    /// The number of empty manifolds skipped.
    pub num_empty_manifolds: usize,
    /// The number of manifolds skipped because of an unknown collider or body.
    pub num_unknown_handles: usize,
}

impl ConstraintDiagnostics {
    /// The total number of skipped manifolds.
    pub fn num_skipped(&self) -> usize {
        self.num_both_static
            + self.num_invalid_mass_properties
            + self.num_empty_manifolds
            + self.num_unknown_handles
    }

    fn record(&mut self, skip: &ConstraintSkip) {
        match skip {
            ConstraintSkip::BothStatic => self.num_both_static += 1,
            ConstraintSkip::InvalidMassProperties(_) => self.num_invalid_mass_properties += 1,
            ConstraintSkip::EmptyManifold => self.num_empty_manifolds += 1,
            ConstraintSkip::UnknownShape(_) | ConstraintSkip::UnknownBody(_) => {
                self.num_unknown_handles += 1
            }
        }
    }
}

/// The friction coefficient of a contact between two bodies.
#[inline]
pub fn combine_friction(friction1: Real, friction2: Real) -> Real {
    (friction1 * friction2).sqrt()
}

/// Builds the contact constraint of one manifold between the bodies `body1` and `body2`.
///
/// The tangents only depend on the contact normal. Each row uses the contact point on
/// each body relative to its center of mass.
pub fn build_contact_constraint(
    manifold: &ContactManifoldInfo,
    body1: BodyId,
    props1: &RigidBodyProperties,
    body2: BodyId,
    props2: &RigidBodyProperties,
) -> Result<ContactConstraint, ConstraintSkip> {
    if !props1.is_valid() {
        return Err(ConstraintSkip::InvalidMassProperties(body1));
    }

    if !props2.is_valid() {
        return Err(ConstraintSkip::InvalidMassProperties(body2));
    }

    if props1.is_static() && props2.is_static() {
        return Err(ConstraintSkip::BothStatic);
    }

    if manifold.is_empty() {
        return Err(ConstraintSkip::EmptyManifold);
    }

    let normal = manifold.normal;
    let tangents = normal.orthonormal_basis();

    debug_assert!(manifold.len() <= MAX_MANIFOLD_POINTS);
    let points = manifold
        .points
        .iter()
        .take(MAX_MANIFOLD_POINTS)
        .map(|pt| {
            let point1 = manifold.position1 * pt.local_p1;
            let point2 = manifold.position2 * pt.local_p2;
            let r1 = point1 - props1.center_of_mass;
            let r2 = point2 - props2.center_of_mass;

            ContactConstraintPoint {
                point1,
                point2,
                normal_row: JacobianRow::new(&normal, &r1, &r2),
                tangent_rows: tangents.map(|t| JacobianRow::new(&t, &r1, &r2)),
                penetration_depth: pt.penetration_depth,
            }
        })
        .collect();

    Ok(ContactConstraint {
        body1,
        body2,
        shape1: manifold.shape1,
        shape2: manifold.shape2,
        normal,
        tangents,
        friction: combine_friction(props1.friction, props2.friction),
        points,
    })
}

/// Builds the contact constraints of all the given manifolds.
///
/// The bodies of each manifold are found through the colliders of `colliders`. Manifolds
/// that cannot give a constraint are skipped, logged, and counted in the returned
/// diagnostics.
pub fn build_contact_constraints(
    manifolds: &[ContactManifoldInfo],
    colliders: &ColliderSet,
    bodies: &HashMap<BodyId, RigidBodyProperties>,
) -> (Vec<ContactConstraint>, ConstraintDiagnostics) {
    let mut constraints = Vec::with_capacity(manifolds.len());
    let mut diagnostics = ConstraintDiagnostics::default();

    for manifold in manifolds {
        match build_manifold_constraint(manifold, colliders, bodies) {
            Ok(constraint) => {
                diagnostics.num_built += 1;
                constraints.push(constraint);
            }
            Err(skip) => {
                log::debug!(
                    "no contact constraint between {:?} and {:?}: {skip}",
                    manifold.shape1,
                    manifold.shape2
                );
                diagnostics.record(&skip);
            }
        }
    }

    (constraints, diagnostics)
}

fn build_manifold_constraint(
    manifold: &ContactManifoldInfo,
    colliders: &ColliderSet,
    bodies: &HashMap<BodyId, RigidBodyProperties>,
) -> Result<ContactConstraint, ConstraintSkip> {
    let (body1, props1) = collider_body(manifold.shape1, colliders, bodies)?;
    let (body2, props2) = collider_body(manifold.shape2, colliders, bodies)?;
    build_contact_constraint(manifold, body1, props1, body2, props2)
}

fn collider_body<'a>(
    shape: ShapeId,
    colliders: &ColliderSet,
    bodies: &'a HashMap<BodyId, RigidBodyProperties>,
) -> Result<(BodyId, &'a RigidBodyProperties), ConstraintSkip> {
    let body = colliders
        .get(shape)
        .ok_or(ConstraintSkip::UnknownShape(shape))?
        .body;
    let props = bodies.get(&body).ok_or(ConstraintSkip::UnknownBody(body))?;
    Ok((body, props))
}

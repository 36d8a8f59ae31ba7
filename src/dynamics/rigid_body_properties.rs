use crate::mass_properties::MassProperties;
use crate::math::{AngularInertia, Isometry, Point, Real};

/// The properties of a rigid-body needed to build its contact constraints.
///
/// Everything is expressed in world-space, at the current position of the body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RigidBodyProperties {
    /// The inverse mass. Zero for a body with infinite mass.
    pub inv_mass: Real,
    /// The world-space inverse angular inertia tensor.
    pub inv_inertia: AngularInertia<Real>,
    /// The world-space center of mass.
    pub center_of_mass: Point<Real>,
    /// The friction coefficient.
    pub friction: Real,
}

impl RigidBodyProperties {
    /// Creates the properties of a dynamic body.
    pub fn new(
        inv_mass: Real,
        inv_inertia: AngularInertia<Real>,
        center_of_mass: Point<Real>,
        friction: Real,
    ) -> Self {
        Self {
            inv_mass,
            inv_inertia,
            center_of_mass,
            friction,
        }
    }

    /// Creates the properties of a body that never moves.
    pub fn fixed(center_of_mass: Point<Real>, friction: Real) -> Self {
        Self::new(0.0, AngularInertia::zeros(), center_of_mass, friction)
    }

    /// Computes the world-space properties of a body with the given local mass
    /// properties, placed at `position`.
    pub fn from_mass_properties(
        props: &MassProperties,
        position: &Isometry<Real>,
        friction: Real,
    ) -> Self {
        Self::new(
            props.inv_mass,
            props.world_inv_inertia(&position.rotation),
            props.world_com(position),
            friction,
        )
    }

    /// Does this body have an infinite mass and angular inertia?
    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0 && self.inv_inertia.iter().all(|e| *e == 0.0)
    }

    /// Are all the properties of this body finite, with a non-negative inverse mass and
    /// non-negative diagonal of inverse inertia?
    pub fn is_valid(&self) -> bool {
        self.inv_mass.is_finite()
            && self.inv_mass >= 0.0
            && self.inv_inertia.iter().all(|e| e.is_finite())
            && self.inv_inertia.diagonal().iter().all(|e| *e >= 0.0)
            && self.center_of_mass.coords.iter().all(|e| e.is_finite())
            && self.friction.is_finite()
            && self.friction >= 0.0
    }
}

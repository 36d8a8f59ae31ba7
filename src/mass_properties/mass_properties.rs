use crate::math::{AngVector, AngularInertia, Isometry, Matrix, Point, Real, Rotation};
use crate::utils;

/// The local mass properties of a rigid-body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MassProperties {
    /// The center of mass of a rigid-body expressed in its local-space.
    pub local_com: Point<Real>,
    /// The inverse of the mass of a rigid-body.
    ///
    /// If this is zero, the rigid-body is assumed to have infinite mass.
    pub inv_mass: Real,
    /// The inverse of the principal angular inertia of the rigid-body.
    ///
    /// Components set to zero are assumed to be infinite along the corresponding principal axis.
    pub inv_principal_inertia: AngVector<Real>,
    /// The principal vectors of the local angular inertia tensor of the rigid-body.
    pub principal_inertia_local_frame: Rotation<Real>,
}

impl MassProperties {
    /// Initializes the mass properties with the given center-of-mass, mass, and angular inertia.
    ///
    /// The center-of-mass is specified in the local-space of the rigid-body.
    pub fn new(local_com: Point<Real>, mass: Real, principal_inertia: AngVector<Real>) -> Self {
        Self::with_principal_inertia_frame(local_com, mass, principal_inertia, Rotation::identity())
    }

    /// Initializes the mass properties from the given center-of-mass, mass, and principal angular inertia.
    ///
    /// The center-of-mass is specified in the local-space of the rigid-body.
    /// The principal angular inertia are the angular inertia along the coordinate axes in the local-space
    /// of the rigid-body.
    pub fn with_principal_inertia_frame(
        local_com: Point<Real>,
        mass: Real,
        principal_inertia: AngVector<Real>,
        principal_inertia_local_frame: Rotation<Real>,
    ) -> Self {
        Self {
            local_com,
            inv_mass: utils::inv(mass),
            inv_principal_inertia: principal_inertia.map(utils::inv),
            principal_inertia_local_frame,
        }
    }

    /// The mass.
    pub fn mass(&self) -> Real {
        utils::inv(self.inv_mass)
    }

    /// The angular inertia along the principal inertia axes.
    pub fn principal_inertia(&self) -> AngVector<Real> {
        self.inv_principal_inertia.map(utils::inv)
    }

    /// The world-space center of mass of the rigid-body.
    pub fn world_com(&self, pos: &Isometry<Real>) -> Point<Real> {
        pos * self.local_com
    }

    /// The world-space inverse angular inertia tensor of the rigid-body.
    pub fn world_inv_inertia(&self, rot: &Rotation<Real>) -> AngularInertia<Real> {
        let frame = (rot * self.principal_inertia_local_frame).to_rotation_matrix();
        frame.matrix() * Matrix::from_diagonal(&self.inv_principal_inertia) * frame.matrix().transpose()
    }

    /// Reconstructs the angular inertia tensor of the rigid body from its principal inertia values and axes.
    pub fn reconstruct_inertia_matrix(&self) -> Matrix<Real> {
        let frame = self.principal_inertia_local_frame.to_rotation_matrix();
        frame.matrix()
            * Matrix::from_diagonal(&self.principal_inertia())
            * frame.matrix().transpose()
    }

    /// Reconstructs the inverse angular inertia tensor of the rigid body from its principal inertia values and axes.
    pub fn reconstruct_inverse_inertia_matrix(&self) -> Matrix<Real> {
        self.world_inv_inertia(&Rotation::identity())
    }
}

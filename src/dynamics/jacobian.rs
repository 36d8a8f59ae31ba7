use crate::dynamics::RigidBodyProperties;
use crate::math::{AngVector, JacobianMatrix, Real, Vector};

/// One row of the Jacobian of a constraint between two rigid-bodies.
///
/// The full row is a 1×12 matrix acting on the stacked generalized velocities
/// `[v1, ω1, v2, ω2]` of both bodies. It is stored as one linear and one angular
/// block per body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct JacobianRow {
    /// The linear part acting on the first body.
    pub linear1: Vector<Real>,
    /// The angular part acting on the first body.
    pub angular1: AngVector<Real>,
    /// The linear part acting on the second body.
    pub linear2: Vector<Real>,
    /// The angular part acting on the second body.
    pub angular2: AngVector<Real>,
}

impl JacobianRow {
    /// The row constraining the relative velocity along `dir` of two points.
    ///
    /// `r1` and `r2` are the positions of the constrained point relative to the center of
    /// mass of each body.
    pub fn new(dir: &Vector<Real>, r1: &Vector<Real>, r2: &Vector<Real>) -> Self {
        Self {
            linear1: -dir,
            angular1: -r1.cross(dir),
            linear2: *dir,
            angular2: r2.cross(dir),
        }
    }

    /// The relative velocity along this row, given the linear and angular velocities of
    /// both bodies.
    pub fn relative_velocity(
        &self,
        linvel1: &Vector<Real>,
        angvel1: &AngVector<Real>,
        linvel2: &Vector<Real>,
        angvel2: &AngVector<Real>,
    ) -> Real {
        self.linear1.dot(linvel1)
            + self.angular1.dot(angvel1)
            + self.linear2.dot(linvel2)
            + self.angular2.dot(angvel2)
    }

    /// The inverse of the effective mass along this row: `J M⁻¹ Jᵀ`.
    pub fn inverse_effective_mass(
        &self,
        body1: &RigidBodyProperties,
        body2: &RigidBodyProperties,
    ) -> Real {
        body1.inv_mass * self.linear1.norm_squared()
            + self.angular1.dot(&(body1.inv_inertia * self.angular1))
            + body2.inv_mass * self.linear2.norm_squared()
            + self.angular2.dot(&(body2.inv_inertia * self.angular2))
    }

    /// The full 1×12 row.
    pub fn to_matrix(&self) -> JacobianMatrix<Real> {
        JacobianMatrix::from_iterator(
            self.linear1
                .iter()
                .chain(self.angular1.iter())
                .chain(self.linear2.iter())
                .chain(self.angular2.iter())
                .copied(),
        )
    }
}

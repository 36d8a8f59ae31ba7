//! Miscellaneous utilities.

use crate::math::{Real, Vector};
use na::{Scalar, Vector3};

/// Trait to copy the sign of each component of one scalar/vector/matrix to another.
pub trait WSign<Rhs>: Sized {
    // See SIMD implementations of copy_sign there: https://stackoverflow.com/a/57872652
    /// Copy the sign of each component of `self` to the corresponding component of `to`.
    fn copy_sign_to(self, to: Rhs) -> Rhs;
}

impl WSign<Real> for Real {
    fn copy_sign_to(self, to: Self) -> Self {
        let minus_zero: Real = -0.0;
        let signbit = minus_zero.to_bits();
        Real::from_bits((signbit & self.to_bits()) | ((!signbit) & to.to_bits()))
    }
}

impl<N: Scalar + Copy + WSign<N>> WSign<Vector3<N>> for N {
    fn copy_sign_to(self, to: Vector3<N>) -> Vector3<N> {
        Vector3::new(
            self.copy_sign_to(to.x),
            self.copy_sign_to(to.y),
            self.copy_sign_to(to.z),
        )
    }
}

impl<N: Scalar + Copy + WSign<N>> WSign<Vector3<N>> for Vector3<N> {
    fn copy_sign_to(self, to: Vector3<N>) -> Vector3<N> {
        Vector3::new(
            self.x.copy_sign_to(to.x),
            self.y.copy_sign_to(to.y),
            self.z.copy_sign_to(to.z),
        )
    }
}

/// Trait to compute the orthonormal basis of a vector.
pub trait WBasis: Sized {
    /// The type of the array of orthonormal vectors.
    type Basis;
    /// Computes the vectors which, when combined with `self`, form an orthonormal basis.
    ///
    /// The result only depends on `self`: it is built from the coordinate axis least
    /// aligned with `self` (ties resolved in the order x, y, z), so it never flips
    /// between two calls with the same input.
    fn orthonormal_basis(self) -> Self::Basis;
}

impl WBasis for Vector<Real> {
    type Basis = [Vector<Real>; 2];

    fn orthonormal_basis(self) -> [Vector<Real>; 2] {
        let abs = self.abs();
        let axis = if abs.x <= abs.y && abs.x <= abs.z {
            Vector::x()
        } else if abs.y <= abs.z {
            Vector::y()
        } else {
            Vector::z()
        };

        let t1 = axis.cross(&self).normalize();
        let t2 = self.cross(&t1);
        [t1, t2]
    }
}

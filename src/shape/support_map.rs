//! Traits for support mapping based shapes.

use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use na::Unit;

/// Traits of convex shapes representable by a support mapping function.
///
/// Every shape is the Minkowski sum of a *core* geometry and a ball with a radius
/// equal to its collision margin.
pub trait SupportMap {
    /// Evaluates the support function of the core geometry of this shape, i.e.,
    /// without its margin and in its local-space.
    ///
    /// A support function is a function associating a vector to the shape point which
    /// maximizes their dot product.
    fn local_support_point_without_margin(&self, dir: &Vector<Real>) -> Point<Real>;

    /// The collision margin surrounding the core geometry of this shape.
    fn margin(&self) -> Real {
        0.0
    }

    /// Evaluates the support function of this shape, margin included, in its local-space.
    ///
    /// `dir` must not be zero. If it is, the core support point is returned.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        debug_assert!(
            dir.norm_squared() > 0.0,
            "the support function is undefined for a zero direction"
        );
        let core = self.local_support_point_without_margin(dir);

        match dir.try_normalize(DEFAULT_EPSILON) {
            Some(n) => core + n * self.margin(),
            None => core,
        }
    }

    /// Same as `self.local_support_point` except that `dir` is normalized.
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.local_support_point_without_margin(dir.as_ref()) + **dir * self.margin()
    }

    /// Evaluates the support function of this shape transformed by `transform`.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point(&local_dir)
    }

    /// Same as `self.support_point` except that `dir` is normalized.
    fn support_point_toward(
        &self,
        transform: &Isometry<Real>,
        dir: &Unit<Vector<Real>>,
    ) -> Point<Real> {
        let local_dir = Unit::new_unchecked(transform.inverse_transform_vector(dir));
        transform * self.local_support_point_toward(&local_dir)
    }
}

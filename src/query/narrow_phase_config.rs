use crate::math::Real;
use crate::query::contact_manifolds::MAX_MANIFOLD_POINTS;
use crate::utils::COS_FRAC_PI_8;

/// Tolerances and limits used by the narrow-phase algorithms.
///
/// The defaults are suited for shapes sized around one unit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NarrowPhaseConfig {
    /// The maximum number of points kept per contact manifold.
    ///
    /// Values above [`MAX_MANIFOLD_POINTS`] are capped.
    pub max_manifold_points: usize,
    /// An edge-edge axis is preferred over the best face axis only if its separation
    /// exceeds the face separation by more than
    /// `(1 - edge_axis_relative_tolerance) * |face_separation| + edge_axis_absolute_tolerance`.
    pub edge_axis_relative_tolerance: Real,
    /// See [`Self::edge_axis_relative_tolerance`].
    pub edge_axis_absolute_tolerance: Real,
    /// Two segments whose directions have a cosine above this value (in absolute value)
    /// are considered parallel, and generate two contact points instead of one.
    pub parallel_edge_cos_tolerance: Real,
    /// Cross products of unit edge directions with a norm below this value are not
    /// tested as separating axes.
    pub degenerate_axis_epsilon: Real,
}

impl NarrowPhaseConfig {
    /// The number of points kept per manifold, once capped to [`MAX_MANIFOLD_POINTS`].
    #[inline]
    pub fn manifold_capacity(&self) -> usize {
        self.max_manifold_points.min(MAX_MANIFOLD_POINTS)
    }

    /// Should a candidate axis with separation `candidate` replace the current best axis
    /// with separation `current`?
    ///
    /// This is used to prefer face axes over edge axes, unless the edge axis is
    /// significantly better.
    #[inline]
    pub fn prefers_axis(&self, candidate: Real, current: Real) -> bool {
        let slack = (1.0 - self.edge_axis_relative_tolerance) * current.abs()
            + self.edge_axis_absolute_tolerance;
        candidate > current + slack
    }
}

impl Default for NarrowPhaseConfig {
    fn default() -> Self {
        Self {
            max_manifold_points: MAX_MANIFOLD_POINTS,
            edge_axis_relative_tolerance: 0.95,
            edge_axis_absolute_tolerance: 1.0e-3,
            parallel_edge_cos_tolerance: COS_FRAC_PI_8,
            degenerate_axis_epsilon: 1.0e-4,
        }
    }
}

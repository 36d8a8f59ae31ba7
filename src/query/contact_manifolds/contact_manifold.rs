use crate::math::{Isometry, Point, Real, UnitVector, Vector};
use crate::pipeline::ShapeId;
use crate::shape::FeatureId;
use static_assertions::const_assert;

/// The maximum number of contact points kept in a reduced contact manifold.
pub const MAX_MANIFOLD_POINTS: usize = 4;

/// Penetration depths closer than this are considered equal when looking for the
/// deepest point of a manifold.
pub const REDUCTION_DEPTH_TOLERANCE: Real = 1.0e-4;

// The reduction selects at most four points: deepest, farthest, triangle, quad.
const_assert!(MAX_MANIFOLD_POINTS == 4);

/// A single contact point between two shapes.
///
/// Contact positions are stored in the local-space of each shape so they can be
/// mapped back to world-space with the manifold positions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactPoint {
    /// The contact point on the surface of the first shape, in its local-space.
    pub local_p1: Point<Real>,
    /// The contact point on the surface of the second shape, in its local-space.
    pub local_p2: Point<Real>,
    /// The world-space contact normal, pointing from the first shape toward the second.
    pub normal: Vector<Real>,
    /// The penetration depth. Always non-negative.
    pub penetration_depth: Real,
    /// The feature of the first shape involved in this contact.
    pub fid1: FeatureId,
    /// The feature of the second shape involved in this contact.
    pub fid2: FeatureId,
}

impl ContactPoint {
    /// Swaps the roles of both shapes.
    #[inline]
    pub fn flip(&mut self) {
        core::mem::swap(&mut self.local_p1, &mut self.local_p2);
        core::mem::swap(&mut self.fid1, &mut self.fid2);
        self.normal = -self.normal;
    }
}

/// The set of contact points between two shapes sharing the same contact normal.
///
/// A manifold is created for a pair of shapes at given world positions, and filled by
/// one of the narrow-phase algorithms. The algorithms work in the local-space of the
/// first shape: see [`ContactManifoldInfo::set_local_normal1`] and
/// [`ContactManifoldInfo::push`].
#[derive(Clone, Debug, PartialEq)]
pub struct ContactManifoldInfo {
    /// The handle of the first shape.
    pub shape1: ShapeId,
    /// The handle of the second shape.
    pub shape2: ShapeId,
    /// The world-space position of the first shape when this manifold was computed.
    pub position1: Isometry<Real>,
    /// The world-space position of the second shape when this manifold was computed.
    pub position2: Isometry<Real>,
    /// The world-space contact normal, pointing from the first shape toward the second.
    pub normal: Vector<Real>,
    /// The contact normal in the local-space of the first shape.
    pub local_n1: Vector<Real>,
    /// The contact normal in the local-space of the second shape.
    ///
    /// This is `-local_n1` expressed in the local-space of the second shape.
    pub local_n2: Vector<Real>,
    /// The contact points.
    pub points: Vec<ContactPoint>,
}

impl ContactManifoldInfo {
    /// Creates a new empty manifold between the given shapes.
    pub fn new(
        shape1: ShapeId,
        shape2: ShapeId,
        position1: Isometry<Real>,
        position2: Isometry<Real>,
    ) -> Self {
        Self {
            shape1,
            shape2,
            position1,
            position2,
            normal: Vector::zeros(),
            local_n1: Vector::zeros(),
            local_n2: Vector::zeros(),
            points: Vec::new(),
        }
    }

    /// The position of the second shape relative to the first shape.
    #[inline]
    pub fn pos12(&self) -> Isometry<Real> {
        self.position1.inv_mul(&self.position2)
    }

    /// The number of contact points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Does this manifold contain no contact point?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Removes all the contact points of this manifold and resets its normals.
    pub fn clear(&mut self) {
        self.points.clear();
        self.normal = Vector::zeros();
        self.local_n1 = Vector::zeros();
        self.local_n2 = Vector::zeros();
    }

    /// Sets the contact normal from its expression in the local-space of the first shape.
    ///
    /// The normal of every contact point already in this manifold is updated too.
    pub fn set_local_normal1(&mut self, local_n1: &UnitVector<Real>) {
        self.local_n1 = **local_n1;
        self.local_n2 = self.position2.inverse_transform_vector(&(self.position1 * -**local_n1));
        self.normal = self.position1 * **local_n1;

        for pt in &mut self.points {
            pt.normal = self.normal;
        }
    }

    /// Adds a contact point with the current manifold normal.
    ///
    /// `local_p1` is expressed in the local-space of the first shape and `local_p2_1` is
    /// the contact point on the second shape expressed in the local-space of the **first**
    /// shape. A negative penetration depth, caused by rounding errors, is clamped to zero.
    /// Non-finite depths are rejected.
    pub fn push(
        &mut self,
        local_p1: Point<Real>,
        local_p2_1: Point<Real>,
        fid1: FeatureId,
        fid2: FeatureId,
        penetration_depth: Real,
    ) {
        if !penetration_depth.is_finite() {
            log::debug!(
                "discarding a contact point with depth {penetration_depth} between {:?} and {:?}",
                self.shape1,
                self.shape2
            );
            return;
        }

        let local_p2 = self
            .position2
            .inverse_transform_point(&(self.position1 * local_p2_1));

        self.points.push(ContactPoint {
            local_p1,
            local_p2,
            normal: self.normal,
            penetration_depth: penetration_depth.max(0.0),
            fid1,
            fid2,
        });
    }

    /// The deepest contact point of this manifold.
    ///
    /// Depths within [`REDUCTION_DEPTH_TOLERANCE`] are considered equal, in which case the
    /// first point wins.
    pub fn deepest_point(&self) -> Option<&ContactPoint> {
        deepest_point_id(&self.points).map(|i| &self.points[i])
    }

    /// The largest penetration depth among the contact points, or zero if this
    /// manifold is empty.
    pub fn max_penetration_depth(&self) -> Real {
        self.points
            .iter()
            .fold(0.0, |acc: Real, pt| acc.max(pt.penetration_depth))
    }

    /// The world-space position of the `i`-th contact point on the first shape.
    pub fn world_point1(&self, i: usize) -> Option<Point<Real>> {
        self.points.get(i).map(|pt| self.position1 * pt.local_p1)
    }

    /// The world-space position of the `i`-th contact point on the second shape.
    pub fn world_point2(&self, i: usize) -> Option<Point<Real>> {
        self.points.get(i).map(|pt| self.position2 * pt.local_p2)
    }

    /// Swaps the roles of both shapes, their contact points, and negates the normal.
    pub fn flip(&mut self) {
        core::mem::swap(&mut self.shape1, &mut self.shape2);
        core::mem::swap(&mut self.position1, &mut self.position2);
        core::mem::swap(&mut self.local_n1, &mut self.local_n2);
        self.normal = -self.normal;

        for pt in &mut self.points {
            pt.flip();
        }
    }

    /// Reduces the number of contact points of this manifold to at most `max_points`.
    ///
    /// `max_points` is capped to [`MAX_MANIFOLD_POINTS`]. The points are selected in this
    /// order:
    /// 1. the deepest point (see [`Self::deepest_point`]),
    /// 2. the point farthest from the first one,
    /// 3. the point maximizing the area of the triangle formed with the first two,
    /// 4. the point maximizing the area added outside of that triangle.
    ///
    /// Ties are always resolved in favor of the point that comes first, so the result is
    /// deterministic. The kept points are stored in their selection order.
    pub fn reduce(&mut self, max_points: usize) {
        let max_points = max_points.min(MAX_MANIFOLD_POINTS);

        if self.points.len() <= max_points {
            return;
        }

        let selected = select_reduced_points(&self.points, max_points);
        self.points = selected.iter().map(|i| self.points[*i]).collect();
    }

    /// Checks that this manifold is well-formed:
    /// - it has at most `max_points` points,
    /// - every depth is finite and non-negative,
    /// - the normal is a unit vector whenever there is at least one point, and every
    ///   point shares it.
    pub fn validate(&self, max_points: usize) -> bool {
        if self.points.len() > max_points.min(MAX_MANIFOLD_POINTS) {
            return false;
        }

        if self.points.is_empty() {
            return true;
        }

        ulps_eq!(self.normal.norm(), 1.0, epsilon = 1.0e-4)
            && self.points.iter().all(|pt| {
                pt.penetration_depth.is_finite()
                    && pt.penetration_depth >= 0.0
                    && pt.normal == self.normal
            })
    }
}

fn deepest_point_id(points: &[ContactPoint]) -> Option<usize> {
    let max_depth = points
        .iter()
        .map(|pt| pt.penetration_depth)
        .reduce(Real::max)?;
    points
        .iter()
        .position(|pt| pt.penetration_depth >= max_depth - REDUCTION_DEPTH_TOLERANCE)
}

fn select_reduced_points(
    points: &[ContactPoint],
    max_points: usize,
) -> arrayvec::ArrayVec<usize, MAX_MANIFOLD_POINTS> {
    let mut selected = arrayvec::ArrayVec::new();

    let Some(i0) = deepest_point_id(points) else {
        return selected;
    };

    if max_points == 0 {
        return selected;
    }

    selected.push(i0);
    let p0 = points[i0].local_p1;

    if max_points >= 2 {
        let farthest = best_candidate(points, &selected, |pt| na::distance_squared(pt, &p0));
        if let Some((i1, _)) = farthest {
            selected.push(i1);
        }
    }

    if max_points >= 3 && selected.len() == 2 {
        let p1 = points[selected[1]].local_p1;
        let area = |pt: &Point<Real>| (p1 - p0).cross(&(pt - p0)).norm_squared();

        if let Some((i2, _)) = best_candidate(points, &selected, area) {
            selected.push(i2);
        }
    }

    if max_points >= 4 && selected.len() == 3 {
        let tri = [p0, points[selected[1]].local_p1, points[selected[2]].local_p1];
        let tri_normal = (tri[1] - tri[0]).cross(&(tri[2] - tri[0]));

        // Sum of the areas of the triangles formed by `pt` and each triangle edge it
        // lies outside of.
        let added_area = |pt: &Point<Real>| {
            (0..3)
                .map(|k| {
                    let (a, b) = (tri[k], tri[(k + 1) % 3]);
                    -(b - a).cross(&(pt - a)).dot(&tri_normal).min(0.0)
                })
                .sum::<Real>()
        };

        if let Some((i3, score)) = best_candidate(points, &selected, added_area) {
            if score > 0.0 {
                selected.push(i3);
            }
        }
    }

    selected
}

// Returns the first unselected point with the greatest score.
fn best_candidate(
    points: &[ContactPoint],
    selected: &[usize],
    score: impl Fn(&Point<Real>) -> Real,
) -> Option<(usize, Real)> {
    let mut best = None;
    let mut best_score = -Real::MAX;

    for (i, pt) in points.iter().enumerate() {
        if selected.contains(&i) {
            continue;
        }

        let s = score(&pt.local_p1);
        if s > best_score {
            best_score = s;
            best = Some(i);
        }
    }

    best.map(|i| (i, best_score))
}

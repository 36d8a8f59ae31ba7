use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::shape_error::{check_margin, check_scaling};
use crate::shape::{ShapeError, ShapeType, SupportMap};

/// A Ball shape.
///
/// Its core geometry is the solid ball of radius `radius` centered at the origin.
/// The margin, zero by default, inflates it further.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball {
    radius: Real,
    margin: Real,
    local_scaling: Vector<Real>,
}

impl Ball {
    /// Creates a new ball from its radius and a zero margin.
    #[inline]
    pub fn new(radius: Real) -> Result<Ball, ShapeError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(ShapeError::NegativeRadius(ShapeType::Ball, radius));
        }

        Ok(Ball {
            radius,
            margin: 0.0,
            local_scaling: Vector::repeat(1.0),
        })
    }

    /// Returns this ball with the given collision margin.
    pub fn with_margin(mut self, margin: Real) -> Result<Self, ShapeError> {
        self.set_margin(margin)?;
        Ok(self)
    }

    /// The radius of the core of this ball.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The radius of this ball, margin included.
    #[inline]
    pub fn total_radius(&self) -> Real {
        self.radius + self.margin
    }

    /// Sets the collision margin of this ball.
    pub fn set_margin(&mut self, margin: Real) -> Result<(), ShapeError> {
        self.margin = check_margin(margin)?;
        Ok(())
    }

    /// The scaling factors currently applied to this ball.
    #[inline]
    pub fn local_scaling(&self) -> Vector<Real> {
        self.local_scaling
    }

    /// Rescales this ball.
    ///
    /// A ball only supports uniform scaling: its radius follows the `x` factor.
    pub fn set_local_scaling(&mut self, scaling: Vector<Real>) -> Result<(), ShapeError> {
        check_scaling(&scaling)?;
        self.radius = self.radius / self.local_scaling.x * scaling.x;
        self.local_scaling = scaling;
        Ok(())
    }

    /// Tests if `point` lies strictly inside of the core of this ball.
    #[inline]
    pub fn test_point_inside(&self, point: &Point<Real>) -> bool {
        point.coords.norm_squared() < self.radius * self.radius
    }
}

impl SupportMap for Ball {
    #[inline]
    fn local_support_point_without_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        match dir.try_normalize(DEFAULT_EPSILON) {
            Some(n) => Point::from(n * self.radius),
            None => Point::origin(),
        }
    }

    #[inline]
    fn margin(&self) -> Real {
        self.margin
    }
}

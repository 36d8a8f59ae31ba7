use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::shape_error::{check_margin, check_scaling};
use crate::shape::{Segment, ShapeError, ShapeType, SupportMap};

#[derive(Copy, Clone, Debug, PartialEq)]
/// A capsule shape defined as a round segment.
pub struct Capsule {
    /// The axis and endpoint-centers of the capsule.
    segment: Segment,
    /// The radius of the capsule.
    radius: Real,
    margin: Real,
    local_scaling: Vector<Real>,
}

impl Capsule {
    /// Creates a new capsule aligned with the `x` axis and with the given half-height and radius.
    pub fn new_x(half_height: Real, radius: Real) -> Result<Self, ShapeError> {
        check_half_height(half_height)?;
        let b = Point::from(Vector::x() * half_height);
        Self::new(-b, b, radius)
    }

    /// Creates a new capsule aligned with the `y` axis and with the given half-height and radius.
    pub fn new_y(half_height: Real, radius: Real) -> Result<Self, ShapeError> {
        check_half_height(half_height)?;
        let b = Point::from(Vector::y() * half_height);
        Self::new(-b, b, radius)
    }

    /// Creates a new capsule aligned with the `z` axis and with the given half-height and radius.
    pub fn new_z(half_height: Real, radius: Real) -> Result<Self, ShapeError> {
        check_half_height(half_height)?;
        let b = Point::from(Vector::z() * half_height);
        Self::new(-b, b, radius)
    }

    /// Creates a new capsule defined as the segment between `a` and `b` and with the given `radius`.
    pub fn new(a: Point<Real>, b: Point<Real>, radius: Real) -> Result<Self, ShapeError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(ShapeError::NegativeRadius(ShapeType::Capsule, radius));
        }

        let half_height = na::distance(&a, &b) / 2.0;
        if !half_height.is_finite() {
            return Err(ShapeError::NegativeRadius(ShapeType::Capsule, half_height));
        }

        Ok(Self {
            segment: Segment::new(a, b),
            radius,
            margin: 0.0,
            local_scaling: Vector::repeat(1.0),
        })
    }

    /// Returns this capsule with the given collision margin.
    pub fn with_margin(mut self, margin: Real) -> Result<Self, ShapeError> {
        self.set_margin(margin)?;
        Ok(self)
    }

    /// The segment at the core of this capsule.
    #[inline]
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    /// The radius of the core of this capsule.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The radius of this capsule, margin included.
    #[inline]
    pub fn total_radius(&self) -> Real {
        self.radius + self.margin
    }

    /// The length of the segment at the core of this capsule.
    pub fn height(&self) -> Real {
        self.segment.length()
    }

    /// Half the length of the segment at the core of this capsule.
    pub fn half_height(&self) -> Real {
        self.height() / 2.0
    }

    /// Sets the collision margin of this capsule.
    pub fn set_margin(&mut self, margin: Real) -> Result<(), ShapeError> {
        self.margin = check_margin(margin)?;
        Ok(())
    }

    /// The scaling factors currently applied to this capsule.
    #[inline]
    pub fn local_scaling(&self) -> Vector<Real> {
        self.local_scaling
    }

    /// Rescales this capsule.
    ///
    /// The segment endpoints are scaled component-wise while the radius follows the `x` factor.
    pub fn set_local_scaling(&mut self, scaling: Vector<Real>) -> Result<(), ShapeError> {
        check_scaling(&scaling)?;
        let ratio = scaling.component_div(&self.local_scaling);
        self.segment.a.coords.component_mul_assign(&ratio);
        self.segment.b.coords.component_mul_assign(&ratio);
        self.radius *= ratio.x;
        self.local_scaling = scaling;
        Ok(())
    }

    /// Tests if `point` lies strictly inside of the core of this capsule.
    pub fn test_point_inside(&self, point: &Point<Real>) -> bool {
        let ab = self.segment.scaled_direction();
        let sqlen = ab.norm_squared();
        let t = if sqlen > DEFAULT_EPSILON {
            na::clamp((point - self.segment.a).dot(&ab) / sqlen, 0.0, 1.0)
        } else {
            0.0
        };
        let closest = self.segment.a + ab * t;
        na::distance_squared(&closest, point) < self.radius * self.radius
    }
}

fn check_half_height(half_height: Real) -> Result<(), ShapeError> {
    if half_height.is_finite() && half_height >= 0.0 {
        Ok(())
    } else {
        Err(ShapeError::NegativeRadius(ShapeType::Capsule, half_height))
    }
}

impl SupportMap for Capsule {
    fn local_support_point_without_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        let tip = if dir.dot(&self.segment.a.coords) > dir.dot(&self.segment.b.coords) {
            self.segment.a
        } else {
            self.segment.b
        };

        match dir.try_normalize(DEFAULT_EPSILON) {
            Some(n) => tip + n * self.radius,
            None => tip,
        }
    }

    #[inline]
    fn margin(&self) -> Real {
        self.margin
    }
}

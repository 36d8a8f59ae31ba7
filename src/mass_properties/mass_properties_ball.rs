use crate::mass_properties::MassProperties;
use crate::math::{AngVector, Point, Real, Vector};
use core::f32::consts::PI;

impl MassProperties {
    pub(crate) fn ball_volume_unit_angular_inertia(radius: Real) -> (Real, AngVector<Real>) {
        let volume = PI * radius * radius * radius * 4.0 / 3.0;
        let i = radius * radius * 2.0 / 5.0;

        (volume, Vector::repeat(i))
    }

    /// Computes the mass properties of a ball of the given `radius` and uniform `density`.
    ///
    /// The center of mass is the ball center and the inertia is `2/5 m r²` along every axis.
    pub fn from_ball(density: Real, radius: Real) -> Self {
        let (vol, unit_i) = Self::ball_volume_unit_angular_inertia(radius);
        let mass = vol * density;
        Self::new(Point::origin(), mass, unit_i * mass)
    }
}

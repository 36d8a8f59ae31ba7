use crate::mass_properties::MassProperties;
use crate::math::{AngVector, Point, Real, Rotation, Vector, DEFAULT_EPSILON};
use core::f32::consts::PI;

impl MassProperties {
    pub(crate) fn cylinder_y_volume_unit_inertia(
        half_height: Real,
        radius: Real,
    ) -> (Real, AngVector<Real>) {
        let volume = half_height * radius * radius * PI * 2.0;
        let sq_radius = radius * radius;
        let sq_height = half_height * half_height * 4.0;
        let off_principal = (sq_radius * 3.0 + sq_height) / 12.0;

        let inertia = Vector::new(off_principal, sq_radius / 2.0, off_principal);
        (volume, inertia)
    }

    /// Computes the mass properties of a capsule with the segment `[a, b]` as its
    /// axis and the given `radius`.
    ///
    /// The capsule is a cylinder with a hemisphere at each end. The principal
    /// inertia frame maps the local `y` axis to the capsule axis.
    pub fn from_capsule(density: Real, a: Point<Real>, b: Point<Real>, radius: Real) -> Self {
        let half_height = (b - a).norm() / 2.0;
        let (cyl_vol, cyl_unit_i) = Self::cylinder_y_volume_unit_inertia(half_height, radius);
        let (ball_vol, ball_unit_i) = Self::ball_volume_unit_angular_inertia(radius);
        let cap_vol = cyl_vol + ball_vol;
        let cap_mass = cap_vol * density;
        let mut cap_i = (cyl_unit_i * cyl_vol + ball_unit_i * ball_vol) * density;
        let local_com = na::center(&a, &b);

        // Parallel axis shift of the two hemispheres.
        let h = half_height * 2.0;
        let extra = (h * h * 0.25 + h * radius * 3.0 / 8.0) * ball_vol * density;
        cap_i.x += extra;
        cap_i.z += extra;

        let local_frame = (b - a)
            .try_normalize(DEFAULT_EPSILON)
            .and_then(|dir| Rotation::rotation_between(&Vector::y(), &dir))
            .unwrap_or_else(|| {
                if b.y < a.y {
                    Rotation::from_axis_angle(&Vector::x_axis(), PI)
                } else {
                    Rotation::identity()
                }
            });
        Self::with_principal_inertia_frame(local_com, cap_mass, cap_i, local_frame)
    }
}

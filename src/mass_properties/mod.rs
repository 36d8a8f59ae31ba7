//! Mass properties (mass, inertia, center-of-mass) of shapes.

pub use self::mass_properties::MassProperties;

mod mass_properties;
mod mass_properties_ball;
mod mass_properties_capsule;
mod mass_properties_convex_polyhedron;
mod mass_properties_cuboid;

/// Free functions for some special-cases of mass-properties computation.
pub mod details {
    pub use super::mass_properties_convex_polyhedron::convex_polyhedron_volume_and_center_of_mass;
}

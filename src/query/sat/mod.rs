//! Separating axis tests between polyhedra and other convex shapes.
//!
//! Two convex shapes are disjoint if and only if there exists an axis onto which their
//! projections do not overlap. For polyhedra, the candidate axes are the face normals
//! of both shapes and the cross products of their edges. The axis with the largest
//! separation gives the contact normal and, when negative, the penetration depth.
//!
//! All separations computed here are between the core shapes: margins must be
//! subtracted by the caller.

pub use self::sat_polyhedron_polyhedron::{
    polyhedron_edge_segment, polyhedron_polyhedron_find_local_separating_edge_twoway,
    polyhedron_segment_find_local_separating_edge_twoway, EdgeSeparation,
};
pub use self::sat_polyhedron_support_map::{
    polyhedron_support_map_compute_separation_wrt_local_face,
    polyhedron_support_map_find_local_separating_face,
};

mod sat_polyhedron_polyhedron;
mod sat_polyhedron_support_map;

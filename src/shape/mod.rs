//! Shapes supported by the narrow-phase.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::convex_polyhedron::ConvexPolyhedron;
pub use self::cuboid::Cuboid;
pub use self::feature_id::FeatureId;
pub use self::half_edge::{HalfEdge, HalfEdgeFace, HalfEdgeStructure, HalfEdgeVertex};
pub use self::polyhedral_shape::PolyhedralShape;
pub use self::segment::{Segment, SegmentPointLocation};
#[doc(inline)]
pub use self::shape::{ConvexShape, ShapeType};
pub use self::shape_error::ShapeError;
#[doc(inline)]
pub use self::support_map::SupportMap;

mod ball;
mod capsule;
mod convex_polyhedron;
mod cuboid;
mod feature_id;
pub mod half_edge;
mod polyhedral_shape;
mod segment;
mod shape;
pub(crate) mod shape_error;
mod support_map;

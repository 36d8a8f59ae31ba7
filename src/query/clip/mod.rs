//! Clipping of segments and convex polygons.

pub use self::clip_halfspace_polygon::{clip_halfspace_polygon, ClippedPolygon};
pub use self::clip_segment_segment::{clip_segment_segment, ClippingPoints};

mod clip_halfspace_polygon;
mod clip_segment_segment;

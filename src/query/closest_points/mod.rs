//! Closest points between the primitive features used by the contact algorithms.

pub use self::closest_points_point_segment::closest_point_on_segment;
pub use self::closest_points_segment_segment::closest_points_segment_segment_with_locations;

mod closest_points_point_segment;
mod closest_points_segment_segment;

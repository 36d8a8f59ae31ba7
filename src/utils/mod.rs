//! Various unsorted geometrical and logical operators.

pub use self::ccw_polygon_normal::ccw_polygon_normal;
pub use self::inv::inv;
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};

pub(crate) use self::consts::*;
pub use self::sorted_pair::SortedPair;
pub use self::wops::{WBasis, WSign};

mod ccw_polygon_normal;
mod consts;
pub mod hashmap;
mod inv;
mod point_cloud_support_point;
mod sorted_pair;
mod wops;

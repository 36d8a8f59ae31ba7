use crate::math::Real;

/// Inverts `val`, mapping zero to zero instead of infinity.
pub fn inv(val: Real) -> Real {
    if val == 0.0 {
        0.0
    } else {
        1.0 / val
    }
}

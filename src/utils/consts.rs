use crate::math::Real;

pub(crate) const COS_FRAC_PI_8: Real = 0.92387953251;
pub(crate) const SIN_FRAC_PI_8: Real = 0.38268343236;

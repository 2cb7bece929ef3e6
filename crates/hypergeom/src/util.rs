//! Common mathematical utility functions that didn't fit anywhere else.

use std::ops::Mul;

use crate::error::Result;
use crate::{Float, GeometryError};

/// Divides `lhs` by `rhs` if the reciprocal of `rhs` is finite; otherwise
/// returns `None`.
///
/// Nonzero divisors whose reciprocal overflows, such as subnormal numbers,
/// also return `None`.
pub fn try_div<T>(lhs: T, rhs: Float) -> Option<T::Output>
where
    T: Mul<Float>,
{
    let recip_rhs = rhs.recip();
    recip_rhs.is_finite().then(|| lhs * recip_rhs)
}

/// Divides `lhs` by `rhs`, returning [`GeometryError::DivisionByZero`] if the
/// reciprocal of `rhs` is not finite. Tiny nonzero divisors also return the
/// error; see [`try_div()`].
pub fn checked_div<T>(lhs: T, rhs: Float) -> Result<T::Output>
where
    T: Mul<Float>,
{
    try_div(lhs, rhs).ok_or(GeometryError::DivisionByZero)
}

/// Rounds `x` to `places` decimal places.
pub fn round_to(x: Float, places: i32) -> Float {
    let mult = Float::powi(10.0, places);
    let ret = (x * mult).round() / mult;
    // avoid printing `-0`
    if ret == 0.0 { 0.0 } else { ret }
}

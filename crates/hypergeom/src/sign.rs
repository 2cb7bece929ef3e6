//! Three-way `Sign` type, used to classify points into half-spaces.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Mul, MulAssign, Neg};

use num_traits::Signed;

use crate::Float;

/// Negative, zero, or positive.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Negative
    Neg,
    /// Zero
    #[default]
    Zero,
    /// Positive
    Pos,
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Neg => write!(f, "-"),
            Sign::Zero => write!(f, "0"),
            Sign::Pos => write!(f, "+"),
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Neg => Sign::Pos,
            Sign::Zero => Sign::Zero,
            Sign::Pos => Sign::Neg,
        }
    }
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Sign) -> Self::Output {
        match rhs {
            Sign::Neg => -self,
            Sign::Zero => Sign::Zero,
            Sign::Pos => self,
        }
    }
}
impl MulAssign for Sign {
    fn mul_assign(&mut self, rhs: Sign) {
        *self = *self * rhs;
    }
}

impl Mul<Sign> for Float {
    type Output = Float;

    fn mul(self, rhs: Sign) -> Self::Output {
        self * rhs.to_num::<Float>()
    }
}

impl PartialOrd for Sign {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Sign {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_num::<i8>().cmp(&other.to_num::<i8>())
    }
}

impl Sign {
    /// Returns the sign of `x`, using exact comparison with zero.
    ///
    /// Both `0.0` and `-0.0` are [`Sign::Zero`]. NaN is also classified as
    /// [`Sign::Zero`] because it is neither less than nor greater than zero.
    pub fn of<T: Signed + PartialOrd>(x: T) -> Self {
        match x.partial_cmp(&T::zero()) {
            Some(Ordering::Less) => Sign::Neg,
            Some(Ordering::Greater) => Sign::Pos,
            Some(Ordering::Equal) | None => Sign::Zero,
        }
    }

    /// Returns `-1`, `0`, or `1`.
    pub fn to_num<T: Signed>(self) -> T {
        match self {
            Sign::Neg => -T::one(),
            Sign::Zero => T::zero(),
            Sign::Pos => T::one(),
        }
    }
}

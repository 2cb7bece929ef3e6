//! Approximate comparison functions that automatically use [`EPSILON`].

pub use approx::RelativeEq;

use crate::{EPSILON, Float};

/// Compares two numbers, but considers them equal if they differ by at most
/// `EPSILON` times the larger magnitude.
///
/// This gives the same answer when both numbers are scaled by the same
/// factor. Handles infinity specially.
pub fn relative_eq<T: RelativeEq<Epsilon = Float>>(a: &T, b: &T) -> bool {
    // use native float equality to handle infinities
    a == b || approx::relative_eq!(a, b, epsilon = 0.0, max_relative = EPSILON)
}

/// Returns whether every item of `iter` is relatively equal to the first one.
/// Returns `true` for an empty iterator.
pub fn all_relative_eq<T: RelativeEq<Epsilon = Float>>(
    iter: impl IntoIterator<Item = T>,
) -> bool {
    let mut iter = iter.into_iter();
    match iter.next() {
        Some(first) => iter.all(|x| relative_eq(&first, &x)),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_eq() {
        assert!(relative_eq(&1.0, &(1.0 + EPSILON / 2.0)));
        assert!(!relative_eq(&1.0, &1.1));
        assert!(relative_eq(&1e-9, &(1e-9 * (1.0 + EPSILON / 2.0))));
        assert!(!relative_eq(&1e-9, &2e-9));
        assert!(relative_eq(&1e9, &(1e9 + 1.0)));
        assert!(!relative_eq(&1.0, &-1.0));
        assert!(relative_eq(&Float::INFINITY, &Float::INFINITY));
        assert!(!relative_eq(&Float::NAN, &Float::NAN));
    }

    #[test]
    fn test_all_relative_eq() {
        assert!(all_relative_eq([2.0, 2.0, 2.0 + EPSILON / 10.0]));
        assert!(!all_relative_eq([2.0, 2.0, 3.0]));
        assert!(all_relative_eq([1e-7, 1e-7, 1e-7 * (1.0 + EPSILON / 10.0)]));
        assert!(!all_relative_eq([1e-7, 2e-7]));
        assert!(all_relative_eq(std::iter::empty::<Float>()));
    }
}

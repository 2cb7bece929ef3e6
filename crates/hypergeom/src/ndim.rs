//! Number of dimensions trait.

use crate::GeometryError;
use crate::error::Result;

/// Number of dimensions.
pub trait Ndim {
    /// Returns the number of dimensions of the object.
    fn ndim(&self) -> usize;

    /// Returns an error unless `other` has the same number of dimensions as
    /// `self`.
    fn check_same_ndim(&self, other: &impl Ndim) -> Result<()> {
        GeometryError::check_ndim(self.ndim(), other.ndim())
    }
}

impl<T: Ndim> Ndim for &'_ T {
    fn ndim(&self) -> usize {
        (*self).ndim()
    }
}

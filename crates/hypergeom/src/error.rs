//! Errors produced by geometric operations.

use thiserror::Error;

/// Result type for fallible geometric operations.
pub type Result<T, E = GeometryError> = std::result::Result<T, E>;

/// Error produced by an invalid geometric operation.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GeometryError {
    /// Operand dimensions disagree.
    #[error("dimension mismatch: expected {expected} dimensions but found {found}")]
    DimensionMismatch {
        /// Number of dimensions required by the operation.
        expected: usize,
        /// Number of dimensions actually supplied.
        found: usize,
    },
    /// Component index is outside the vector.
    #[error("index {index} is out of range for a vector with {ndim} dimensions")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of dimensions of the vector.
        ndim: usize,
    },
    /// A dynamically-typed value was not the kind of object required.
    #[error("expected {expected}, found {found}")]
    InvalidArgumentType {
        /// Name of the required object type.
        expected: &'static str,
        /// Name of the object type actually supplied.
        found: &'static str,
    },
    /// Division by zero, such as normalizing a zero vector or measuring
    /// distance from a hyperplane with a zero weight vector.
    #[error("division by zero")]
    DivisionByZero,
    /// Hyperplane with no weights
    #[error("hyperplane must have at least one dimension")]
    ZeroDimensional,
}

impl GeometryError {
    /// Returns an error if `found` is not equal to `expected`.
    pub fn check_ndim(expected: usize, found: usize) -> Result<()> {
        match expected == found {
            true => Ok(()),
            false => Err(Self::DimensionMismatch { expected, found }),
        }
    }
}

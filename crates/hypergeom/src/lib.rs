//! N-dimensional vector and hyperplane primitives for analytic geometry.
//!
//! The core types are [`Vector`] and [`Hyperplane`]. All operations are pure
//! and report invalid input (such as mismatched dimensions) as a
//! [`GeometryError`] instead of producing a degraded result.
//!
//! ```
//! use hypergeom::prelude::*;
//!
//! let p1 = Hyperplane::new(vector![4.0, 5.0], -13.0)?;
//! let p2 = Hyperplane::new(vector![2.0, 2.5], -18.0)?;
//! assert!(p1.is_parallel_to(&p2)?);
//! let d = p1.distance_from_hyperplane(&p2)?.distance().unwrap_or_default();
//! hypergeom::assert_approx_eq!(d, 18.0 / 10.25_f64.sqrt() - 13.0 / 41.0_f64.sqrt());
//! # Ok::<(), GeometryError>(())
//! ```

pub use {approx, smallvec};

/// Floating-point type used for geometry.
pub type Float = f64;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.000001;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

#[macro_use]
mod vector;

pub mod approx_cmp;
pub mod error;
pub mod hyperplane;
pub mod ndim;
pub mod object;
pub mod render;
pub mod sign;
pub mod util;

#[cfg(test)]
mod tests;

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::error::{GeometryError, Result};
    pub use crate::hyperplane::*;
    pub use crate::ndim::Ndim;
    pub use crate::object::{Object, ParseObjectError};
    pub use crate::render::{Canvas, Color, DrawCommand, RecordingCanvas};
    pub use crate::sign::Sign;
    pub use crate::vector::*;
    pub use crate::{EPSILON, Float, vector};
}
pub use prelude::*;

//! N-dimensional vector math.

use std::fmt;
use std::ops::*;

use itertools::Itertools;
use smallvec::SmallVec;

use crate::error::Result;
use crate::render::{self, Canvas, Color};
use crate::{Float, GeometryError, Ndim, util};

/// Constructs an N-dimensional vector, using the same syntax as `vec![]`.
#[macro_export]
macro_rules! vector {
    [$($tok:tt)*] => {
        $crate::Vector($crate::smallvec::smallvec![$($tok)*])
    };
}

/// N-dimensional vector.
///
/// Unlike slices, binary operations never pad or truncate: both operands
/// must have the same number of dimensions.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Vector(pub SmallVec<[Float; 4]>);

impl Ndim for Vector {
    /// Returns the number of components in the vector.
    fn ndim(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}

macro_rules! impl_vector_ops {
    (impl for $type_name:ty) => {
        impl Neg for $type_name {
            type Output = Vector;

            fn neg(self) -> Self::Output {
                self.iter().map(|n| -n).collect()
            }
        }

        impl Mul<Float> for $type_name {
            type Output = Vector;

            fn mul(self, rhs: Float) -> Self::Output {
                self.iter().map(|x| x * rhs).collect()
            }
        }
        impl Div<Float> for $type_name {
            type Output = Vector;

            fn div(self, rhs: Float) -> Self::Output {
                self.iter().map(|x| x / rhs).collect()
            }
        }
    };
}
impl_vector_ops!(impl for Vector);
impl_vector_ops!(impl for &'_ Vector);

impl Index<usize> for Vector {
    type Output = Float;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Vector {
    /// Zero-dimensional empty vector.
    pub const EMPTY: Self = Self(SmallVec::new_const());

    /// Returns a zero vector.
    pub fn zero(ndim: usize) -> Self {
        vector![0.0; ndim]
    }

    /// Returns the components of the vector.
    pub fn as_slice(&self) -> &[Float] {
        &self.0
    }
    /// Returns an iterator over the components of the vector.
    pub fn iter(&self) -> impl '_ + ExactSizeIterator<Item = Float> + Clone {
        self.0.iter().copied()
    }

    /// Returns a component of the vector, or an error if `index` is out of
    /// range.
    pub fn get(&self, index: usize) -> Result<Float> {
        self.0
            .get(index)
            .copied()
            .ok_or(GeometryError::IndexOutOfRange {
                index,
                ndim: self.ndim(),
            })
    }

    /// Returns an iterator over the pairs of corresponding components of two
    /// vectors, or an error if they have different numbers of dimensions.
    pub fn zip<'a>(
        &'a self,
        other: &'a Vector,
    ) -> Result<impl 'a + Iterator<Item = (Float, Float)>> {
        self.check_same_ndim(other)?;
        Ok(std::iter::zip(self.iter(), other.iter()))
    }

    /// Returns the element-wise sum of two vectors.
    pub fn checked_add(&self, other: &Vector) -> Result<Vector> {
        Ok(self.zip(other)?.map(|(l, r)| l + r).collect())
    }
    /// Returns the element-wise difference of two vectors.
    pub fn checked_sub(&self, other: &Vector) -> Result<Vector> {
        Ok(self.zip(other)?.map(|(l, r)| l - r).collect())
    }

    /// Returns the dot product of this vector with another.
    pub fn dot(&self, other: &Vector) -> Result<Float> {
        Ok(self.zip(other)?.map(|(l, r)| l * r).sum())
    }

    /// Returns the squared magnitude of the vector.
    pub fn mag2(&self) -> Float {
        self.iter().map(|x| x * x).sum()
    }
    /// Returns the magnitude (Euclidean norm) of the vector.
    pub fn magnitude(&self) -> Float {
        self.mag2().sqrt()
    }

    /// Returns a copy of the vector scaled to magnitude 1.
    ///
    /// Returns [`GeometryError::DivisionByZero`] if the vector is zero.
    pub fn unit_vector(&self) -> Result<Vector> {
        util::checked_div(self, self.magnitude())
    }

    /// Returns the projection of the vector onto `other`, along with the
    /// ratio `r` such that the projection is `r * other`.
    ///
    /// Returns [`GeometryError::DivisionByZero`] if `other` is zero.
    pub fn projection_onto(&self, other: &Vector) -> Result<(Vector, Float)> {
        let ratio = util::checked_div(self.dot(other)?, other.mag2())?;
        Ok((other * ratio, ratio))
    }
    /// Returns the component of the vector that is perpendicular to `other`.
    ///
    /// Returns [`GeometryError::DivisionByZero`] if `other` is zero.
    pub fn rejection_from(&self, other: &Vector) -> Result<Vector> {
        let (projection, _ratio) = self.projection_onto(other)?;
        self.checked_sub(&projection)
    }

    /// Returns whether the dot product of the two vectors is exactly zero.
    pub fn is_perpendicular_to(&self, other: &Vector) -> Result<bool> {
        Ok(self.dot(other)? == 0.0)
    }

    /// Returns the components of a 2D vector.
    pub(crate) fn to_2d(&self) -> Result<[Float; 2]> {
        GeometryError::check_ndim(2, self.ndim())?;
        Ok([self[0], self[1]])
    }

    /// Draws the vector as an arrow on `canvas`, starting at `start` (or the
    /// origin if `start` is `None`), and then shows the legend.
    ///
    /// Both the vector and `start` must be 2D.
    pub fn plot_2d(
        &self,
        canvas: &mut impl Canvas,
        start: Option<&Vector>,
        label: Option<&str>,
        color: &Color,
    ) -> Result<()> {
        let vector = self.to_2d()?;
        let start = match start {
            Some(p) => p.to_2d()?,
            None => [0.0; 2],
        };
        let label = match label {
            Some(s) => s.to_owned(),
            None => render::default_label(vector),
        };
        canvas.draw_arrow(start, vector, &label, color);
        canvas.show_legend();
        Ok(())
    }
}

impl FromIterator<Float> for Vector {
    fn from_iter<T: IntoIterator<Item = Float>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Float>> for Vector {
    fn from(value: Vec<Float>) -> Self {
        Self(SmallVec::from_vec(value))
    }
}
impl From<&[Float]> for Vector {
    fn from(value: &[Float]) -> Self {
        Self(SmallVec::from_slice(value))
    }
}
impl<const N: usize> From<[Float; N]> for Vector {
    fn from(value: [Float; N]) -> Self {
        value.into_iter().collect()
    }
}

impl approx::AbsDiffEq for Vector {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        crate::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.ndim() == other.ndim()
            && std::iter::zip(self.iter(), other.iter()).all(|(l, r)| (l - r).abs() <= epsilon)
    }
}

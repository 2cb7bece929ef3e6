//! Hyperplanes in Euclidean space.

use std::fmt;
use std::ops::RangeInclusive;

use smallvec::SmallVec;

use crate::error::Result;
use crate::render::{self, Canvas, Color};
use crate::{Float, GeometryError, Ndim, Sign, Vector, approx_cmp, util};

/// Range of X values sampled by [`Hyperplane::plot_2d()`] by default.
pub const DEFAULT_PLOT_RANGE: RangeInclusive<i32> = 0..=10;

/// Hyperplane in Euclidean space, defined by the equation `w·x + c = 0` where
/// `w` is the weight (normal) vector and `c` is the offset.
///
/// The weight vector need not be normalized, and may even be zero, in which
/// case distance queries return [`GeometryError::DivisionByZero`].
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "HyperplaneFields")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperplane {
    /// Normal vector.
    weights: Vector,
    /// Constant term.
    offset: Float,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct HyperplaneFields {
    weights: Vector,
    #[serde(default)]
    offset: Float,
}
#[cfg(feature = "serde")]
impl TryFrom<HyperplaneFields> for Hyperplane {
    type Error = GeometryError;

    fn try_from(value: HyperplaneFields) -> Result<Self> {
        Self::new(value.weights, value.offset)
    }
}

/// Distance between two hyperplanes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PlaneDistance {
    /// The hyperplanes are parallel and separated by this distance.
    Parallel(Float),
    /// The hyperplanes are not parallel, so they intersect.
    NotParallel,
}

impl PlaneDistance {
    /// Returns the distance, or `None` if the hyperplanes are not parallel.
    pub fn distance(self) -> Option<Float> {
        match self {
            PlaneDistance::Parallel(d) => Some(d),
            PlaneDistance::NotParallel => None,
        }
    }
}

impl fmt::Display for PlaneDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaneDistance::Parallel(d) => d.fmt(f),
            PlaneDistance::NotParallel => write!(f, "not parallel"),
        }
    }
}

impl fmt::Display for Hyperplane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, w) in self.weights.iter().enumerate() {
            write!(f, "({})x{} + ", util::round_to(w, 2), i + 1)?;
        }
        write!(f, "{} = 0", util::round_to(self.offset, 2))
    }
}

impl Ndim for Hyperplane {
    /// Returns the number of dimensions of the space containing the
    /// hyperplane.
    fn ndim(&self) -> usize {
        self.weights.ndim()
    }
}

impl Hyperplane {
    /// Constructs a new hyperplane `weights·x + offset = 0`. Returns an error
    /// if `weights` is empty.
    pub fn new(weights: impl Into<Vector>, offset: Float) -> Result<Self> {
        let weights = weights.into();
        if weights.ndim() == 0 {
            return Err(GeometryError::ZeroDimensional);
        }
        Ok(Self { weights, offset })
    }
    /// Constructs a new hyperplane `weights·x = 0` through the origin.
    pub fn through_origin(weights: impl Into<Vector>) -> Result<Self> {
        Self::new(weights, 0.0)
    }

    /// Returns the weight (normal) vector of the hyperplane.
    pub fn weights(&self) -> &Vector {
        &self.weights
    }
    /// Returns the constant term of the hyperplane equation.
    pub fn offset(&self) -> Float {
        self.offset
    }

    /// Returns `w·p + c`.
    fn evaluate(&self, point: &Vector) -> Result<Float> {
        Ok(self.weights.dot(point)? + self.offset)
    }

    /// Returns the signed perpendicular distance of a point from the
    /// hyperplane. The distance is positive on the side that the weight vector
    /// points toward.
    pub fn distance_from_point(&self, point: &Vector) -> Result<Float> {
        util::checked_div(self.evaluate(point)?, self.weights.magnitude())
    }
    /// Returns the signed perpendicular distance of the origin from the
    /// hyperplane.
    pub fn distance_from_origin(&self) -> Result<Float> {
        self.distance_from_point(&Vector::zero(self.ndim()))
    }

    /// Returns which half-space contains `point`, or [`Sign::Zero`] if the
    /// point lies exactly on the hyperplane.
    pub fn check_halfspace(&self, point: &Vector) -> Result<Sign> {
        Ok(Sign::of(self.evaluate(point)?))
    }

    /// Returns whether the two hyperplanes are parallel, meaning that the
    /// ratio between corresponding weights is the same along every axis.
    /// Ratios are compared relative to their magnitude, so scaling either
    /// weight vector does not change the result.
    ///
    /// Axes where both weights are zero are ignored. Axes where only one
    /// weight is zero make the hyperplanes not parallel, as does a zero
    /// weight vector.
    pub fn is_parallel_to(&self, other: &Hyperplane) -> Result<bool> {
        Ok(self.parallel_orientation(other)?.is_some())
    }

    /// Returns the sign of the weight ratio between two parallel hyperplanes,
    /// or `None` if they are not parallel.
    fn parallel_orientation(&self, other: &Hyperplane) -> Result<Option<Sign>> {
        let mut ratios = SmallVec::<[Float; 4]>::new();
        for (axis, (a, b)) in self.weights.zip(&other.weights)?.enumerate() {
            match (a == 0.0, b == 0.0) {
                (true, true) => log::debug!("ignoring axis {axis} where both weights are zero"),
                (false, false) => ratios.push(a / b),
                _ => return Ok(None),
            }
        }
        let Some(&first) = ratios.first() else {
            return Ok(None);
        };
        Ok(approx_cmp::all_relative_eq(ratios).then_some(Sign::of(first)))
    }

    /// Returns the distance between two hyperplanes, or
    /// [`PlaneDistance::NotParallel`] if they are not parallel.
    ///
    /// Both hyperplanes are measured along `self`'s normal, so `other` is
    /// flipped first if its weight vector points the opposite way.
    pub fn distance_from_hyperplane(&self, other: &Hyperplane) -> Result<PlaneDistance> {
        let Some(orientation) = self.parallel_orientation(other)? else {
            return Ok(PlaneDistance::NotParallel);
        };

        // Measure both hyperplanes along `self`'s normal.
        let reference = Vector::zero(self.ndim());
        let self_side = self.check_halfspace(&reference)?;
        let other_side = other.check_halfspace(&reference)? * orientation;
        let self_distance = self.distance_from_origin()?;
        let other_distance = other.distance_from_origin()? * orientation;

        let distance = if self_side == other_side {
            log::trace!("origin is on the same side of both hyperplanes");
            (self_distance - other_distance).abs()
        } else {
            log::trace!("origin is between the hyperplanes");
            self_distance.abs() + other_distance.abs()
        };
        Ok(PlaneDistance::Parallel(distance))
    }

    /// Draws a 2D hyperplane (a line) on `canvas`, sampled at each integer X
    /// coordinate in `x_range`, along with its unit normal vector starting from
    /// the middle of the line.
    ///
    /// Vertical lines are sampled at each integer Y coordinate in `x_range`
    /// instead.
    pub fn plot_2d(&self, canvas: &mut impl Canvas, x_range: RangeInclusive<i32>) -> Result<()> {
        let [w1, w2] = self.weights.to_2d()?;
        let c = self.offset;
        let mid = (*x_range.start() as Float + *x_range.end() as Float) / 2.0;

        let (points, center): (Vec<[Float; 2]>, [Float; 2]) = if w2 != 0.0 {
            let y = |x: Float| -(w1 * x + c) / w2;
            let points = x_range.map(|x| [x as Float, y(x as Float)]).collect();
            (points, [mid, y(mid)])
        } else {
            let x = util::checked_div(-c, w1)?;
            let points = x_range.map(|y| [x, y as Float]).collect();
            (points, [x, mid])
        };
        canvas.draw_line(&points);

        let label = render::default_label([w1, w2]);
        self.weights.unit_vector()?.plot_2d(
            canvas,
            Some(&Vector::from(center)),
            Some(&label),
            &Color::default(),
        )
    }
}

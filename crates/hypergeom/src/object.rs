//! Dynamically-typed geometric objects, used when parsing or deserializing
//! input whose type is not known ahead of time.
//!
//! The syntax accepted by [`Object::from_str()`] is:
//!
//! - `v:1,2,3` for the vector `[1, 2, 3]`
//! - `h:4,5;-13` for the hyperplane `4x1 + 5x2 - 13 = 0` (the `;offset` part
//!   is optional and defaults to zero)

use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

use crate::{Float, GeometryError, Hyperplane, Vector};

/// Vector or hyperplane.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// Vector
    Vector(Vector),
    /// Hyperplane
    Hyperplane(Hyperplane),
}

impl Object {
    /// Returns the user-facing name of the object's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Vector(_) => "vector",
            Object::Hyperplane(_) => "hyperplane",
        }
    }
}

impl From<Vector> for Object {
    fn from(value: Vector) -> Self {
        Self::Vector(value)
    }
}
impl From<Hyperplane> for Object {
    fn from(value: Hyperplane) -> Self {
        Self::Hyperplane(value)
    }
}

impl TryFrom<Object> for Vector {
    type Error = GeometryError;

    fn try_from(value: Object) -> Result<Self, Self::Error> {
        match value {
            Object::Vector(v) => Ok(v),
            other => Err(GeometryError::InvalidArgumentType {
                expected: "vector",
                found: other.type_name(),
            }),
        }
    }
}
impl TryFrom<Object> for Hyperplane {
    type Error = GeometryError;

    fn try_from(value: Object) -> Result<Self, Self::Error> {
        match value {
            Object::Hyperplane(h) => Ok(h),
            other => Err(GeometryError::InvalidArgumentType {
                expected: "hyperplane",
                found: other.type_name(),
            }),
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Vector(v) => write!(f, "v:{}", v.iter().join(",")),
            Object::Hyperplane(h) => {
                write!(f, "h:{};{}", h.weights().iter().join(","), h.offset())
            }
        }
    }
}

/// Error produced when parsing an [`Object`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseObjectError {
    /// Missing or unknown type prefix
    #[error("expected `v:` or `h:` prefix in {0:?}")]
    UnknownPrefix(String),
    /// Invalid number
    #[error("{0}")]
    ParseFloat(#[from] ParseFloatError),
    /// Invalid geometry
    #[error("{0}")]
    Geometry(#[from] GeometryError),
}

impl FromStr for Object {
    type Err = ParseObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(coords) = s.strip_prefix("v:") {
            Ok(Object::Vector(parse_floats(coords)?))
        } else if let Some(rest) = s.strip_prefix("h:") {
            let (weights, offset) = match rest.split_once(';') {
                Some((weights, offset)) => (weights, offset.trim().parse::<Float>()?),
                None => (rest, 0.0),
            };
            Ok(Object::Hyperplane(Hyperplane::new(
                parse_floats(weights)?,
                offset,
            )?))
        } else {
            Err(ParseObjectError::UnknownPrefix(s.to_owned()))
        }
    }
}

fn parse_floats(s: &str) -> Result<Vector, ParseFloatError> {
    if s.trim().is_empty() {
        return Ok(Vector::EMPTY);
    }
    s.split(',').map(|x| x.trim().parse::<Float>()).collect()
}

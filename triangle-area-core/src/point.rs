use crate::Scalar;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

/// Point on a plane.
///
/// # Examples
/// ```
/// use triangle_area_core::prelude::*;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(2.0, 0.0);
/// assert_eq!((b - a).x(), 2.0);
/// assert_eq!(b * 2.0, Point::new(4.0, 0.0));
/// assert_eq!(Point::new(1.0, 0.0).cross(Point::new(0.0, 1.0)), 1.0);
/// assert_eq!(Point::new(1.5, -2.0).to_string(), "(1.5; -2)");
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: Scalar,
    y: Scalar,
}

impl Point {
    /// Create new point.
    ///
    /// # Arguments
    /// * `x` - X value.
    /// * `y` - Y value.
    #[inline]
    pub fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    /// X value.
    #[inline]
    pub fn x(self) -> Scalar {
        self.x
    }

    /// Y value.
    #[inline]
    pub fn y(self) -> Scalar {
        self.y
    }

    /// Returns 2D cross product (signed area of parallelogram spanned by both vectors).
    ///
    /// ```plain
    ///  other
    ///    ^
    ///    |  positive
    ///    *---> self
    ///       negative
    /// ```
    /// Positive when `other` lies counter-clockwise from `self`.
    ///
    /// # Arguments
    /// * `other` - Other vector.
    #[inline]
    pub fn cross(self, other: Self) -> Scalar {
        self.x * other.y - self.y * other.x
    }
}

impl From<(Scalar, Scalar)> for Point {
    fn from((x, y): (Scalar, Scalar)) -> Self {
        Self { x, y }
    }
}

impl From<[Scalar; 2]> for Point {
    fn from([x, y]: [Scalar; 2]) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}; {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<Scalar> for Point {
    type Output = Self;

    fn mul(self, other: Scalar) -> Self {
        Self {
            x: self.x * other,
            y: self.y * other,
        }
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

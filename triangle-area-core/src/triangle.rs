use crate::{point::Point, Scalar};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Triangle made of three points.
///
/// Vertices order affects only the labels used for display, area stays the same.
///
/// # Examples
/// ```
/// use triangle_area_core::prelude::*;
///
/// let triangle = Triangle::new(
///     Point::new(0.0, 0.0),
///     Point::new(4.0, 0.0),
///     Point::new(0.0, 3.0),
/// );
/// assert_eq!(triangle.area(), 6.0);
/// assert_eq!(triangle.to_string(), "Triangle [A(0; 0), B(4; 0), C(0; 3)]");
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    a: Point,
    b: Point,
    c: Point,
}

impl Triangle {
    /// Create new triangle.
    ///
    /// Any points are accepted, including collinear and coincident ones.
    ///
    /// # Arguments
    /// * `a` - First vertex.
    /// * `b` - Second vertex.
    /// * `c` - Third vertex.
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// First vertex.
    #[inline]
    pub fn a(&self) -> Point {
        self.a
    }

    /// Second vertex.
    #[inline]
    pub fn b(&self) -> Point {
        self.b
    }

    /// Third vertex.
    #[inline]
    pub fn c(&self) -> Point {
        self.c
    }

    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns doubled signed area using shoelace formula.
    ///
    /// Positive for counter-clockwise vertices, negative for clockwise ones
    /// and zero for collinear ones.
    pub fn signed_double_area(&self) -> Scalar {
        let Self { a, b, c } = *self;
        a.x() * (b.y() - c.y()) + b.x() * (c.y() - a.y()) + c.x() * (a.y() - b.y())
    }

    /// Returns area of the triangle; never negative.
    #[inline]
    pub fn area(&self) -> Scalar {
        0.5 * self.signed_double_area().abs()
    }
}

impl From<[Point; 3]> for Triangle {
    fn from([a, b, c]: [Point; 3]) -> Self {
        Self { a, b, c }
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle [A{}, B{}, C{}]", self.a, self.b, self.c)
    }
}

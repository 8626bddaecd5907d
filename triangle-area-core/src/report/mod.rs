pub mod settings;

use crate::{selection::find_largest, triangle::Triangle, Scalar};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error thrown during area report creation.
#[derive(Debug, Clone, PartialEq)]
pub enum AreaReportError {
    /// There are no triangles to report on.
    NoTriangles,
}

impl fmt::Display for AreaReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTriangles => write!(f, "there are no triangles to report on"),
        }
    }
}

impl std::error::Error for AreaReportError {}

/// Single triangle with its computed area.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Position of the triangle in input order, starting from 1.
    pub index: usize,
    pub triangle: Triangle,
    pub area: Scalar,
}

/// Areas of all triangles in input order along with the largest one.
///
/// # Examples
/// ```
/// use triangle_area_core::prelude::*;
///
/// let triangles = vec![
///     Triangle::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 3.0)),
///     Triangle::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0)),
/// ];
/// let report = AreaReport::new(&triangles).unwrap();
/// assert_eq!(report.entries().len(), 2);
/// assert_eq!(report.largest().index, 2);
/// assert_eq!(report.largest().area, 50.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaReport {
    entries: Vec<ReportEntry>,
    largest: ReportEntry,
}

impl AreaReport {
    /// Compute areas of given triangles and find the largest one.
    ///
    /// # Arguments
    /// * `triangles` - Triangles in input order; must not be empty.
    pub fn new(triangles: &[Triangle]) -> Result<Self, AreaReportError> {
        let entries = triangles
            .iter()
            .enumerate()
            .map(|(i, triangle)| ReportEntry {
                index: i + 1,
                triangle: *triangle,
                area: triangle.area(),
            })
            .collect::<Vec<_>>();
        let (index, _) = find_largest(triangles).ok_or(AreaReportError::NoTriangles)?;
        let largest = entries[index];
        Ok(Self { entries, largest })
    }

    /// Entries in input order.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Entry of the first triangle with the largest area.
    pub fn largest(&self) -> &ReportEntry {
        &self.largest
    }
}

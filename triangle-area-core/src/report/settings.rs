use crate::Scalar;
use serde::{Deserialize, Serialize};

/// Largest supported number of decimal places; `f64` carries no more significant digits.
pub const MAX_PRECISION: u16 = 17;

/// Settings of area report presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Number of decimal places of displayed areas, capped at [`MAX_PRECISION`].
    #[serde(default = "ReportSettings::default_precision")]
    pub precision: u16,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            precision: Self::default_precision(),
        }
    }
}

impl ReportSettings {
    fn default_precision() -> u16 {
        2
    }

    /// Format area with fixed number of decimal places.
    ///
    /// # Examples
    /// ```
    /// use triangle_area_core::prelude::*;
    ///
    /// let settings = ReportSettings::default();
    /// assert_eq!(settings.format_area(6.0), "6.00");
    /// assert_eq!(settings.format_area(12.3456), "12.35");
    /// ```
    pub fn format_area(&self, area: Scalar) -> String {
        let precision = self.precision.min(MAX_PRECISION);
        format!("{:.*}", usize::from(precision), area)
    }
}

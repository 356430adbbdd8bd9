//! Annotation text drawn around the sensor rectangle.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::geometry::SensorGeometry;

/// Shown in place of a dimension that is not known.
pub const UNKNOWN_DIMENSION: &str = "?";

/// Edge label, e.g. `4.8mm`. Uses the shortest form that round-trips.
#[must_use]
pub fn format_dimension_mm(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v}mm"),
        None => format!("{UNKNOWN_DIMENSION}mm"),
    }
}

/// Diagonal label with two decimals, e.g. `6.00mm`.
#[must_use]
pub fn format_diagonal_mm(value: f64) -> String {
    format!("{value:.2}mm")
}

/// Area label with two decimals, e.g. `S = 0.17cm²`.
#[must_use]
pub fn format_area_cm2(value: f64) -> String {
    format!("S = {value:.2}cm²")
}

/// The four labels of one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorLabels {
    pub width: String,
    pub height: String,
    pub diagonal: String,
    pub area: String,
}

impl SensorLabels {
    #[must_use]
    pub fn from_geometry(geometry: &SensorGeometry) -> Self {
        Self {
            width: format_dimension_mm(Some(geometry.width_mm)),
            height: format_dimension_mm(Some(geometry.height_mm)),
            diagonal: format_diagonal_mm(geometry.diagonal_length_mm),
            area: format_area_cm2(geometry.area_cm2),
        }
    }

    /// Labels for a sensor whose size could not be read.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            width: format_dimension_mm(None),
            height: format_dimension_mm(None),
            diagonal: String::new(),
            area: String::new(),
        }
    }

    /// Single-line summary for text-only surfaces.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{} × {}", self.width, self.height)];
        if !self.diagonal.is_empty() {
            parts.push(format!("diagonal {}", self.diagonal));
        }
        if !self.area.is_empty() {
            parts.push(self.area.clone());
        }
        parts.join(", ")
    }
}

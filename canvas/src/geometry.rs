//! Sensor geometry: physical millimeters to scaled display pixels.
//!
//! [`SensorGeometry::compute`] is the whole calculation. It is a pure function
//! of width, height and scale budget; every value the renderer needs is
//! derived here once and carried in an immutable record.
//!
//! No validation happens at this level. Zero, negative or non-finite inputs
//! flow through the arithmetic as NaN/Infinity. Callers that need a defined
//! boundary go through [`crate::input::SensorDimensions`].

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// Derived layout values for one sensor at one scale budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorGeometry {
    /// Physical sensor width in millimeters.
    pub width_mm: f64,
    /// Physical sensor height in millimeters.
    pub height_mm: f64,
    /// Pixel extent given to the longer side.
    pub scale_budget: f64,
    /// Rectangle width in display pixels.
    pub display_width: f64,
    /// Rectangle height in display pixels.
    pub display_height: f64,
    /// Corner-to-corner length of the physical sensor.
    pub diagonal_length_mm: f64,
    /// Angle between the diagonal and the horizontal edge, in degrees.
    pub diagonal_angle_deg: f64,
    /// Corner-to-corner length of the displayed rectangle, in pixels.
    pub diagonal_display_length: f64,
    /// Sensor area in square centimeters.
    pub area_cm2: f64,
}

impl SensorGeometry {
    /// Compute the display geometry for a `width_mm` x `height_mm` sensor whose
    /// longer side is drawn `scale_budget` pixels long.
    #[must_use]
    pub fn compute(width_mm: f64, height_mm: f64, scale_budget: f64) -> Self {
        let axis_x_ratio = if width_mm > height_mm { width_mm / height_mm } else { 1.0 };
        let axis_y_ratio = if height_mm > width_mm { height_mm / width_mm } else { 1.0 };
        let dominant_ratio = axis_x_ratio.max(axis_y_ratio);

        let display_width = scale_budget * axis_x_ratio / dominant_ratio;
        let display_height = scale_budget * axis_y_ratio / dominant_ratio;

        Self {
            width_mm,
            height_mm,
            scale_budget,
            display_width,
            display_height,
            diagonal_length_mm: (width_mm * width_mm + height_mm * height_mm).sqrt(),
            diagonal_angle_deg: (height_mm / width_mm).atan().to_degrees(),
            // Equal to the inverse-ratio form sqrt((s/ax)^2 + (s/ay)^2) for any
            // positive input.
            diagonal_display_length: (display_width * display_width + display_height * display_height).sqrt(),
            area_cm2: width_mm * height_mm / 100.0,
        }
    }

    /// Diagonal angle in radians, for canvas rotation.
    #[must_use]
    pub fn diagonal_angle_rad(&self) -> f64 {
        self.diagonal_angle_deg.to_radians()
    }

    /// Whether every derived value is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [
            self.display_width,
            self.display_height,
            self.diagonal_length_mm,
            self.diagonal_angle_deg,
            self.diagonal_display_length,
            self.area_cm2,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

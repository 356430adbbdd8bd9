//! Parse-and-validate boundary between user-facing strings and geometry.
//!
//! Form fields hand over whatever the user typed. Nothing reaches
//! [`SensorGeometry::compute`] until it has been parsed into a finite,
//! strictly positive number here.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::fmt;

use crate::geometry::SensorGeometry;

/// The value a parse or validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Sensor width in millimeters.
    Width,
    /// Sensor height in millimeters.
    Height,
    /// Display scale budget in pixels.
    ScaleBudget,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::ScaleBudget => "scale budget",
        })
    }
}

/// Rejected sensor input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    /// The field was blank.
    #[error("{field} is required")]
    Empty { field: Field },

    /// The field did not contain a decimal number.
    #[error("{field} is not a number: {raw:?}")]
    NotANumber { field: Field, raw: String },

    /// The number was zero, negative or not finite.
    #[error("{field} must be a positive number, got {value}")]
    InvalidDimension { field: Field, value: f64 },
}

impl InputError {
    /// The field the error refers to.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::Empty { field } | Self::NotANumber { field, .. } | Self::InvalidDimension { field, .. } => *field,
        }
    }
}

/// Check that `value` is usable as a dimension.
///
/// # Errors
///
/// Returns [`InputError::InvalidDimension`] for zero, negative, NaN or infinite values.
pub fn validate_dimension(field: Field, value: f64) -> Result<f64, InputError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(InputError::InvalidDimension { field, value })
    }
}

/// Parse a raw field value into a validated dimension.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// [`InputError::Empty`] for a blank field, [`InputError::NotANumber`] when the
/// text is not a decimal number, [`InputError::InvalidDimension`] when the
/// number is not strictly positive and finite.
pub fn parse_dimension(field: Field, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty { field });
    }
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber { field, raw: trimmed.to_owned() })?;
    validate_dimension(field, value)
}

/// Validated sensor size plus the scale budget it will be drawn at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorDimensions {
    width_mm: f64,
    height_mm: f64,
    scale_budget: f64,
}

impl SensorDimensions {
    /// Validate all three values.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidDimension`] for the first value that is not
    /// strictly positive and finite, checked in width, height, scale order.
    pub fn new(width_mm: f64, height_mm: f64, scale_budget: f64) -> Result<Self, InputError> {
        Ok(Self {
            width_mm: validate_dimension(Field::Width, width_mm)?,
            height_mm: validate_dimension(Field::Height, height_mm)?,
            scale_budget: validate_dimension(Field::ScaleBudget, scale_budget)?,
        })
    }

    #[must_use]
    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    #[must_use]
    pub fn height_mm(&self) -> f64 {
        self.height_mm
    }

    #[must_use]
    pub fn scale_budget(&self) -> f64 {
        self.scale_budget
    }

    /// Run the geometry calculation for these dimensions.
    #[must_use]
    pub fn geometry(&self) -> SensorGeometry {
        SensorGeometry::compute(self.width_mm, self.height_mm, self.scale_budget)
    }
}

/// Sensor size exactly as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SensorInput {
    pub width: String,
    pub height: String,
}

impl SensorInput {
    #[must_use]
    pub fn new(width: impl Into<String>, height: impl Into<String>) -> Self {
        Self { width: width.into(), height: height.into() }
    }

    /// Parse both fields, width first.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] encountered.
    pub fn parse(&self, scale_budget: f64) -> Result<SensorDimensions, InputError> {
        let width_mm = parse_dimension(Field::Width, &self.width)?;
        let height_mm = parse_dimension(Field::Height, &self.height)?;
        SensorDimensions::new(width_mm, height_mm, scale_budget)
    }
}

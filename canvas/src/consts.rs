//! Shared numeric and style constants for the sensor canvas.

// ── Layout ──────────────────────────────────────────────────────

/// Pixel extent of the longer sensor side when the page does not choose one.
pub const DEFAULT_SCALE_BUDGET_PX: f64 = 200.0;

/// Space around the rectangle reserved for the edge labels, in CSS pixels.
pub const CANVAS_MARGIN_PX: f64 = 32.0;

/// Distance between an edge and its label, in CSS pixels.
pub const LABEL_GAP_PX: f64 = 6.0;

/// Inset of the area label from the rectangle's bottom-left corner.
pub const AREA_LABEL_INSET_PX: f64 = 4.0;

// ── Style ───────────────────────────────────────────────────────

/// Rectangle border and diagonal stroke width, in CSS pixels.
pub const STROKE_WIDTH_PX: f64 = 3.0;

/// Sensor body fill.
pub const SENSOR_FILL: &str = "#f0f0f0";

/// Border, diagonal and label color.
pub const INK: &str = "#1f1a17";

/// Label font.
pub const LABEL_FONT: &str = "14px sans-serif";

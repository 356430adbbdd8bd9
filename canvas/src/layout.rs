//! Placement of the sensor rectangle, diagonal and labels inside a viewport.
//!
//! All coordinates are CSS pixels with the origin at the top-left of the
//! canvas. The device pixel ratio is applied later by the renderer.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::f64::consts::FRAC_PI_2;

use crate::consts::{AREA_LABEL_INSET_PX, CANVAS_MARGIN_PX, LABEL_GAP_PX};
use crate::geometry::SensorGeometry;

/// A point in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Halfway point between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self { x: (self.x + other.x) * 0.5, y: (self.y + other.y) * 0.5 }
    }
}

/// Horizontal text alignment relative to a label's anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    /// Value for the canvas `textAlign` property.
    #[must_use]
    pub fn as_canvas_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
        }
    }
}

/// Vertical text alignment relative to a label's anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Bottom,
}

impl TextBaseline {
    /// Value for the canvas `textBaseline` property.
    #[must_use]
    pub fn as_canvas_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// Where and how one label is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub anchor: Point,
    /// Clockwise rotation around the anchor, in radians.
    pub rotation_rad: f64,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// Screen placement of every element of the visualization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorLayout {
    /// Top-left corner of the rectangle.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub diagonal_start: Point,
    pub diagonal_end: Point,
    pub width_label: LabelPlacement,
    pub height_label: LabelPlacement,
    pub diagonal_label: LabelPlacement,
    pub area_label: LabelPlacement,
}

impl SensorLayout {
    /// Center `geometry`'s rectangle in a `viewport_width` x `viewport_height` canvas.
    #[must_use]
    pub fn new(geometry: &SensorGeometry, viewport_width: f64, viewport_height: f64) -> Self {
        let width = geometry.display_width;
        let height = geometry.display_height;
        let origin = Point::new((viewport_width - width) * 0.5, (viewport_height - height) * 0.5);

        let diagonal_start = origin;
        let diagonal_end = Point::new(origin.x + width, origin.y + height);

        Self {
            origin,
            width,
            height,
            diagonal_start,
            diagonal_end,
            width_label: LabelPlacement {
                anchor: Point::new(origin.x + width * 0.5, origin.y - LABEL_GAP_PX),
                rotation_rad: 0.0,
                align: TextAlign::Center,
                baseline: TextBaseline::Bottom,
            },
            height_label: LabelPlacement {
                anchor: Point::new(origin.x - LABEL_GAP_PX, origin.y + height * 0.5),
                rotation_rad: -FRAC_PI_2,
                align: TextAlign::Center,
                baseline: TextBaseline::Bottom,
            },
            diagonal_label: LabelPlacement {
                anchor: diagonal_start.midpoint(diagonal_end),
                rotation_rad: geometry.diagonal_angle_rad(),
                align: TextAlign::Center,
                baseline: TextBaseline::Top,
            },
            area_label: LabelPlacement {
                anchor: Point::new(origin.x + AREA_LABEL_INSET_PX, origin.y + height - AREA_LABEL_INSET_PX),
                rotation_rad: 0.0,
                align: TextAlign::Left,
                baseline: TextBaseline::Bottom,
            },
        }
    }
}

/// Square canvas extent that fits a rectangle of `scale_budget` plus label margins.
#[must_use]
pub fn required_canvas_size(scale_budget: f64) -> f64 {
    scale_budget + 2.0 * CANVAS_MARGIN_PX
}

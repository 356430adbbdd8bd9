#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn default_layout() -> SensorLayout {
    let geometry = SensorGeometry::compute(4.8, 3.6, 200.0);
    SensorLayout::new(&geometry, 264.0, 264.0)
}

// --- Point ---

#[test]
fn point_midpoint() {
    let m = Point::new(0.0, 0.0).midpoint(Point::new(10.0, -4.0));
    assert_eq!(m, Point::new(5.0, -2.0));
}

// --- Rectangle ---

#[test]
fn rectangle_is_centered_in_viewport() {
    let layout = default_layout();
    assert!(point_approx_eq(layout.origin, Point::new(32.0, 57.0)));
    assert!(approx_eq(layout.width, 200.0));
    assert!(approx_eq(layout.height, 150.0));
}

#[test]
fn rectangle_centering_uses_both_viewport_axes() {
    let geometry = SensorGeometry::compute(10.0, 10.0, 100.0);
    let layout = SensorLayout::new(&geometry, 300.0, 200.0);
    assert!(point_approx_eq(layout.origin, Point::new(100.0, 50.0)));
}

#[test]
fn rectangle_fits_required_canvas_with_margin() {
    let size = required_canvas_size(200.0);
    assert_eq!(size, 264.0);
    let layout = SensorLayout::new(&SensorGeometry::compute(36.0, 24.0, 200.0), size, size);
    assert!(layout.origin.x >= CANVAS_MARGIN_PX - EPSILON);
    assert!(layout.origin.y >= CANVAS_MARGIN_PX - EPSILON);
    assert!(layout.origin.x + layout.width <= size - CANVAS_MARGIN_PX + EPSILON);
}

// --- Diagonal ---

#[test]
fn diagonal_runs_corner_to_corner() {
    let layout = default_layout();
    assert_eq!(layout.diagonal_start, layout.origin);
    assert!(point_approx_eq(layout.diagonal_end, Point::new(232.0, 207.0)));
}

#[test]
fn diagonal_length_matches_geometry() {
    for (w, h) in [(4.8, 3.6), (3.6, 4.8), (36.0, 24.0), (1.0, 1.0)] {
        let geometry = SensorGeometry::compute(w, h, 200.0);
        let layout = SensorLayout::new(&geometry, 400.0, 400.0);
        let drawn = (layout.diagonal_end.x - layout.diagonal_start.x)
            .hypot(layout.diagonal_end.y - layout.diagonal_start.y);
        assert!(approx_eq(drawn, geometry.diagonal_display_length));
    }
}

#[test]
fn diagonal_direction_matches_angle() {
    let geometry = SensorGeometry::compute(36.0, 24.0, 300.0);
    let layout = SensorLayout::new(&geometry, 400.0, 400.0);
    let dx = layout.diagonal_end.x - layout.diagonal_start.x;
    let dy = layout.diagonal_end.y - layout.diagonal_start.y;
    assert!(approx_eq(dy.atan2(dx), geometry.diagonal_angle_rad()));
}

// --- Labels ---

#[test]
fn width_label_sits_above_top_edge_center() {
    let label = default_layout().width_label;
    assert!(point_approx_eq(label.anchor, Point::new(132.0, 57.0 - LABEL_GAP_PX)));
    assert_eq!(label.rotation_rad, 0.0);
    assert_eq!(label.align, TextAlign::Center);
    assert_eq!(label.baseline, TextBaseline::Bottom);
}

#[test]
fn height_label_is_rotated_left_of_left_edge() {
    let label = default_layout().height_label;
    assert!(point_approx_eq(label.anchor, Point::new(32.0 - LABEL_GAP_PX, 132.0)));
    assert!(approx_eq(label.rotation_rad, -FRAC_PI_2));
}

#[test]
fn diagonal_label_follows_the_diagonal() {
    let layout = default_layout();
    let label = layout.diagonal_label;
    assert!(point_approx_eq(label.anchor, Point::new(132.0, 132.0)));
    assert!(approx_eq(label.rotation_rad, (150.0_f64 / 200.0).atan()));
    assert_eq!(label.baseline, TextBaseline::Top);
}

#[test]
fn area_label_sits_inside_bottom_left_corner() {
    let layout = default_layout();
    let label = layout.area_label;
    assert!(point_approx_eq(
        label.anchor,
        Point::new(32.0 + AREA_LABEL_INSET_PX, 207.0 - AREA_LABEL_INSET_PX)
    ));
    assert_eq!(label.align, TextAlign::Left);
}

#[test]
fn canvas_alignment_strings() {
    assert_eq!(TextAlign::Left.as_canvas_str(), "left");
    assert_eq!(TextAlign::Center.as_canvas_str(), "center");
    assert_eq!(TextBaseline::Top.as_canvas_str(), "top");
    assert_eq!(TextBaseline::Bottom.as_canvas_str(), "bottom");
}

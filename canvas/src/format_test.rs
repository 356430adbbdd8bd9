use super::*;

#[test]
fn dimension_uses_shortest_form() {
    assert_eq!(format_dimension_mm(Some(4.8)), "4.8mm");
    assert_eq!(format_dimension_mm(Some(36.0)), "36mm");
    assert_eq!(format_dimension_mm(Some(6.17)), "6.17mm");
}

#[test]
fn unknown_dimension_is_question_mark() {
    assert_eq!(format_dimension_mm(None), "?mm");
}

#[test]
fn diagonal_has_two_decimals() {
    assert_eq!(format_diagonal_mm(6.0), "6.00mm");
    assert_eq!(format_diagonal_mm(43.266_615), "43.27mm");
}

#[test]
fn area_has_two_decimals_and_prefix() {
    assert_eq!(format_area_cm2(0.1728), "S = 0.17cm²");
    assert_eq!(format_area_cm2(8.64), "S = 8.64cm²");
}

#[test]
fn labels_from_geometry() {
    let labels = SensorLabels::from_geometry(&SensorGeometry::compute(4.8, 3.6, 200.0));
    assert_eq!(labels.width, "4.8mm");
    assert_eq!(labels.height, "3.6mm");
    assert_eq!(labels.diagonal, "6.00mm");
    assert_eq!(labels.area, "S = 0.17cm²");
}

#[test]
fn labels_do_not_depend_on_scale_budget() {
    let small = SensorLabels::from_geometry(&SensorGeometry::compute(36.0, 24.0, 50.0));
    let large = SensorLabels::from_geometry(&SensorGeometry::compute(36.0, 24.0, 500.0));
    assert_eq!(small, large);
}

#[test]
fn placeholder_labels() {
    let labels = SensorLabels::placeholder();
    assert_eq!(labels.width, "?mm");
    assert_eq!(labels.height, "?mm");
    assert!(labels.diagonal.is_empty());
    assert!(labels.area.is_empty());
}

#[test]
fn summary_joins_available_parts() {
    let labels = SensorLabels::from_geometry(&SensorGeometry::compute(36.0, 24.0, 300.0));
    assert_eq!(labels.summary(), "36mm × 24mm, diagonal 43.27mm, S = 8.64cm²");
    assert_eq!(SensorLabels::placeholder().summary(), "?mm × ?mm");
}

use metronique_test_support::fixtures::{DESKTOP_VIEWPORT, PHONE_VIEWPORT};
use metronique_ui::core::config::UiConfig;
use metronique_ui::core::geometry::{Rect, Size, Viewport};
use metronique_ui::core::placement::{Placement, VerticalPlacement};
use metronique_ui::core::positioner::{place_dropdown, place_tooltip, reposition_dropdown};

fn viewport((width, height): (f64, f64)) -> Viewport {
    Viewport { width, height }
}

const fn size(width: f64, height: f64) -> Size {
    Size { width, height }
}

#[test]
fn dropdown_opens_below_and_left_aligned_when_it_fits() {
    let metrics = UiConfig::default().dropdown_metrics();
    let trigger = Rect::from_origin(100.0, 100.0, 120.0, 40.0);

    let layout = place_dropdown(
        &trigger,
        size(300.0, 200.0),
        viewport(DESKTOP_VIEWPORT),
        metrics,
    );

    assert_eq!(layout.placement, VerticalPlacement::Bottom);
    assert!((layout.coordinate.top - 148.0).abs() < f64::EPSILON);
    assert!((layout.coordinate.left - 100.0).abs() < f64::EPSILON);
}

#[test]
fn dropdown_flips_above_a_trigger_near_the_bottom_edge() {
    let metrics = UiConfig::default().dropdown_metrics();
    let trigger = Rect::from_origin(100.0, 740.0, 120.0, 40.0);

    let layout = place_dropdown(
        &trigger,
        size(300.0, 300.0),
        viewport(DESKTOP_VIEWPORT),
        metrics,
    );

    assert_eq!(layout.placement, VerticalPlacement::Top);
    assert!((layout.coordinate.top - 432.0).abs() < f64::EPSILON);
}

#[test]
fn wide_dropdown_is_pulled_back_inside_the_right_edge() {
    let metrics = UiConfig::default().dropdown_metrics();
    let trigger = Rect::from_origin(900.0, 100.0, 120.0, 40.0);

    let layout = place_dropdown(
        &trigger,
        size(500.0, 200.0),
        viewport(DESKTOP_VIEWPORT),
        metrics,
    );

    let right_edge = layout.coordinate.left + 500.0;
    assert!((right_edge - (DESKTOP_VIEWPORT.0 - metrics.padding)).abs() < f64::EPSILON);
}

#[test]
fn dropdown_wider_than_a_phone_sticks_to_the_left_padding() {
    let metrics = UiConfig::default().dropdown_metrics();
    let trigger = Rect::from_origin(40.0, 100.0, 120.0, 40.0);

    let layout = place_dropdown(
        &trigger,
        size(420.0, 200.0),
        viewport(PHONE_VIEWPORT),
        metrics,
    );

    assert!((layout.coordinate.left - metrics.padding).abs() < f64::EPSILON);
}

#[test]
fn reposition_keeps_previous_layout_without_measurements() {
    let metrics = UiConfig::default().dropdown_metrics();
    let trigger = Rect::from_origin(100.0, 100.0, 120.0, 40.0);
    let current = place_dropdown(
        &trigger,
        size(300.0, 200.0),
        viewport(DESKTOP_VIEWPORT),
        metrics,
    );

    let moved = Rect::from_origin(400.0, 300.0, 120.0, 40.0);
    let unchanged = reposition_dropdown(
        current,
        Some(moved),
        None,
        viewport(DESKTOP_VIEWPORT),
        metrics,
    );
    assert_eq!(unchanged, current);

    let updated = reposition_dropdown(
        current,
        Some(moved),
        Some(size(300.0, 200.0)),
        viewport(DESKTOP_VIEWPORT),
        metrics,
    );
    assert!((updated.coordinate.left - 400.0).abs() < f64::EPSILON);
}

#[test]
fn tooltip_above_the_top_edge_flips_below_the_target() {
    let metrics = UiConfig::default().tooltip_metrics();
    let target = Rect::from_origin(600.0, 4.0, 80.0, 30.0);

    let layout = place_tooltip(
        &target,
        size(120.0, 40.0),
        Placement::Top,
        viewport(DESKTOP_VIEWPORT),
        metrics,
    );

    assert_eq!(layout.placement, Placement::Bottom);
    assert!((layout.coordinate.top - 42.0).abs() < f64::EPSILON);
    assert!((layout.coordinate.left - 580.0).abs() < f64::EPSILON);
}

#[test]
fn tooltip_stays_on_the_requested_side_when_it_fits() {
    let metrics = UiConfig::default().tooltip_metrics();
    let target = Rect::from_origin(600.0, 400.0, 80.0, 30.0);

    for placement in Placement::all() {
        let layout = place_tooltip(
            &target,
            size(120.0, 40.0),
            placement,
            viewport(DESKTOP_VIEWPORT),
            metrics,
        );
        assert_eq!(layout.placement, placement, "{}", placement.as_str());
        assert!(layout.coordinate.top >= metrics.padding);
        assert!(layout.coordinate.left >= metrics.padding);
    }
}

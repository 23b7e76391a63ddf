//! Viewport-aware placement arithmetic for dropdowns and tooltips.
//!
//! # Design
//! - Pure functions over measured rects so every edge case is covered by native tests.
//! - Missing measurements never move an overlay; callers keep the previous coordinate.

use crate::core::geometry::{Coordinate, Rect, Size, Viewport};
use crate::core::placement::{Placement, Side, VerticalPlacement};

/// Spacing inputs shared by every overlay kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayMetrics {
    /// Distance between the trigger and the overlay.
    pub gap: f64,
    /// Minimum distance kept from the viewport edges.
    pub padding: f64,
}

impl OverlayMetrics {
    /// Defaults for date/time dropdown panels.
    pub const DROPDOWN: Self = Self {
        gap: 8.0,
        padding: 16.0,
    };

    /// Defaults for tooltips.
    pub const TOOLTIP: Self = Self {
        gap: 8.0,
        padding: 8.0,
    };
}

/// Resolved dropdown position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DropdownLayout {
    /// Fixed-position coordinate of the panel.
    pub coordinate: Coordinate,
    /// Side of the trigger the panel opened on.
    pub placement: VerticalPlacement,
}

/// Place a dropdown panel below its trigger, flipping above when the space below is too short.
#[must_use]
pub fn place_dropdown(
    trigger: &Rect,
    overlay: Size,
    viewport: Viewport,
    metrics: OverlayMetrics,
) -> DropdownLayout {
    let mut top = trigger.bottom + metrics.gap;
    let mut left = trigger.left;
    let mut placement = VerticalPlacement::Bottom;

    let space_below = viewport.height - trigger.bottom;
    if space_below < overlay.height && trigger.top > overlay.height {
        top = trigger.top - overlay.height - metrics.gap;
        placement = VerticalPlacement::Top;
    }

    if left + overlay.width > viewport.width {
        left = viewport.width - overlay.width - metrics.padding;
        if left < 0.0 {
            left = metrics.padding;
        }
    }

    DropdownLayout {
        coordinate: Coordinate {
            top: top.max(0.0),
            left: left.max(0.0),
        },
        placement,
    }
}

/// Recompute a dropdown layout, keeping `current` when either measurement is unavailable.
#[must_use]
pub fn reposition_dropdown(
    current: DropdownLayout,
    trigger: Option<Rect>,
    overlay: Option<Size>,
    viewport: Viewport,
    metrics: OverlayMetrics,
) -> DropdownLayout {
    match (trigger, overlay) {
        (Some(trigger), Some(overlay)) => place_dropdown(&trigger, overlay, viewport, metrics),
        _ => current,
    }
}

/// Resolved tooltip position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TooltipLayout {
    /// Fixed-position coordinate of the tooltip.
    pub coordinate: Coordinate,
    /// Placement after any flip.
    pub placement: Placement,
}

fn anchor(target: &Rect, size: Size, placement: Placement, gap: f64) -> Coordinate {
    let above = target.top - size.height - gap;
    let below = target.bottom + gap;
    let before = target.left - size.width - gap;
    let after = target.right + gap;
    let centered_left = target.center_x() - size.width / 2.0;
    let centered_top = target.center_y() - size.height / 2.0;

    let (top, left) = match placement {
        Placement::Top => (above, centered_left),
        Placement::TopLeft => (above, target.left),
        Placement::TopRight => (above, target.right - size.width),
        Placement::Bottom => (below, centered_left),
        Placement::BottomLeft => (below, target.left),
        Placement::BottomRight => (below, target.right - size.width),
        Placement::Left => (centered_top, before),
        Placement::LeftTop => (target.top, before),
        Placement::LeftBottom => (target.bottom - size.height, before),
        Placement::Right => (centered_top, after),
        Placement::RightTop => (target.top, after),
        Placement::RightBottom => (target.bottom - size.height, after),
    };
    Coordinate { top, left }
}

fn overflows_main_axis(
    coordinate: Coordinate,
    size: Size,
    side: Side,
    viewport: Viewport,
    padding: f64,
) -> bool {
    match side {
        Side::Top => coordinate.top < padding,
        Side::Bottom => coordinate.top + size.height > viewport.height - padding,
        Side::Left => coordinate.left < padding,
        Side::Right => coordinate.left + size.width > viewport.width - padding,
    }
}

fn clamp_into(coordinate: Coordinate, size: Size, viewport: Viewport, padding: f64) -> Coordinate {
    let Coordinate { mut top, mut left } = coordinate;
    if left < padding {
        left = padding;
    }
    if left + size.width > viewport.width - padding {
        left = viewport.width - size.width - padding;
    }
    if top < padding {
        top = padding;
    }
    if top + size.height > viewport.height - padding {
        top = viewport.height - size.height - padding;
    }
    Coordinate { top, left }
}

/// Place a tooltip next to `target`, flipping to the opposite side when the requested side
/// overflows and the opposite one fits, then clamping into the padded viewport.
#[must_use]
pub fn place_tooltip(
    target: &Rect,
    size: Size,
    requested: Placement,
    viewport: Viewport,
    metrics: OverlayMetrics,
) -> TooltipLayout {
    let mut placement = requested;
    let mut coordinate = anchor(target, size, requested, metrics.gap);

    if overflows_main_axis(coordinate, size, requested.side(), viewport, metrics.padding) {
        let flipped = requested.opposite();
        let candidate = anchor(target, size, flipped, metrics.gap);
        if !overflows_main_axis(candidate, size, flipped.side(), viewport, metrics.padding) {
            tracing::debug!(
                from = requested.as_str(),
                to = flipped.as_str(),
                "tooltip flipped"
            );
            placement = flipped;
            coordinate = candidate;
        }
    }

    TooltipLayout {
        coordinate: clamp_into(coordinate, size, viewport, metrics.padding),
        placement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };

    fn panel(width: f64, height: f64) -> Size {
        Size { width, height }
    }

    #[test]
    fn dropdown_opens_below_and_left_aligned_when_it_fits() {
        let trigger = Rect::from_origin(100.0, 100.0, 120.0, 40.0);
        let layout = place_dropdown(&trigger, panel(280.0, 300.0), DESKTOP, OverlayMetrics::DROPDOWN);
        assert_eq!(layout.placement, VerticalPlacement::Bottom);
        assert_eq!(layout.coordinate, Coordinate { top: 148.0, left: 100.0 });
    }

    #[test]
    fn dropdown_flips_above_near_the_bottom_edge() {
        let trigger = Rect::from_origin(100.0, 740.0, 120.0, 40.0);
        let layout = place_dropdown(&trigger, panel(280.0, 300.0), DESKTOP, OverlayMetrics::DROPDOWN);
        assert_eq!(layout.placement, VerticalPlacement::Top);
        assert!((layout.coordinate.top - 432.0).abs() < f64::EPSILON);
    }

    #[test]
    fn dropdown_stays_below_when_neither_side_fits() {
        let short = Viewport {
            width: 1280.0,
            height: 400.0,
        };
        let trigger = Rect::from_origin(100.0, 200.0, 120.0, 40.0);
        let layout = place_dropdown(&trigger, panel(280.0, 300.0), short, OverlayMetrics::DROPDOWN);
        assert_eq!(layout.placement, VerticalPlacement::Bottom);
        assert!((layout.coordinate.top - 248.0).abs() < f64::EPSILON);
    }

    #[test]
    fn wide_dropdown_keeps_padding_from_the_right_edge() {
        let viewport = Viewport {
            width: 1024.0,
            height: 800.0,
        };
        let trigger = Rect::from_origin(100.0, 100.0, 120.0, 40.0);
        let layout = place_dropdown(&trigger, panel(1000.0, 200.0), viewport, OverlayMetrics::DROPDOWN);
        assert!((layout.coordinate.left - 8.0).abs() < f64::EPSILON);
        let right_gap = viewport.width - (layout.coordinate.left + 1000.0);
        assert!((right_gap - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn dropdown_wider_than_viewport_pins_to_padding() {
        let viewport = Viewport {
            width: 1024.0,
            height: 800.0,
        };
        let trigger = Rect::from_origin(100.0, 100.0, 120.0, 40.0);
        let layout = place_dropdown(&trigger, panel(1100.0, 200.0), viewport, OverlayMetrics::DROPDOWN);
        assert!((layout.coordinate.left - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_measurements_keep_the_previous_layout() {
        let previous = DropdownLayout {
            coordinate: Coordinate { top: 10.0, left: 20.0 },
            placement: VerticalPlacement::Top,
        };
        let trigger = Rect::from_origin(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            reposition_dropdown(previous, None, Some(panel(10.0, 10.0)), DESKTOP, OverlayMetrics::DROPDOWN),
            previous
        );
        assert_eq!(
            reposition_dropdown(previous, Some(trigger), None, DESKTOP, OverlayMetrics::DROPDOWN),
            previous
        );
    }

    #[test]
    fn tooltip_centers_above_the_target() {
        let target = Rect::from_origin(500.0, 400.0, 100.0, 40.0);
        let layout = place_tooltip(&target, panel(120.0, 30.0), Placement::Top, DESKTOP, OverlayMetrics::TOOLTIP);
        assert_eq!(layout.placement, Placement::Top);
        assert_eq!(layout.coordinate, Coordinate { top: 362.0, left: 490.0 });
    }

    #[test]
    fn tooltip_flips_below_when_top_overflows() {
        let target = Rect::from_origin(500.0, 10.0, 100.0, 40.0);
        let layout = place_tooltip(&target, panel(120.0, 30.0), Placement::TopLeft, DESKTOP, OverlayMetrics::TOOLTIP);
        assert_eq!(layout.placement, Placement::BottomLeft);
        assert_eq!(layout.coordinate, Coordinate { top: 58.0, left: 500.0 });
    }

    #[test]
    fn tooltip_flips_left_when_right_overflows() {
        let target = Rect::from_origin(1200.0, 400.0, 60.0, 20.0);
        let layout = place_tooltip(&target, panel(100.0, 20.0), Placement::Right, DESKTOP, OverlayMetrics::TOOLTIP);
        assert_eq!(layout.placement, Placement::Left);
        assert!((layout.coordinate.left - 1092.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tooltip_clamps_cross_axis_into_padding() {
        let target = Rect::from_origin(0.0, 400.0, 20.0, 20.0);
        let layout = place_tooltip(&target, panel(200.0, 30.0), Placement::Bottom, DESKTOP, OverlayMetrics::TOOLTIP);
        assert_eq!(layout.placement, Placement::Bottom);
        assert!((layout.coordinate.left - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tooltip_keeps_requested_side_when_neither_fits() {
        let tiny = Viewport {
            width: 300.0,
            height: 60.0,
        };
        let target = Rect::from_origin(100.0, 20.0, 40.0, 20.0);
        let layout = place_tooltip(&target, panel(80.0, 40.0), Placement::Top, tiny, OverlayMetrics::TOOLTIP);
        assert_eq!(layout.placement, Placement::Top);
        assert!((layout.coordinate.top - 8.0).abs() < f64::EPSILON);
    }
}

// File: crates/chart-core/tests/tooltip.rs
// Purpose: Tooltip edge avoidance in compact and regular layouts, and content labels.

use chart_core::{place_tooltip, DataSeries, Point, TooltipConfig, TooltipContent};

#[test]
fn compact_horizontal_flip_near_right_edge() {
    let cfg = TooltipConfig::default();
    let near_edge = place_tooltip(Point::new(950.0, 200.0), 1000.0, true, &cfg);
    assert_eq!(near_edge.x, 790.0);
    let roomy = place_tooltip(Point::new(100.0, 200.0), 1000.0, true, &cfg);
    assert_eq!(roomy.x, 100.0);
}

#[test]
fn compact_vertical_flip_near_top() {
    let cfg = TooltipConfig::default();
    assert_eq!(place_tooltip(Point::new(100.0, 50.0), 1000.0, true, &cfg).y, 70.0);
    assert_eq!(place_tooltip(Point::new(100.0, 200.0), 1000.0, true, &cfg).y, 120.0);
}

#[test]
fn regular_layout_offsets() {
    let cfg = TooltipConfig::default();
    let near_edge = place_tooltip(Point::new(900.0, 300.0), 1000.0, false, &cfg);
    assert_eq!((near_edge.x, near_edge.y), (700.0, 180.0));
    let roomy = place_tooltip(Point::new(500.0, 50.0), 1000.0, false, &cfg);
    // Always above on regular layouts, even when that leaves the surface.
    assert_eq!((roomy.x, roomy.y), (400.0, -70.0));
}

#[test]
fn panel_never_takes_pointer_events() {
    let cfg = TooltipConfig::default();
    for compact in [true, false] {
        assert!(!place_tooltip(Point::new(10.0, 10.0), 300.0, compact, &cfg).pointer_events);
    }
}

#[test]
fn content_for_july() {
    let s = DataSeries::sample();
    let jul = &s.points()[3];
    let c = TooltipContent::for_point(jul);
    assert_eq!(c.value, "$89.6k");
    assert_eq!(c.change, "5.4% above target");
}

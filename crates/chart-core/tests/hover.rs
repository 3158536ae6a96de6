// File: crates/chart-core/tests/hover.rs
// Purpose: Hit testing and Idle/Hovering transitions of the hover coordinator.

use std::rc::Rc;

use chart_core::{Chart, ChartLayout, DataSeries, HoverCoordinator, HoverTransition, Point, RenderOptions};

fn sample_layout() -> (DataSeries, ChartLayout) {
    let chart = Chart::new(DataSeries::sample());
    let layout = chart.layout((960.0, 449.0), &RenderOptions::default());
    (chart.series, layout)
}

#[test]
fn exact_column_hits_that_point() {
    let (series, layout) = sample_layout();
    for (i, p) in layout.points.iter().enumerate() {
        let mut hover = HoverCoordinator::new();
        let pointer = Point::new(p.x, layout.plot.top + 5.0);
        assert_eq!(layout.hit_test(pointer), Some(i));
        assert_eq!(hover.pointer_move(pointer, &layout, &series), HoverTransition::Entered);
        let active = hover.active().expect("hovering");
        assert_eq!(active.index, i);
        assert_eq!(active.position, *p);
        assert_eq!(active.point, series.points()[i]);
    }
}

#[test]
fn nearest_column_wins_anywhere_in_the_slice() {
    let (series, layout) = sample_layout();
    let mut hover = HoverCoordinator::new();
    // A little right of Jul, near the bottom edge: still Jul.
    let pointer = Point::new(layout.points[3].x + 20.0, layout.plot.bottom - 1.0);
    hover.pointer_move(pointer, &layout, &series);
    assert_eq!(hover.active().map(|a| a.index), Some(3));
}

#[test]
fn outside_plotted_range_is_idle() {
    let (series, layout) = sample_layout();
    let plot = layout.plot;
    let outside = [
        Point::new(plot.left - 1.0, plot.top + 10.0),
        Point::new(plot.right + 1.0, plot.top + 10.0),
        Point::new(plot.left + 10.0, plot.top - 1.0),
        Point::new(plot.left + 10.0, plot.bottom + 1.0),
    ];
    for pointer in outside {
        let mut hover = HoverCoordinator::new();
        assert_eq!(hover.pointer_move(pointer, &layout, &series), HoverTransition::Unchanged);
        assert!(!hover.is_hovering());
        assert!(!hover.take_redraw());
    }
}

#[test]
fn moving_between_points_replaces_in_one_step() {
    let (series, layout) = sample_layout();
    let mut hover = HoverCoordinator::new();
    let y = layout.plot.top + 10.0;
    hover.pointer_move(Point::new(layout.points[1].x, y), &layout, &series);
    assert_eq!(
        hover.pointer_move(Point::new(layout.points[2].x, y), &layout, &series),
        HoverTransition::Moved
    );
    assert_eq!(hover.active().map(|a| a.index), Some(2));
}

#[test]
fn identical_hover_keeps_the_same_state() {
    let (series, layout) = sample_layout();
    let mut hover = HoverCoordinator::new();
    let pointer = Point::new(layout.points[4].x, layout.plot.top + 10.0);

    hover.pointer_move(pointer, &layout, &series);
    assert!(hover.take_redraw());
    let first = Rc::clone(hover.active().expect("hovering"));

    let nudged = Point::new(pointer.x + 2.0, pointer.y + 30.0);
    assert_eq!(hover.pointer_move(nudged, &layout, &series), HoverTransition::Unchanged);
    assert!(Rc::ptr_eq(&first, hover.active().expect("still hovering")));
    // Redraws are still requested while hovering.
    assert!(hover.take_redraw());
    assert!(!hover.take_redraw());
}

#[test]
fn leaving_or_hidden_tooltip_returns_to_idle() {
    let (series, layout) = sample_layout();
    let mut hover = HoverCoordinator::new();
    let pointer = Point::new(layout.points[0].x, layout.plot.top + 10.0);

    hover.pointer_move(pointer, &layout, &series);
    assert_eq!(hover.pointer_leave(), HoverTransition::Left);
    assert!(!hover.is_hovering());
    assert_eq!(hover.pointer_leave(), HoverTransition::Unchanged);

    hover.pointer_move(pointer, &layout, &series);
    assert_eq!(hover.tooltip_hidden(), HoverTransition::Left);
    assert!(hover.active().is_none());

    hover.pointer_move(pointer, &layout, &series);
    let off = Point::new(layout.plot.right + 50.0, pointer.y);
    assert_eq!(hover.pointer_move(off, &layout, &series), HoverTransition::Left);
}

#[test]
fn single_point_series_is_hit_only_at_its_column() {
    let series = DataSeries::new(vec![chart_core::DataPoint::new("Apr", 50_000.0, 1.0, 1.0)]).expect("valid");
    let chart = Chart::new(series);
    let layout = chart.layout((400.0, 300.0), &RenderOptions::default());
    let x = layout.points[0].x;
    assert_eq!(x, (layout.plot.left + layout.plot.right) * 0.5);
    assert_eq!(layout.hit_test(Point::new(x, layout.plot.top + 1.0)), Some(0));
    assert_eq!(layout.hit_test(Point::new(x - 1.0, layout.plot.top + 1.0)), None);
}

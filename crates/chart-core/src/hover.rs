// File: crates/chart-core/src/hover.rs
// Summary: Hover/tooltip coordinator: Idle/Hovering state machine driven by pointer hit tests.

use std::rc::Rc;

use tracing::trace;

use crate::data::{DataPoint, DataSeries};
use crate::geometry::Point;
use crate::layout::ChartLayout;

/// The point under the pointer together with where it was drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivePoint {
    pub index: usize,
    pub point: DataPoint,
    pub position: Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverTransition {
    /// Same state as before (Idle stays Idle, or the same point is re-hovered).
    Unchanged,
    /// Idle -> Hovering.
    Entered,
    /// Hovering -> Hovering on a different point, replaced in one step.
    Moved,
    /// Hovering -> Idle.
    Left,
}

/// Transient hover state; empty while Idle.
#[derive(Clone, Debug, Default)]
pub struct HoverState {
    active: Option<Rc<ActivePoint>>,
}

impl HoverState {
    pub fn active(&self) -> Option<&Rc<ActivePoint>> { self.active.as_ref() }
    pub fn is_hovering(&self) -> bool { self.active.is_some() }
}

/// Owns the hover state and decides when overlays need a redraw.
///
/// Every pointer event that lands in Hovering requests a redraw, even when the
/// stored point does not change; consumers see a new `Rc` only on a real change.
#[derive(Debug, Default)]
pub struct HoverCoordinator {
    state: HoverState,
    redraw_pending: bool,
}

impl HoverCoordinator {
    pub fn new() -> Self { Self::default() }

    pub fn state(&self) -> &HoverState { &self.state }

    pub fn active(&self) -> Option<&Rc<ActivePoint>> { self.state.active() }

    pub fn is_hovering(&self) -> bool { self.state.is_hovering() }

    /// Feed a pointer position in surface pixels.
    pub fn pointer_move(&mut self, pointer: Point, layout: &ChartLayout, series: &DataSeries) -> HoverTransition {
        match layout.hit_test(pointer) {
            Some(index) => self.activate(index, layout, series),
            None => self.clear("no element under pointer"),
        }
    }

    /// Activate a point by index, as a hit test would. Out-of-range indices clear.
    pub fn hover_index(&mut self, index: usize, layout: &ChartLayout, series: &DataSeries) -> HoverTransition {
        self.activate(index, layout, series)
    }

    pub fn pointer_leave(&mut self) -> HoverTransition {
        self.clear("pointer left plot")
    }

    /// The renderer reported its tooltip fully transparent.
    pub fn tooltip_hidden(&mut self) -> HoverTransition {
        self.clear("tooltip hidden")
    }

    /// Returns whether a redraw was requested since the last call, and resets the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_pending)
    }

    /// Drop all state, as on unmount.
    pub fn reset(&mut self) {
        self.state = HoverState::default();
        self.redraw_pending = false;
    }

    fn activate(&mut self, index: usize, layout: &ChartLayout, series: &DataSeries) -> HoverTransition {
        let (Some(point), Some(position)) = (series.get(index), layout.point(index)) else {
            return self.clear("index outside series");
        };
        self.redraw_pending = true;

        if let Some(current) = &self.state.active {
            if current.index == index && current.position == position {
                return HoverTransition::Unchanged;
            }
        }

        let was_hovering = self.state.active.is_some();
        self.state.active = Some(Rc::new(ActivePoint { index, point: point.clone(), position }));
        trace!(index, period = %point.period, x = position.x, y = position.y, "hover point set");
        if was_hovering { HoverTransition::Moved } else { HoverTransition::Entered }
    }

    fn clear(&mut self, reason: &'static str) -> HoverTransition {
        if self.state.active.take().is_some() {
            trace!(reason, "hover cleared");
            self.redraw_pending = true;
            HoverTransition::Left
        } else {
            HoverTransition::Unchanged
        }
    }
}

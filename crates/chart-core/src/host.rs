// File: crates/chart-core/src/host.rs
// Summary: Owns the drawing surface, the single live chart instance, and the hover coordinator.

use tracing::debug;

use crate::chart::{Chart, FrameReport, RenderOptions};
use crate::error::HostError;
use crate::geometry::Point;
use crate::hover::{HoverCoordinator, HoverTransition};
use crate::layout::ChartLayout;
use crate::plugin::OverlayStack;
use crate::surface::DrawSurface;
use crate::tooltip::{place_tooltip, TooltipConfig, TooltipContent, TooltipPlacement};

pub type InstanceId = u64;

/// A chart bound to the host's surface together with its options and passes.
pub struct ChartInstance {
    id: InstanceId,
    pub chart: Chart,
    pub options: RenderOptions,
    pub passes: OverlayStack,
}

impl ChartInstance {
    pub fn id(&self) -> InstanceId { self.id }
}

/// At most one instance is live at a time; mounting always destroys the
/// previous one first.
pub struct ChartHost<S: DrawSurface> {
    surface: Option<S>,
    live: Option<ChartInstance>,
    hover: HoverCoordinator,
    next_id: InstanceId,
    destroyed: u64,
}

impl<S: DrawSurface> Default for ChartHost<S> {
    fn default() -> Self {
        Self { surface: None, live: None, hover: HoverCoordinator::new(), next_id: 1, destroyed: 0 }
    }
}

impl<S: DrawSurface> ChartHost<S> {
    pub fn new() -> Self { Self::default() }

    pub fn with_surface(surface: S) -> Self {
        let mut host = Self::new();
        host.surface = Some(surface);
        host
    }

    /// Attach a surface, returning the one it replaces.
    pub fn attach_surface(&mut self, surface: S) -> Option<S> {
        self.surface.replace(surface)
    }

    pub fn detach_surface(&mut self) -> Option<S> {
        self.surface.take()
    }

    pub fn surface(&self) -> Option<&S> { self.surface.as_ref() }
    pub fn surface_mut(&mut self) -> Option<&mut S> { self.surface.as_mut() }

    pub fn hover(&self) -> &HoverCoordinator { &self.hover }

    pub fn instance(&self) -> Option<&ChartInstance> { self.live.as_ref() }

    pub fn live_instance(&self) -> Option<InstanceId> { self.live.as_ref().map(|i| i.id) }

    /// Number of instances torn down so far.
    pub fn destroyed_instances(&self) -> u64 { self.destroyed }

    /// Bind a new chart to the surface, destroying any live instance and its
    /// hover state first.
    pub fn mount(&mut self, chart: Chart, options: RenderOptions, passes: OverlayStack) -> InstanceId {
        self.destroy_live();
        self.hover.reset();
        let id = self.next_id;
        self.next_id += 1;
        debug!(id, points = chart.series.len(), compact = options.compact, "chart instance mounted");
        self.live = Some(ChartInstance { id, chart, options, passes });
        id
    }

    /// Tear down the live instance and forget any hover state.
    pub fn unmount(&mut self) -> Option<InstanceId> {
        let id = self.destroy_live();
        self.hover.reset();
        id
    }

    /// Re-create the live instance for a new layout mode. The old instance is
    /// destroyed before the replacement is constructed.
    pub fn set_compact(&mut self, compact: bool) -> Option<InstanceId> {
        let current = self.live.as_ref()?;
        if current.options.compact == compact {
            return Some(current.id);
        }
        let ChartInstance { id, chart, mut options, passes } = self.live.take()?;
        self.destroyed += 1;
        debug!(id, compact, "chart instance destroyed for layout change");
        self.hover.reset();
        options.compact = compact;
        Some(self.mount(chart, options, passes))
    }

    /// Geometry of the live instance on the current surface.
    pub fn layout(&self) -> Result<ChartLayout, HostError> {
        let surface = self.surface.as_ref().ok_or(HostError::NoSurface)?;
        let inst = self.live.as_ref().ok_or(HostError::NoInstance)?;
        Ok(inst.chart.layout(surface.size(), &inst.options))
    }

    pub fn pointer_move(&mut self, pointer: Point) -> Result<HoverTransition, HostError> {
        let layout = self.layout()?;
        let inst = self.live.as_ref().ok_or(HostError::NoInstance)?;
        Ok(self.hover.pointer_move(pointer, &layout, &inst.chart.series))
    }

    pub fn hover_period(&mut self, period: &str) -> Result<HoverTransition, HostError> {
        let layout = self.layout()?;
        let inst = self.live.as_ref().ok_or(HostError::NoInstance)?;
        let Some(index) = inst.chart.series.index_of(period) else {
            return Ok(self.hover.pointer_leave());
        };
        Ok(self.hover.hover_index(index, &layout, &inst.chart.series))
    }

    pub fn pointer_leave(&mut self) -> HoverTransition {
        self.hover.pointer_leave()
    }

    pub fn tooltip_hidden(&mut self) -> HoverTransition {
        self.hover.tooltip_hidden()
    }

    /// Whether the coordinator asked for a redraw since the last call.
    pub fn take_redraw(&mut self) -> bool {
        self.hover.take_redraw()
    }

    /// Tooltip placement and content for the active point, if any. The anchor is
    /// taken from the current layout, the same position the overlays draw at.
    pub fn tooltip(&self, cfg: &TooltipConfig) -> Option<(TooltipPlacement, TooltipContent)> {
        let active = self.hover.active()?;
        let layout = self.layout().ok()?;
        let anchor = layout.point(active.index).unwrap_or(active.position);
        Some((
            place_tooltip(anchor, layout.surface_width, layout.compact, cfg),
            TooltipContent::for_point(&active.point),
        ))
    }

    /// Render the live instance. Returns `None`, drawing nothing, when there is
    /// no surface or no instance.
    pub fn render_frame(&mut self) -> Option<FrameReport> {
        let (Some(surface), Some(inst)) = (self.surface.as_mut(), self.live.as_ref()) else {
            debug!("frame skipped: surface or instance unavailable");
            return None;
        };
        let hover = self.hover.active().map(|a| a.as_ref());
        Some(inst.chart.render(surface, &inst.options, hover, &inst.passes))
    }

    fn destroy_live(&mut self) -> Option<InstanceId> {
        let inst = self.live.take()?;
        self.destroyed += 1;
        debug!(id = inst.id, "chart instance destroyed");
        Some(inst.id)
    }
}

impl<S: DrawSurface> Drop for ChartHost<S> {
    fn drop(&mut self) {
        if self.live.is_some() {
            debug!("chart host dropped with a live instance");
            self.destroy_live();
        }
    }
}

// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart model, overlay passes, hover coordination, host and KPI cards.

pub mod axis;
pub mod chart;
pub mod data;
pub mod disclosure;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod host;
pub mod hover;
pub mod kpi;
pub mod layout;
pub mod plugin;
pub mod scale;
pub mod surface;
pub mod theme;
pub mod tooltip;
pub mod types;
pub mod variables;

pub use axis::{Axis, AxisChrome};
pub use chart::{Chart, FrameReport, RenderOptions};
pub use data::{DataPoint, DataSeries};
pub use disclosure::{DisclosureEvent, DisclosureTimers};
pub use error::{HostError, SeriesError};
pub use geometry::{Point, RectF};
pub use host::{ChartHost, ChartInstance, InstanceId};
pub use hover::{ActivePoint, HoverCoordinator, HoverState, HoverTransition};
pub use kpi::KpiCard;
pub use layout::ChartLayout;
pub use plugin::{default_passes, interpolate_y, OverlayPass, OverlayStack, PassOutcome, RenderContext};
pub use surface::{DrawOp, DrawSurface, RecordingSurface, Stroke, TextAlign, TextStyle};
pub use theme::Theme;
pub use tooltip::{place_tooltip, TooltipConfig, TooltipContent, TooltipPlacement};
pub use types::{is_compact, Color, Insets};
pub use variables::{Variable, VariableStore};

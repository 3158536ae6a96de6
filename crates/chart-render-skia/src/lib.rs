// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia renderer crate: raster frames of a host's live chart, its overlays and tooltip panel.

pub mod panel;
pub mod surface;
pub mod text;

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use chart_core::{
    default_passes, Chart, ChartHost, FrameReport, RenderOptions, TooltipConfig, TooltipPlacement,
};

pub use surface::{RgbaPixels, SkiaSurface};
pub use text::TextShaper;

pub type SkiaHost = ChartHost<SkiaSurface>;

/// One rendered frame as straight RGBA bytes.
pub struct RgbaFrame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
    pub report: FrameReport,
    pub tooltip: Option<TooltipPlacement>,
}

/// Host bound to an `opts.width x opts.height` raster with `chart` mounted
/// under the default overlay passes.
pub fn mount_headless(chart: Chart, opts: RenderOptions) -> Result<SkiaHost> {
    let surface = SkiaSurface::new(opts.width, opts.height)?;
    let mut host = ChartHost::with_surface(surface);
    host.mount(chart, opts, default_passes());
    Ok(host)
}

/// Draws a host's live instance onto its raster surface.
pub struct SkiaRenderer {
    /// Paint the tooltip panel over hovered frames when set.
    pub tooltip: Option<TooltipConfig>,
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new() }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { tooltip: Some(TooltipConfig::default()) }
    }

    /// Render the live instance with its own passes, then the tooltip panel.
    /// `None` when the host has no surface or no instance.
    pub fn draw(&self, host: &mut SkiaHost) -> Option<(FrameReport, Option<TooltipPlacement>)> {
        let report = host.render_frame()?;
        let Some((placement, content)) = self.tooltip.as_ref().and_then(|cfg| host.tooltip(cfg)) else {
            return Some((report, None));
        };
        let options = host.instance()?.options.clone();
        let surface = host.surface_mut()?;
        panel::paint_tooltip(surface, placement, &content, options.compact, &options.theme);
        Some((report, Some(placement)))
    }

    /// Render and read the frame back as straight RGBA8.
    pub fn render_to_rgba8(&self, host: &mut SkiaHost) -> Result<RgbaFrame> {
        let (report, tooltip) = self.draw(host).context("no surface or chart instance to render")?;
        let surface = host.surface_mut().context("surface detached during render")?;
        let RgbaPixels { pixels, width, height, stride } = surface.read_rgba8()?;
        debug!(width, height, drawn = ?report.drawn, "raster frame rendered");
        Ok(RgbaFrame { pixels, width, height, stride, report, tooltip })
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, host: &mut SkiaHost) -> Result<Vec<u8>> {
        let frame = self.render_to_rgba8(host)?;
        let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.pixels)
            .context("pixel buffer does not match frame size")?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG")?;
        Ok(out.into_inner())
    }

    /// Render the host's chart to a PNG at `output_png_path`.
    pub fn render_to_png(&self, host: &mut SkiaHost, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(host)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

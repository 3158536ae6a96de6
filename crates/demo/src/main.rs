// File: crates/demo/src/main.rs
// Summary: Demo loads a monthly series (built-in sample or CSV), optionally hovers a period,
// renders the chart with its overlays and tooltip to PNG, and can list the KPI cards.

mod loader;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_core::{is_compact, theme, Chart, DataSeries, KpiCard, RenderOptions, TooltipConfig};
use chart_render_skia::{mount_headless, SkiaRenderer};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "kpi-dashboard-demo", about = "Render the KPI line chart to PNG")]
struct Args {
    /// CSV with columns period (or month), value, target, percentage_change.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Period label to hover, e.g. `Jul`.
    #[arg(long)]
    hover: Option<String>,

    /// Force compact layout; otherwise derived from `--width`.
    #[arg(long)]
    compact: bool,

    #[arg(long, default_value_t = 960)]
    width: i32,

    #[arg(long, default_value_t = 449)]
    height: i32,

    /// Theme preset name.
    #[arg(long, default_value = "lemon")]
    theme: String,

    /// Skip axis and tick labels.
    #[arg(long)]
    no_labels: bool,

    #[arg(long, default_value = "target/out/kpi_chart.png")]
    out: PathBuf,

    /// Also print the KPI cards shown beside the chart.
    #[arg(long)]
    kpis: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let series = match &args.data {
        Some(path) => loader::load_series_csv(path).with_context(|| format!("failed to load '{}'", path.display()))?,
        None => DataSeries::sample(),
    };
    info!(points = series.len(), "series loaded");

    let opts = RenderOptions {
        width: args.width,
        height: args.height,
        compact: args.compact || is_compact(args.width as f32),
        theme: theme::find(&args.theme),
        draw_labels: !args.no_labels,
        insets: None,
    };

    // The host owns the raster, so the PNG comes from its single live instance.
    let mut host = mount_headless(Chart::new(series), opts)?;
    if let Some(period) = &args.hover {
        host.hover_period(period)?;
        if !host.hover().is_hovering() {
            warn!(%period, "period not in series; rendering without hover");
        }
    }

    if let Some((placement, content)) = host.tooltip(&TooltipConfig::default()) {
        println!("Tooltip at ({:.1}, {:.1}): {} / {}", placement.x, placement.y, content.value, content.change);
    }

    SkiaRenderer::new().render_to_png(&mut host, &args.out)?;
    println!("Wrote {}", args.out.display());

    if args.kpis {
        println!("Key Performance Indicators");
        for card in KpiCard::sample() {
            println!("  {:<22} {:>10}  {}", card.title, card.value, card.description);
        }
    }
    Ok(())
}

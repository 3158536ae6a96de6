use anyhow::Result;
use chart_core::{Chart, DataSeries, RenderOptions};
use chart_render_skia::{mount_headless, SkiaRenderer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    let renderer = SkiaRenderer::new();
    for &(w, h) in &[(960i32, 449i32), (1920, 900)] {
        let opts = RenderOptions { width: w, height: h, draw_labels: false, ..RenderOptions::default() };
        let Ok(mut host) = mount_headless(Chart::new(DataSeries::sample()), opts) else { continue };
        if host.hover_period("Jul").is_err() {
            continue;
        }
        group.bench_function(format!("hover_{w}x{h}"), |b| {
            b.iter(|| -> Result<()> {
                let bytes = renderer.render_to_png_bytes(&mut host)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);

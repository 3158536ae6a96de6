// File: crates/window-demo/src/main.rs
// Summary: Windowed demo: pointer movement feeds the hover coordinator, each requested redraw
// renders the host's live chart through Skia and is blitted with softbuffer. Number keys focus
// variable tags whose descriptions appear in the title after the disclosure delay.

mod tags;

use std::num::NonZeroU32;
use std::time::Instant;

use anyhow::{anyhow, Result};
use chart_core::{is_compact, Chart, DataSeries, Point, VariableStore};
use chart_render_skia::{mount_headless, SkiaHost, SkiaRenderer};
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use tags::TagPanel;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("KPI Dashboard Chart")
        .with_inner_size(winit::dpi::LogicalSize::new(960.0, 449.0))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e:?}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e:?}"))?;

    let mut size = window.inner_size();
    let opts = chart_core::RenderOptions {
        width: size.width as i32,
        height: size.height as i32,
        compact: is_compact(size.width as f32),
        ..Default::default()
    };
    let mut host = mount_headless(Chart::new(DataSeries::sample()), opts)?;
    let renderer = SkiaRenderer::new();
    let mut tags = TagPanel::new(VariableStore::sample());
    let mut compact_override = false;
    info!(width = size.width, height = size.height, "window ready; hover the chart, keys 1-9 focus a variable tag");

    event_loop.run(move |event, _, cf| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    tags.cancel();
                    host.unmount();
                    *cf = ControlFlow::Exit;
                    return;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    if let Some(s) = host.surface_mut() {
                        if let Err(e) = s.resize(size.width as i32, size.height as i32) {
                            error!("surface resize failed: {e:#}");
                        }
                    }
                    host.set_compact(compact_override || is_compact(size.width as f32));
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let p = Point::new(position.x as f32, position.y as f32);
                    if let Ok(t) = host.pointer_move(p) {
                        debug!(?t, "pointer moved");
                    }
                    if host.take_redraw() {
                        window.request_redraw();
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    host.pointer_leave();
                    if host.take_redraw() {
                        window.request_redraw();
                    }
                }
                WindowEvent::KeyboardInput { input, .. } if input.state == ElementState::Pressed => {
                    let now = Instant::now();
                    match input.virtual_keycode {
                        Some(VirtualKeyCode::C) => {
                            compact_override = !compact_override;
                            host.set_compact(compact_override || is_compact(size.width as f32));
                            window.request_redraw();
                        }
                        Some(VirtualKeyCode::Escape) => tags.focus(None, now),
                        Some(VirtualKeyCode::Space) => {
                            tags.toggle_focused();
                        }
                        Some(key) => {
                            if let Some(index) = tag_index(key) {
                                tags.focus(Some(index), now);
                            }
                        }
                        None => {}
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(&renderer, &mut host, &mut surface, size.width, size.height) {
                    error!("redraw failed: {e:#}");
                }
            }
            Event::MainEventsCleared => {
                if tags.poll(Instant::now()) {
                    window.set_title(&tags.caption());
                }
            }
            _ => {}
        }
        *cf = match tags.next_deadline() {
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Wait,
        };
    });
}

fn tag_index(key: VirtualKeyCode) -> Option<usize> {
    use VirtualKeyCode::*;
    [Key1, Key2, Key3, Key4, Key5, Key6, Key7, Key8, Key9].iter().position(|k| *k == key)
}

fn draw(
    renderer: &SkiaRenderer,
    host: &mut SkiaHost,
    surface: &mut softbuffer::Surface,
    width: u32,
    height: u32,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
        return Ok(()); // minimized
    };
    if host.instance().is_none() {
        return Ok(());
    }
    surface.resize(w, h).map_err(|e| anyhow!("resize: {e:?}"))?;
    let frame = renderer.render_to_rgba8(host)?;

    let mut buffer = surface.buffer_mut().map_err(|e| anyhow!("buffer: {e:?}"))?;
    for (dst, px) in buffer.iter_mut().zip(frame.pixels.chunks_exact(4)) {
        let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
        *dst = (r << 16) | (g << 8) | b;
    }
    buffer.present().map_err(|e| anyhow!("present: {e:?}"))?;
    Ok(())
}

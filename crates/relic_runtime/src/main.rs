//! Relic Runtime
//!
//! Headless host: loads settings, hands the render core a recording GPU
//! context and ticks the built-in demo renderer at the configured rate.
//!
//! Usage: `relic [settings.json] [frames] [rate]`
//!
//! `rate` overrides the configured frame rate, e.g. `144` or `144fps`.

mod demo;
mod host;

use anyhow::{Context as _, Result};
use relic_core::time::SystemClock;
use relic_render::RecordingDevice;
use relic_services::{FrameRate, Settings};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

use crate::demo::ShadowVolumeDemo;
use crate::host::Host;

const DEFAULT_FRAMES: u64 = 300;

/// Desktop driver profile the headless device reports.
const HEADLESS_EXTENSIONS: &str = "GL_ARB_depth_texture GL_ARB_shadow GL_ARB_texture_float \
     GL_ARB_texture_non_power_of_two GL_ARB_vertex_array_object GL_EXT_stencil_two_side \
     GL_EXT_discard_framebuffer GL_KHR_debug GL_ARB_timer_query";

/// `[settings.json] [frames] [rate]`, all optional and positional.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<(Settings, u64)> {
    let mut settings = match args.next() {
        Some(path) => Settings::load(&path).with_context(|| format!("loading {path}"))?,
        None => Settings::default(),
    };
    let frames = match args.next() {
        Some(n) => n.parse().with_context(|| format!("invalid frame count '{n}'"))?,
        None => DEFAULT_FRAMES,
    };
    if let Some(rate) = args.next() {
        settings.video.frame_rate = rate.parse::<FrameRate>()?;
    }
    Ok((settings, frames))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Relic v{}", relic_core::VERSION);

    let (settings, frames) = parse_args(std::env::args().skip(1))?;

    let demo = ShadowVolumeDemo::new(settings.render.clone());
    let mut host = Host::new(settings, demo);
    let rate = host.frame_rate();
    host.context_reset(
        RecordingDevice::new(HEADLESS_EXTENSIONS),
        Box::new(SystemClock::new()),
    )?;

    let tick = Duration::from_secs_f32(rate.delta());
    let mut next = Instant::now();
    for _ in 0..frames {
        host.run_frame()?;

        // Headless: the command log would otherwise grow without bound
        if let Some(ctx) = host.context_mut() {
            let issued = ctx.device_mut().take_commands().len();
            tracing::trace!(issued, "frame commands");
        }

        next += tick;
        if let Some(wait) = next.checked_duration_since(Instant::now()) {
            std::thread::sleep(wait);
        }
    }

    host.context_destroy();
    tracing::info!(
        frames = host.frames_rendered(),
        simulated_secs = host.renderer().time(),
        "shutdown"
    );
    Ok(())
}

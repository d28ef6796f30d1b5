//! Host shim
//!
//! Mirrors a plugin frontend's hardware-render callbacks: the frontend hands
//! over a GPU context (`context_reset`), ticks the core once per host frame
//! (`run_frame`) and takes the context back (`context_destroy`). Contexts can
//! be lost and recreated any number of times over a session.

use anyhow::{Context as _, Result};
use relic_core::time::Clock;
use relic_render::{GpuDevice, RenderContext, RenderError};
use relic_services::{FrameRate, Settings, VideoSettings};

/// The game layer driven by the host.
pub trait FrameRenderer {
    /// Create per-context resources. Called after every context reset; any
    /// handles from a previous context are stale by then.
    fn init<D: GpuDevice>(&mut self, _ctx: &mut RenderContext<D>) -> Result<(), RenderError> {
        Ok(())
    }

    /// Advance simulation by `delta` seconds. `false` skips rendering this tick.
    fn update(&mut self, delta: f32) -> bool;

    /// Issue the frame's GPU work between `begin_frame` and `end_frame`.
    fn render<D: GpuDevice>(&mut self, ctx: &mut RenderContext<D>) -> Result<(), RenderError>;
}

/// Window size as the render core takes it.
fn window_size(video: &VideoSettings) -> Result<(i32, i32)> {
    let width = i32::try_from(video.width)
        .with_context(|| format!("window width {} out of range", video.width))?;
    let height = i32::try_from(video.height)
        .with_context(|| format!("window height {} out of range", video.height))?;
    Ok((width, height))
}

pub struct Host<D: GpuDevice, R: FrameRenderer> {
    settings: Settings,
    renderer: R,
    context: Option<RenderContext<D>>,
    frames_rendered: u64,
}

impl<D: GpuDevice, R: FrameRenderer> Host<D, R> {
    pub fn new(settings: Settings, renderer: R) -> Self {
        Self {
            settings,
            renderer,
            context: None,
            frames_rendered: 0,
        }
    }

    /// Take over a new GPU context, releasing the previous one first.
    pub fn context_reset(&mut self, device: D, clock: Box<dyn Clock>) -> Result<()> {
        if self.context.take().is_some() {
            tracing::info!("context reset while a context was live, releasing it");
        }

        let video = &self.settings.video;
        let (width, height) = window_size(video)?;
        let mut ctx = RenderContext::new(device, clock, width, height)
            .context("failed to create render context")?;
        self.renderer
            .init(&mut ctx)
            .context("renderer failed to initialise context resources")?;

        tracing::info!(
            width = video.width,
            height = video.height,
            rate = %video.frame_rate,
            "context reset"
        );
        self.context = Some(ctx);
        Ok(())
    }

    /// One host tick. Returns whether a frame was rendered.
    pub fn run_frame(&mut self) -> Result<bool> {
        let Some(ctx) = self.context.as_mut() else {
            tracing::warn!("run_frame without a GPU context");
            return Ok(false);
        };

        let delta = self.settings.video.frame_rate.delta();
        if !self.renderer.update(delta) {
            return Ok(false);
        }

        ctx.begin_frame();
        let result = self.renderer.render(ctx);
        if result.is_err() {
            // The next frame assumes the host framebuffer is bound
            ctx.reset_target();
        }
        ctx.end_frame();
        result.context("frame render failed")?;

        self.frames_rendered += 1;
        Ok(true)
    }

    pub fn context_destroy(&mut self) {
        if self.context.take().is_some() {
            tracing::info!(frames = self.frames_rendered, "context destroy");
        }
    }

    /// Apply changed settings; a new window size takes effect next frame.
    /// Settings the render core cannot take are rejected whole.
    pub fn apply_settings(&mut self, settings: Settings) -> Result<()> {
        let (width, height) = window_size(&settings.video)?;
        if let Some(ctx) = self.context.as_mut() {
            if settings.video.width != self.settings.video.width
                || settings.video.height != self.settings.video.height
            {
                ctx.resize(width, height);
            }
        }
        if settings.video.frame_rate != self.settings.video.frame_rate {
            tracing::info!(rate = %settings.video.frame_rate, "frame rate changed");
        }
        self.settings = settings;
        Ok(())
    }

    pub fn frame_rate(&self) -> FrameRate {
        self.settings.video.frame_rate
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn context(&self) -> Option<&RenderContext<D>> {
        self.context.as_ref()
    }

    pub fn context_mut(&mut self) -> Option<&mut RenderContext<D>> {
        self.context.as_mut()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

impl<D: GpuDevice, R: FrameRenderer> Drop for Host<D, R> {
    fn drop(&mut self) {
        self.context_destroy();
    }
}

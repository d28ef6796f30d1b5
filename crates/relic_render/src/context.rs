//! The GPU context object
//!
//! `RenderContext` is the single owner of everything the render core tracks for
//! one GPU context: the backend device, the probed capabilities, the offscreen
//! framebuffer and its renderbuffer pools, the active-state snapshot, and frame
//! statistics. Creating it is the host's context-reset; dropping it is the
//! context-destroy and releases every driver object, even mid-frame.

use crate::caps::CapabilitySet;
use crate::device::{GpuDevice, LabelKind, NativeId};
use crate::error::RenderError;
use crate::resources::{ShaderDesc, TextureDesc};
use crate::state::ActiveState;
use crate::target_cache::RenderTargetCache;
use relic_core::handle::Arena;
use relic_core::math::Rect;
use relic_core::time::Clock;
use relic_metrics::{FrameStats, FrameTimer};

/// Frames averaged by the frame-time profiler.
const FRAME_TIMER_WINDOW: usize = 60;

pub struct RenderContext<D: GpuDevice> {
    pub(crate) device: D,
    pub(crate) caps: CapabilitySet,
    pub(crate) clock: Box<dyn Clock>,

    /// Host framebuffer restored when the target is cleared.
    pub(crate) default_fbo: Option<NativeId>,
    /// Framebuffer object all offscreen targets are attached to.
    pub(crate) fbo: NativeId,
    pub(crate) targets: RenderTargetCache,

    pub(crate) active: ActiveState,
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) viewport: Rect,
    /// Viewport to restore when returning to the default framebuffer.
    pub(crate) viewport_def: Rect,
    pub(crate) scissor: Rect,

    pub(crate) stats: FrameStats,
    pub(crate) timer: FrameTimer,
    pub(crate) in_frame: bool,

    pub(crate) textures: Arena<TextureDesc>,
    pub(crate) shaders: Arena<ShaderDesc>,
}

impl<D: GpuDevice> RenderContext<D> {
    /// Take over a freshly created (or reset) GPU context.
    ///
    /// Probes capabilities once, records the host's framebuffer binding and
    /// creates the offscreen framebuffer object.
    pub fn new(
        mut device: D,
        clock: Box<dyn Clock>,
        width: i32,
        height: i32,
    ) -> Result<Self, RenderError> {
        let caps = CapabilitySet::probe_driver(&device.driver_info());
        let default_fbo = device.default_framebuffer();
        let fbo = device.create_framebuffer()?;
        if caps.debug_markers {
            device.object_label(LabelKind::Framebuffer, fbo, "relic offscreen");
        }

        tracing::debug!(?default_fbo, fbo, width, height, "render context created");

        let window = Rect::from_size(width, height);
        Ok(Self {
            device,
            caps,
            clock,
            default_fbo,
            fbo,
            targets: RenderTargetCache::new(),
            active: ActiveState::default(),
            width,
            height,
            viewport: window,
            viewport_def: window,
            scissor: window,
            stats: FrameStats::new(),
            timer: FrameTimer::new(FRAME_TIMER_WINDOW),
            in_frame: false,
            textures: Arena::new(),
            shaders: Arena::new(),
        })
    }

    pub fn caps(&self) -> &CapabilitySet {
        &self.caps
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn active(&self) -> &ActiveState {
        &self.active
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn targets(&self) -> &RenderTargetCache {
        &self.targets
    }

    /// Window size in pixels.
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Takes effect at the next `begin_frame`.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn default_viewport(&self) -> Rect {
        self.viewport_def
    }

    pub fn scissor(&self) -> Rect {
        self.scissor
    }
}

impl<D: GpuDevice> Drop for RenderContext<D> {
    fn drop(&mut self) {
        if self.in_frame {
            tracing::warn!("render context destroyed mid-frame");
        }
        self.device.bind_framebuffer(self.default_fbo);
        self.device.delete_framebuffer(self.fbo);
        self.targets.release_all(&mut self.device);
        tracing::debug!(
            textures = self.textures.len(),
            shaders = self.shaders.len(),
            "render context destroyed"
        );
    }
}

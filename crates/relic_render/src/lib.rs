//! Relic Render Core
//!
//! Minimal-diff GPU state management for a fixed-function-era renderer:
//! capability detection, pooled render targets on a single framebuffer object,
//! cached pipeline state, two-sided stencil emulation, frame bracketing, and
//! driver debug groups and GPU timers.
//!
//! Everything hangs off one [`RenderContext`] per GPU context. Driver calls go
//! through the [`GpuDevice`] trait; [`RecordingDevice`] runs headless and the
//! `gl` feature adds a `glow` backend.
//!
//! # Feature Flags
//!
//! - `gl` - OpenGL backend via `glow` (default: disabled)
//! - `metrics` - Frame-time profiling at FPS roll-over (default: disabled)

pub mod caps;
pub mod context;
pub mod device;
pub mod error;
mod frame;
#[cfg(feature = "gl")]
pub mod gl;
mod profile;
pub mod recording;
pub mod resources;
pub mod state;
pub mod stencil;
mod target;
pub mod target_cache;

pub use caps::{CapabilitySet, FloatFormat, StencilMode};
pub use context::RenderContext;
pub use device::{
    Attachment, BlendFactor, ClearMask, ColorMask, CompareFunc, DriverInfo, Face, Feature,
    GpuDevice, LabelKind, NativeId, RenderbufferFormat, StencilOp, StencilOps, TextureTarget,
};
pub use error::RenderError;
pub use profile::{Marker, Timing};
pub use recording::{GpuCommand, RecordingDevice};
pub use resources::{ShaderDesc, ShaderHandle, TextureDesc, TextureFormat, TextureHandle};
pub use state::{ActiveState, BlendMode, CullMode, MAX_TEXTURE_UNITS};
pub use stencil::StencilPath;
pub use target_cache::{PoolKind, RenderTargetCache, MAX_RENDER_BUFFERS};

#[cfg(feature = "gl")]
pub use gl::GlowDevice;

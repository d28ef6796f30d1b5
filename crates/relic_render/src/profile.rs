//! GPU debug groups, object labels and elapsed-time queries
//!
//! All three are driver aids for capture tools. They are gated on the
//! detected capabilities and turn into no-ops on drivers without them, so
//! callers can leave them in shipping paths.

use crate::context::RenderContext;
use crate::device::{GpuDevice, LabelKind, NativeId};
use crate::resources::{ShaderHandle, TextureHandle};
use std::ops::{Deref, DerefMut};
use std::time::Duration;

/// Debug group open for the guard's lifetime.
///
/// Derefs to the context so passes keep issuing commands inside the group.
pub struct Marker<'a, D: GpuDevice> {
    ctx: &'a mut RenderContext<D>,
    open: bool,
}

impl<D: GpuDevice> Deref for Marker<'_, D> {
    type Target = RenderContext<D>;

    fn deref(&self) -> &Self::Target {
        self.ctx
    }
}

impl<D: GpuDevice> DerefMut for Marker<'_, D> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.ctx
    }
}

impl<D: GpuDevice> Drop for Marker<'_, D> {
    fn drop(&mut self) {
        if self.open {
            self.ctx.device.pop_debug_group();
        }
    }
}

/// GPU elapsed-time query running for the guard's lifetime.
///
/// `finish` blocks until the driver reports the result. Dropping the guard
/// ends the query and throws the result away.
pub struct Timing<'a, D: GpuDevice> {
    ctx: &'a mut RenderContext<D>,
    query: Option<NativeId>,
}

impl<D: GpuDevice> Timing<'_, D> {
    /// GPU time spent between `timing` and now, if the driver measured it.
    pub fn finish(mut self) -> Option<Duration> {
        self.stop()
    }

    fn stop(&mut self) -> Option<Duration> {
        let query = self.query.take()?;
        let device = &mut self.ctx.device;
        device.end_time_elapsed();
        let ns = device.query_result_ns(query);
        device.delete_query(query);
        ns.map(Duration::from_nanos)
    }
}

impl<D: GpuDevice> Deref for Timing<'_, D> {
    type Target = RenderContext<D>;

    fn deref(&self) -> &Self::Target {
        self.ctx
    }
}

impl<D: GpuDevice> DerefMut for Timing<'_, D> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.ctx
    }
}

impl<D: GpuDevice> Drop for Timing<'_, D> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<D: GpuDevice> RenderContext<D> {
    /// Open a named debug group, closed when the guard drops.
    pub fn marker(&mut self, title: &str) -> Marker<'_, D> {
        let open = self.caps.debug_markers;
        if open {
            self.device.push_debug_group(title);
        }
        Marker { ctx: self, open }
    }

    /// Start timing GPU work, ended by `Timing::finish` or on drop.
    ///
    /// Timers do not nest; open one at a time.
    pub fn timing(&mut self) -> Timing<'_, D> {
        let query = if self.caps.timer_query {
            match self.device.create_query() {
                Ok(query) => {
                    self.device.begin_time_elapsed(query);
                    Some(query)
                }
                Err(err) => {
                    tracing::warn!(%err, "timer query unavailable");
                    None
                }
            }
        } else {
            None
        };
        Timing { ctx: self, query }
    }

    /// Name a driver object in debug output.
    pub fn set_label(&mut self, kind: LabelKind, object: NativeId, label: &str) {
        if self.caps.debug_markers {
            self.device.object_label(kind, object, label);
        }
    }

    /// Label a registered texture. Stale handles are ignored.
    pub fn label_texture(&mut self, texture: TextureHandle, label: &str) {
        if let Some(id) = self.texture(texture).map(|desc| desc.id) {
            self.set_label(LabelKind::Texture, id, label);
        }
    }

    /// Label a registered shader's program. Stale handles are ignored.
    pub fn label_shader(&mut self, shader: ShaderHandle, label: &str) {
        if let Some(program) = self.shader(shader).map(|desc| desc.program) {
            self.set_label(LabelKind::Program, program, label);
        }
    }
}

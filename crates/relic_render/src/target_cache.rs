//! Companion renderbuffer pools
//!
//! An offscreen target needs a full attachment set: a colour target gets a
//! depth renderbuffer beside it and a depth/shadow target gets a colour one.
//! Those companions are pooled by (pool, width, height) and live until the
//! context is dropped. There is no eviction: a level only uses a handful of
//! shadow-map and post-process resolutions.

use crate::device::{GpuDevice, NativeId, RenderbufferFormat};
use crate::error::RenderError;

/// Entry ceiling per pool. Exceeding it is a fatal invariant violation.
pub const MAX_RENDER_BUFFERS: usize = 32;

/// Pool partition, named after the *primary* target kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PoolKind {
    /// Primary is a colour texture; entries are depth renderbuffers.
    Color,
    /// Primary is a depth/shadow texture; entries are colour renderbuffers.
    Depth,
}

impl PoolKind {
    /// Storage format of the companion attachment.
    pub fn companion_format(self) -> RenderbufferFormat {
        match self {
            PoolKind::Color => RenderbufferFormat::Depth16,
            PoolKind::Depth => RenderbufferFormat::Rgb565,
        }
    }

    fn index(self) -> usize {
        match self {
            PoolKind::Color => 0,
            PoolKind::Depth => 1,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct RenderTargetEntry {
    width: i32,
    height: i32,
    id: NativeId,
}

/// Two independent, append-only renderbuffer pools.
#[derive(Debug, Default)]
pub struct RenderTargetCache {
    pools: [Vec<RenderTargetEntry>; 2],
}

impl RenderTargetCache {
    pub fn new() -> Self {
        Self {
            pools: [
                Vec::with_capacity(MAX_RENDER_BUFFERS),
                Vec::with_capacity(MAX_RENDER_BUFFERS),
            ],
        }
    }

    /// Return the companion renderbuffer for a `width` x `height` target,
    /// allocating it on first use.
    ///
    /// # Panics
    ///
    /// Panics if the pool already holds `MAX_RENDER_BUFFERS` entries.
    pub fn acquire<D: GpuDevice + ?Sized>(
        &mut self,
        device: &mut D,
        kind: PoolKind,
        width: i32,
        height: i32,
    ) -> Result<NativeId, RenderError> {
        let pool = &mut self.pools[kind.index()];

        if let Some(entry) = pool
            .iter()
            .find(|e| e.width == width && e.height == height)
        {
            return Ok(entry.id);
        }

        assert!(
            pool.len() < MAX_RENDER_BUFFERS,
            "render target pool {kind:?} exhausted ({MAX_RENDER_BUFFERS} resolutions)"
        );

        let format = kind.companion_format();
        let id = device.create_renderbuffer(format, width, height)?;
        tracing::debug!(?kind, ?format, width, height, id, "allocated companion renderbuffer");

        pool.push(RenderTargetEntry { width, height, id });
        Ok(id)
    }

    pub fn len(&self, kind: PoolKind) -> usize {
        self.pools[kind.index()].len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.iter().all(Vec::is_empty)
    }

    /// Delete every pooled renderbuffer. Only called at context teardown.
    pub fn release_all<D: GpuDevice + ?Sized>(&mut self, device: &mut D) {
        for pool in &mut self.pools {
            for entry in pool.drain(..) {
                device.delete_renderbuffer(entry.id);
            }
        }
    }
}

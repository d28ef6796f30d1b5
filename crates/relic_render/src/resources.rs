//! Texture and shader tables
//!
//! The asset layer registers driver objects here and refers to them through
//! generation-checked handles, so a handle kept past `unregister_*` is caught
//! instead of reaching the driver.

use crate::context::RenderContext;
use crate::device::{GpuDevice, NativeId};
use relic_core::handle::Handle;

/// Pixel formats known to the render core.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    Rgba,
    Rgb16,
    Rgba16,
    RgbaFloat,
    RgbaHalf,
    Red,
    Depth,
    Shadow,
}

impl TextureFormat {
    /// Formats rendered through the depth attachment.
    pub fn is_depth(self) -> bool {
        matches!(self, TextureFormat::Depth | TextureFormat::Shadow)
    }
}

/// Opaque texture as seen by the render core.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TextureDesc {
    pub format: TextureFormat,
    pub width: i32,
    pub height: i32,
    pub cube: bool,
    pub id: NativeId,
}

/// Linked shader program, bound and unbound as a unit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ShaderDesc {
    pub program: NativeId,
}

pub type TextureHandle = Handle<TextureDesc>;
pub type ShaderHandle = Handle<ShaderDesc>;

impl<D: GpuDevice> RenderContext<D> {
    pub fn register_texture(&mut self, desc: TextureDesc) -> TextureHandle {
        self.textures.insert(desc)
    }

    /// Forget a texture. Bindings that still name it are left as they are;
    /// the next bind compares unequal because the slot generation moved on.
    pub fn unregister_texture(&mut self, texture: TextureHandle) -> Option<TextureDesc> {
        self.textures.remove(texture)
    }

    pub fn texture(&self, texture: TextureHandle) -> Option<&TextureDesc> {
        self.textures.get(texture)
    }

    pub fn register_shader(&mut self, desc: ShaderDesc) -> ShaderHandle {
        self.shaders.insert(desc)
    }

    pub fn unregister_shader(&mut self, shader: ShaderHandle) -> Option<ShaderDesc> {
        self.shaders.remove(shader)
    }

    pub fn shader(&self, shader: ShaderHandle) -> Option<&ShaderDesc> {
        self.shaders.get(shader)
    }
}
